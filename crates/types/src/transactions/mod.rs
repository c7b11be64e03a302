//! Purchase transaction domain model (orders and subscriptions)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-authoritative lifecycle state of a transaction.
///
/// The client never enforces transition legality locally; it forwards the
/// requested transition and reflects whatever state the server returns.
/// `Unknown` absorbs states introduced by the server after this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionStatus {
	Created,
	Confirmed,
	Running,
	Done,
	Partial,
	Failed,
	Cancelled,
	Deleted,
	#[serde(other)]
	Unknown,
}

/// An order or subscription purchase record tracked by the service.
///
/// The id is assigned by the server and stable for the transaction's
/// lifetime. `input` carries the provider-specific payload the transaction
/// was created from, echoed back verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
	pub id: String,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub collection_id: Option<String>,
	pub status: TransactionStatus,
	#[serde(default)]
	pub created: Option<DateTime<Utc>>,
	#[serde(default)]
	pub user_id: Option<String>,
	/// Area covered by the transaction in square kilometers
	#[serde(default)]
	pub sqkm: Option<f64>,
	/// Provider-specific request payload echoed by the server
	#[serde(default)]
	pub input: Option<Value>,
}

/// One page of a transaction listing, same continuation-token contract as
/// catalog search.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionSearchResult {
	#[serde(default)]
	pub data: Vec<Transaction>,
	#[serde(default, rename = "viewtoken")]
	pub view_token: Option<String>,
	#[serde(default, rename = "hasMore")]
	pub has_more: Option<bool>,
}

/// Optional filters for listing orders or subscriptions
#[derive(Debug, Clone, Default)]
pub struct TransactionSearchParams {
	pub collection_id: Option<String>,
	pub status: Option<TransactionStatus>,
	/// Free-text match against transaction names
	pub search: Option<String>,
}

impl TransactionSearchParams {
	/// Render the filters as query parameters
	pub fn to_query(&self) -> Vec<(String, String)> {
		let mut query = Vec::new();
		if let Some(collection_id) = &self.collection_id {
			query.push(("collectionId".to_string(), collection_id.clone()));
		}
		if let Some(status) = &self.status {
			// serde renders the wire spelling, strip the JSON quotes
			let status = serde_json::to_string(status).unwrap_or_default();
			query.push(("status".to_string(), status.trim_matches('"').to_string()));
		}
		if let Some(search) = &self.search {
			query.push(("search".to_string(), search.clone()));
		}
		query
	}
}

/// Optional knobs applied when creating an order or subscription, merged
/// into the vendor payload by the adapter.
#[derive(Debug, Clone, Default)]
pub struct TransactionParams {
	/// Upper bound on ordered area in square kilometers
	pub limit_sqkm: Option<f64>,
	/// Extra vendor-interpreted fields merged into the order input
	pub metadata: Map<String, Value>,
}
