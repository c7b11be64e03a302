//! Core adapter trait each vendor implementation must satisfy

use super::{AdapterResult, ThirdPartyProvider};
use crate::search::SearchParams;
use crate::transactions::TransactionParams;
use serde_json::Value;
use std::fmt::Debug;

/// Capability contract for a single imagery vendor.
///
/// Adapters translate vendor-agnostic search and order requests into the
/// vendor's payload shape and declare which operations the vendor supports.
/// Payload building is pure: adapters never perform I/O, the gateway owns
/// the network call.
pub trait DataProviderAdapter: Send + Sync + Debug {
	/// Identity of the vendor this adapter speaks for
	fn provider(&self) -> ThirdPartyProvider;

	/// Build the vendor-shaped search payload for the `/search` endpoint
	fn search_payload(&self, params: &SearchParams) -> AdapterResult<Value>;

	/// Merge pagination fields for a search page into the outbound query
	/// parameters.
	///
	/// A `count` of zero is ignored; the continuation token is forwarded
	/// verbatim when present.
	fn apply_search_pagination(
		&self,
		query: &mut Vec<(String, String)>,
		count: u32,
		view_token: Option<&str>,
	);

	/// Build the vendor-shaped order/subscription payload.
	///
	/// When `items` is non-empty the payload requests those exact products;
	/// otherwise the vendor-specific data filter derived from `params` is
	/// sent instead and the server resolves matching products.
	fn order_payload(
		&self,
		name: &str,
		collection_id: Option<&str>,
		items: &[String],
		params: &SearchParams,
		order_params: Option<&TransactionParams>,
	) -> AdapterResult<Value>;

	/// No-op when the vendor supports subscriptions, fails with
	/// `SubscriptionsNotSupported` otherwise.
	fn ensure_subscriptions_supported(&self) -> AdapterResult<()>;
}
