//! Capability-document retrieval for the imagery-layer side of the service
//!
//! Simple glue, architecturally unrelated to the transaction core: fetches
//! a layer listing from an OGC endpoint and extracts instance ids from
//! service URLs. Capability documents are near-static, so responses are
//! cached by URL (unlike transaction data, which is never cached).

use crate::request::{expect_success, parse_json};
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;
use tpdi_types::{CredentialProvider, TpdiError, TpdiResult};

/// Hostnames serving the v3 OGC endpoints (`{host}ogc/wms/{instanceId}`)
pub const SERVICE_HOSTNAMES_V3: &[&str] = &[
	"https://services.sentinel-hub.com/",
	"https://services-uswest2.sentinel-hub.com/",
	"https://creodias.sentinel-hub.com/",
	"https://shservices.mundiwebservices.com/",
];

/// Hostnames serving the legacy v1/v2 endpoints (`{host}v1/wms/{instanceId}`)
pub const SERVICE_HOSTNAMES_V1_OR_V2: &[&str] = &["https://eocloud.sentinel-hub.com/"];

const INSTANCE_ID_LENGTH: usize = 36;

/// Extract the instance id from an OGC service URL.
///
/// Checks the known v3 hostname layouts first, then the legacy ones, and
/// fails naming the URL when none match.
pub fn parse_instance_id(base_url: &str) -> TpdiResult<&str> {
	let prefixes = SERVICE_HOSTNAMES_V3
		.iter()
		.map(|hostname| format!("{hostname}ogc/wms/"))
		.chain(
			SERVICE_HOSTNAMES_V1_OR_V2
				.iter()
				.map(|hostname| format!("{hostname}v1/wms/")),
		);
	for prefix in prefixes {
		if !base_url.starts_with(&prefix) {
			continue;
		}
		if let Some(instance_id) = base_url.get(prefix.len()..prefix.len() + INSTANCE_ID_LENGTH) {
			return Ok(instance_id);
		}
	}
	Err(TpdiError::InvalidUrl {
		url: base_url.to_string(),
	})
}

/// Fetches capability documents, caching them by URL.
#[derive(Debug, Clone)]
pub struct CapabilitiesFetcher {
	http: reqwest::Client,
	credentials: Arc<dyn CredentialProvider>,
	cache: Arc<DashMap<String, Value>>,
}

impl CapabilitiesFetcher {
	pub fn new(credentials: Arc<dyn CredentialProvider>) -> Self {
		Self {
			http: reqwest::Client::new(),
			credentials,
			cache: Arc::new(DashMap::new()),
		}
	}

	/// Fetch the JSON capability document and return its `layers` array.
	///
	/// `force_fetch` bypasses (and refreshes) the cache. The bearer header
	/// is attached when a credential is available; capability endpoints
	/// also serve unauthenticated requests for public instances.
	pub async fn fetch_layers(&self, base_url: &str, force_fetch: bool) -> TpdiResult<Vec<Value>> {
		let url = format!("{base_url}?request=GetCapabilities&format=application/json");
		if !force_fetch {
			if let Some(document) = self.cache.get(&url) {
				return layers_of(&document);
			}
		}

		let mut request = self.http.get(&url);
		if let Some(token) = self.credentials.auth_token() {
			request = request.bearer_auth(token.expose_secret());
		}
		let response = expect_success(request.send().await?).await?;
		let document: Value = parse_json(response).await?;
		let layers = layers_of(&document)?;
		self.cache.insert(url, document);
		Ok(layers)
	}
}

fn layers_of(document: &Value) -> TpdiResult<Vec<Value>> {
	document
		.get("layers")
		.and_then(Value::as_array)
		.cloned()
		.ok_or_else(|| TpdiError::InvalidResponse {
			reason: "capability document has no layers array".to_string(),
		})
}
