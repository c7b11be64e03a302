//! Mock adapters and fixtures for tests and demos

use serde_json::{json, Value};
use tpdi_types::{
	AdapterResult, AirbusConstellation, BoundingBox, DataProviderAdapter, SearchParams,
	SecretString, ThirdPartyProvider, TransactionParams,
};

/// Minimal adapter standing in for a vendor in tests.
///
/// Produces trivially-shaped payloads and accepts any search criteria, so
/// tests can exercise the gateway without satisfying real vendor
/// requirements.
#[derive(Debug, Clone)]
pub struct MockDataProvider {
	pub provider: ThirdPartyProvider,
	pub subscriptions_supported: bool,
}

impl MockDataProvider {
	pub fn new(provider: ThirdPartyProvider) -> Self {
		Self {
			provider,
			subscriptions_supported: true,
		}
	}

	pub fn without_subscriptions(provider: ThirdPartyProvider) -> Self {
		Self {
			provider,
			subscriptions_supported: false,
		}
	}
}

impl DataProviderAdapter for MockDataProvider {
	fn provider(&self) -> ThirdPartyProvider {
		self.provider
	}

	fn search_payload(&self, params: &SearchParams) -> AdapterResult<Value> {
		Ok(json!({
			"provider": self.provider,
			"timeRange": {
				"from": params.from_time.to_rfc3339(),
				"to": params.to_time.to_rfc3339(),
			},
		}))
	}

	fn apply_search_pagination(
		&self,
		query: &mut Vec<(String, String)>,
		count: u32,
		view_token: Option<&str>,
	) {
		if count > 0 {
			query.push(("count".to_string(), count.to_string()));
		}
		if let Some(token) = view_token {
			query.push(("viewtoken".to_string(), token.to_string()));
		}
	}

	fn order_payload(
		&self,
		name: &str,
		collection_id: Option<&str>,
		items: &[String],
		_params: &SearchParams,
		_order_params: Option<&TransactionParams>,
	) -> AdapterResult<Value> {
		Ok(json!({
			"name": name,
			"collectionId": collection_id,
			"input": { "provider": self.provider, "items": items },
		}))
	}

	fn ensure_subscriptions_supported(&self) -> AdapterResult<()> {
		if self.subscriptions_supported {
			Ok(())
		} else {
			Err(tpdi_types::AdapterError::SubscriptionsNotSupported {
				provider: self.provider,
			})
		}
	}
}

/// Search criteria valid for every built-in vendor
pub fn mock_search_params() -> SearchParams {
	let mut params = SearchParams::new(
		"2024-01-01T00:00:00Z".parse().unwrap(),
		"2024-02-01T00:00:00Z".parse().unwrap(),
	);
	params.bbox = Some(BoundingBox::new(12.1, 41.9, 12.6, 42.2));
	params.max_cloud_coverage = Some(20.0);
	params.constellation = Some(AirbusConstellation::Pleiades);
	params.item_type = Some("PSScene".to_string());
	params.product_bundle = Some("analytic_udm2".to_string());
	params.planet_api_key = Some(SecretString::from("mock-planet-key"));
	params
}
