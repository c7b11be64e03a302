//! Planet adapter (PlanetScope)

use crate::{base_data_filter, bounds_object, merge_pagination};
use serde_json::{json, Map, Value};
use tpdi_types::{
	AdapterError, AdapterResult, DataProviderAdapter, SearchParams, ThirdPartyProvider,
	TransactionParams,
};

/// Adapter for the Planet catalog.
///
/// The only built-in vendor that supports subscriptions. Planet requests
/// carry the caller's Planet API key inside the payload, alongside the
/// service-level bearer credential.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlanetAdapter;

impl PlanetAdapter {
	fn required<'a, T>(&self, value: Option<&'a T>, field: &'static str) -> AdapterResult<&'a T> {
		value.ok_or(AdapterError::MissingSearchParameter {
			provider: ThirdPartyProvider::Planet,
			field,
		})
	}

	/// The `data[0]` object shared by search and order payloads, minus the
	/// filter/items part.
	fn data_object(&self, params: &SearchParams) -> AdapterResult<Map<String, Value>> {
		let item_type = self.required(params.item_type.as_ref(), "itemType")?;
		let product_bundle = self.required(params.product_bundle.as_ref(), "productBundle")?;

		let mut data = Map::new();
		data.insert("itemType".to_string(), json!(item_type));
		data.insert("productBundle".to_string(), json!(product_bundle));
		if let Some(harmonize_to) = &params.harmonize_to {
			data.insert("harmonizeTo".to_string(), json!(harmonize_to));
		}
		Ok(data)
	}

	fn api_key<'a>(&self, params: &'a SearchParams) -> AdapterResult<&'a str> {
		self.required(params.planet_api_key.as_ref(), "planetApiKey")
			.map(|key| key.expose_secret())
	}
}

impl DataProviderAdapter for PlanetAdapter {
	fn provider(&self) -> ThirdPartyProvider {
		ThirdPartyProvider::Planet
	}

	fn search_payload(&self, params: &SearchParams) -> AdapterResult<Value> {
		let bounds = bounds_object(self.provider(), params)?;
		let mut data = self.data_object(params)?;
		data.insert("dataFilter".to_string(), json!(base_data_filter(params)));

		Ok(json!({
			"provider": self.provider(),
			"planetApiKey": self.api_key(params)?,
			"bounds": bounds,
			"data": [Value::Object(data)],
		}))
	}

	fn apply_search_pagination(
		&self,
		query: &mut Vec<(String, String)>,
		count: u32,
		view_token: Option<&str>,
	) {
		merge_pagination(query, count, view_token);
	}

	fn order_payload(
		&self,
		name: &str,
		collection_id: Option<&str>,
		items: &[String],
		params: &SearchParams,
		order_params: Option<&TransactionParams>,
	) -> AdapterResult<Value> {
		let bounds = bounds_object(self.provider(), params)?;
		let mut data = self.data_object(params)?;
		if items.is_empty() {
			data.insert("dataFilter".to_string(), json!(base_data_filter(params)));
		} else {
			data.insert("itemIds".to_string(), json!(items));
		}
		if let Some(order_params) = order_params {
			for (key, value) in &order_params.metadata {
				data.insert(key.clone(), value.clone());
			}
		}

		let mut payload = Map::new();
		payload.insert("name".to_string(), json!(name));
		if let Some(collection_id) = collection_id {
			payload.insert("collectionId".to_string(), json!(collection_id));
		}
		if let Some(limit) = order_params.and_then(|p| p.limit_sqkm) {
			payload.insert("sqkmLimit".to_string(), json!(limit));
		}
		payload.insert(
			"input".to_string(),
			json!({
				"provider": self.provider(),
				"planetApiKey": self.api_key(params)?,
				"bounds": bounds,
				"data": [Value::Object(data)],
			}),
		);
		Ok(Value::Object(payload))
	}

	fn ensure_subscriptions_supported(&self) -> AdapterResult<()> {
		Ok(())
	}
}
