//! Maxar adapter (WorldView)

use crate::{base_data_filter, bounds_object, merge_pagination};
use serde_json::{json, Map, Value};
use tpdi_types::{
	AdapterError, AdapterResult, DataProviderAdapter, SearchParams, ThirdPartyProvider,
	TransactionParams,
};

/// Product bands requested when the caller does not specify any
const DEFAULT_PRODUCT_BANDS: &str = "4BB";

/// Adapter for the Maxar catalog. Subscriptions are not offered by this
/// vendor.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxarAdapter;

impl MaxarAdapter {
	fn data_filter(&self, params: &SearchParams) -> Map<String, Value> {
		let mut filter = base_data_filter(params);
		if let Some(min_off_nadir) = params.min_off_nadir {
			filter.insert("minOffNadir".to_string(), json!(min_off_nadir));
		}
		if let Some(max_off_nadir) = params.max_off_nadir {
			filter.insert("maxOffNadir".to_string(), json!(max_off_nadir));
		}
		if let Some(max_sun_elevation) = params.max_sun_elevation {
			filter.insert("maxSunElevation".to_string(), json!(max_sun_elevation));
		}
		filter
	}

	fn product_bands<'a>(&self, params: &'a SearchParams) -> &'a str {
		params
			.product_bands
			.as_deref()
			.unwrap_or(DEFAULT_PRODUCT_BANDS)
	}
}

impl DataProviderAdapter for MaxarAdapter {
	fn provider(&self) -> ThirdPartyProvider {
		ThirdPartyProvider::Maxar
	}

	fn search_payload(&self, params: &SearchParams) -> AdapterResult<Value> {
		let bounds = bounds_object(self.provider(), params)?;
		Ok(json!({
			"provider": self.provider(),
			"bounds": bounds,
			"data": [{
				"productBands": self.product_bands(params),
				"dataFilter": self.data_filter(params),
			}],
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

		let mut data = Map::new();
		data.insert("productBands".to_string(), json!(self.product_bands(params)));
		if items.is_empty() {
			data.insert("dataFilter".to_string(), json!(self.data_filter(params)));
		} else {
			data.insert("selectedImages".to_string(), json!(items));
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
				"bounds": bounds,
				"data": [Value::Object(data)],
			}),
		);
		Ok(Value::Object(payload))
	}

	fn ensure_subscriptions_supported(&self) -> AdapterResult<()> {
		Err(AdapterError::SubscriptionsNotSupported {
			provider: self.provider(),
		})
	}
}
