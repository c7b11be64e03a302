//! Airbus adapter (Pleiades and SPOT constellations)

use crate::{base_data_filter, bounds_object, merge_pagination};
use serde_json::{json, Map, Value};
use tpdi_types::{
	AdapterError, AdapterResult, DataProviderAdapter, SearchParams, ThirdPartyProvider,
	TransactionParams,
};

/// Adapter for the Airbus OneAtlas catalog.
///
/// Requires a constellation in the search criteria; subscriptions are not
/// offered by this vendor.
#[derive(Debug, Default, Clone, Copy)]
pub struct AirbusAdapter;

impl AirbusAdapter {
	fn data_filter(&self, params: &SearchParams) -> Map<String, Value> {
		let mut filter = base_data_filter(params);
		if let Some(max_snow_coverage) = params.max_snow_coverage {
			filter.insert("maxSnowCoverage".to_string(), json!(max_snow_coverage));
		}
		if let Some(max_incidence_angle) = params.max_incidence_angle {
			filter.insert("maxIncidenceAngle".to_string(), json!(max_incidence_angle));
		}
		if let Some(processing_level) = &params.processing_level {
			filter.insert("processingLevel".to_string(), json!(processing_level));
		}
		filter
	}

	fn constellation(&self, params: &SearchParams) -> AdapterResult<&'static str> {
		params
			.constellation
			.map(|constellation| constellation.as_str())
			.ok_or(AdapterError::MissingSearchParameter {
				provider: ThirdPartyProvider::Airbus,
				field: "constellation",
			})
	}
}

impl DataProviderAdapter for AirbusAdapter {
	fn provider(&self) -> ThirdPartyProvider {
		ThirdPartyProvider::Airbus
	}

	fn search_payload(&self, params: &SearchParams) -> AdapterResult<Value> {
		let bounds = bounds_object(self.provider(), params)?;
		let constellation = self.constellation(params)?;
		Ok(json!({
			"provider": self.provider(),
			"bounds": bounds,
			"data": [{
				"constellation": constellation,
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
		let constellation = self.constellation(params)?;

		let mut data = Map::new();
		data.insert("constellation".to_string(), json!(constellation));
		if items.is_empty() {
			// no explicit products: let the server resolve the filter
			data.insert("dataFilter".to_string(), json!(self.data_filter(params)));
		} else {
			let products: Vec<Value> = items.iter().map(|id| json!({ "id": id })).collect();
			data.insert("products".to_string(), json!(products));
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
