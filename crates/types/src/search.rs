//! Vendor-agnostic catalog search criteria and results

use crate::models::{BoundingBox, SecretString};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Airbus optical constellations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirbusConstellation {
	#[serde(rename = "PHR")]
	Pleiades,
	#[serde(rename = "SPOT")]
	Spot,
}

impl AirbusConstellation {
	pub fn as_str(&self) -> &'static str {
		match self {
			AirbusConstellation::Pleiades => "PHR",
			AirbusConstellation::Spot => "SPOT",
		}
	}
}

/// Caller-supplied search criteria, passed through to the resolved adapter.
///
/// Only the time range is universally required. Bounds (either `bbox` or a
/// GeoJSON `geometry`) are required by every vendor; the remaining fields
/// are interpreted by the vendor they belong to and ignored elsewhere.
#[derive(Debug, Clone)]
pub struct SearchParams {
	pub from_time: DateTime<Utc>,
	pub to_time: DateTime<Utc>,
	pub bbox: Option<BoundingBox>,
	/// GeoJSON geometry, used when `bbox` is absent
	pub geometry: Option<Value>,
	pub max_cloud_coverage: Option<f64>,

	// Airbus
	pub constellation: Option<AirbusConstellation>,
	pub max_snow_coverage: Option<f64>,
	pub max_incidence_angle: Option<f64>,
	pub processing_level: Option<String>,

	// Planet
	pub item_type: Option<String>,
	pub product_bundle: Option<String>,
	pub harmonize_to: Option<String>,
	pub planet_api_key: Option<SecretString>,

	// Maxar
	pub product_bands: Option<String>,
	pub min_off_nadir: Option<f64>,
	pub max_off_nadir: Option<f64>,
	pub max_sun_elevation: Option<f64>,
}

impl SearchParams {
	/// Create search criteria for a time range with everything else unset
	pub fn new(from_time: DateTime<Utc>, to_time: DateTime<Utc>) -> Self {
		Self {
			from_time,
			to_time,
			bbox: None,
			geometry: None,
			max_cloud_coverage: None,
			constellation: None,
			max_snow_coverage: None,
			max_incidence_angle: None,
			processing_level: None,
			item_type: None,
			product_bundle: None,
			harmonize_to: None,
			planet_api_key: None,
			product_bands: None,
			min_off_nadir: None,
			max_off_nadir: None,
			max_sun_elevation: None,
		}
	}

	/// Whether any bounds were supplied (bbox takes precedence)
	pub fn has_bounds(&self) -> bool {
		self.bbox.is_some() || self.geometry.is_some()
	}
}

/// One page of catalog search matches.
///
/// Produced fresh per call and never cached; `view_token` is the opaque
/// continuation cursor for the next page and is only meaningful with the
/// page-size context it was issued under.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
	/// Matched catalog items in vendor shape
	#[serde(default, alias = "features")]
	pub data: Vec<Value>,
	#[serde(default, rename = "viewtoken")]
	pub view_token: Option<String>,
	#[serde(default, rename = "hasMore")]
	pub has_more: Option<bool>,
	#[serde(default, rename = "totalResults")]
	pub total_results: Option<u64>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	fn params() -> SearchParams {
		SearchParams::new(
			Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
			Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
		)
	}

	#[test]
	fn test_has_bounds() {
		let mut p = params();
		assert!(!p.has_bounds());
		p.geometry = Some(serde_json::json!({ "type": "Point", "coordinates": [0.0, 0.0] }));
		assert!(p.has_bounds());
		p.bbox = Some(BoundingBox::new(1.0, 2.0, 3.0, 4.0));
		assert!(p.has_bounds());
	}

	#[test]
	fn test_search_result_deserializes_wire_shape() {
		let json = r#"{
			"data": [{"id": "prod-1"}, {"id": "prod-2"}],
			"viewtoken": "tok-abc",
			"hasMore": true,
			"totalResults": 42
		}"#;
		let result: SearchResult = serde_json::from_str(json).unwrap();
		assert_eq!(result.data.len(), 2);
		assert_eq!(result.view_token.as_deref(), Some("tok-abc"));
		assert_eq!(result.has_more, Some(true));
		assert_eq!(result.total_results, Some(42));
	}

	#[test]
	fn test_search_result_tolerates_missing_fields() {
		let result: SearchResult = serde_json::from_str(r#"{"data": []}"#).unwrap();
		assert!(result.data.is_empty());
		assert!(result.view_token.is_none());
		assert!(result.has_more.is_none());
	}
}
