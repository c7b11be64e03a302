//! Shared domain models for the TPDI client

use serde::ser::SerializeSeq;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub mod secret_string;

pub use secret_string::SecretString;

/// Catalog collections purchasable through the brokerage service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TpdiCollection {
	#[serde(rename = "AIRBUS_PLEIADES")]
	AirbusPleiades,
	#[serde(rename = "AIRBUS_SPOT")]
	AirbusSpot,
	#[serde(rename = "PLANET_SCOPE")]
	PlanetScope,
	#[serde(rename = "MAXAR_WORLDVIEW")]
	MaxarWorldview,
}

impl TpdiCollection {
	pub fn as_str(&self) -> &'static str {
		match self {
			TpdiCollection::AirbusPleiades => "AIRBUS_PLEIADES",
			TpdiCollection::AirbusSpot => "AIRBUS_SPOT",
			TpdiCollection::PlanetScope => "PLANET_SCOPE",
			TpdiCollection::MaxarWorldview => "MAXAR_WORLDVIEW",
		}
	}
}

impl fmt::Display for TpdiCollection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Vendor-scoped purchase allowance for a collection.
///
/// Immutable snapshot as reported by the service; the client never mutates
/// quota records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quota {
	pub id: String,
	pub collection_id: String,
	/// Total purchasable area in square kilometers
	#[serde(default)]
	pub quota_sqkm: Option<f64>,
	/// Area already consumed in square kilometers
	#[serde(default)]
	pub quota_used: Option<f64>,
}

/// Catalog collection that accepts the items of a given search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibleCollection {
	pub id: String,
	pub name: String,
}

/// Geographic bounding box in `[west, south, east, north]` order.
///
/// Serializes to the flat four-element array the service expects.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f64; 4]")]
pub struct BoundingBox {
	pub west: f64,
	pub south: f64,
	pub east: f64,
	pub north: f64,
}

impl BoundingBox {
	pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
		Self {
			west,
			south,
			east,
			north,
		}
	}

	pub fn as_array(&self) -> [f64; 4] {
		[self.west, self.south, self.east, self.north]
	}
}

impl From<[f64; 4]> for BoundingBox {
	fn from(b: [f64; 4]) -> Self {
		Self::new(b[0], b[1], b[2], b[3])
	}
}

impl Serialize for BoundingBox {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(4))?;
		for coord in self.as_array() {
			seq.serialize_element(&coord)?;
		}
		seq.end()
	}
}
