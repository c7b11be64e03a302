//! TPDI Adapters
//!
//! Vendor-specific adapters for the TPDI client, plus the registry the
//! gateway resolves them from. Each adapter translates vendor-agnostic
//! search/order requests into its vendor's payload shape; none of them
//! perform I/O.

pub mod airbus;
pub mod maxar;
pub mod planet;

pub use airbus::AirbusAdapter;
pub use maxar::MaxarAdapter;
pub use planet::PlanetAdapter;
pub use tpdi_types::{AdapterError, AdapterResult, DataProviderAdapter, ThirdPartyProvider};

use serde_json::{json, Map, Value};
use tpdi_types::{SearchParams, TpdiError, TpdiResult};

/// Immutable lookup from provider identity to its adapter.
///
/// The adapter set is small and static, so resolution is a linear scan by
/// identity. Build the registry at startup and hand it to the gateway;
/// there is no runtime registration afterwards.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
	providers: Vec<Box<dyn DataProviderAdapter>>,
}

impl ProviderRegistry {
	/// Empty registry, for assembling a custom adapter set
	pub fn new() -> Self {
		Self {
			providers: Vec::new(),
		}
	}

	/// Registry with the three built-in vendors
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		registry.register(Box::new(AirbusAdapter));
		registry.register(Box::new(PlanetAdapter));
		registry.register(Box::new(MaxarAdapter));
		registry
	}

	pub fn register(&mut self, adapter: Box<dyn DataProviderAdapter>) {
		self.providers.push(adapter);
	}

	/// Resolve a provider identity to its adapter, failing fast when no
	/// adapter matches.
	pub fn resolve(&self, provider: ThirdPartyProvider) -> TpdiResult<&dyn DataProviderAdapter> {
		self.providers
			.iter()
			.find(|adapter| adapter.provider() == provider)
			.map(|adapter| adapter.as_ref())
			.ok_or_else(|| TpdiError::UnknownProvider {
				provider: provider.to_string(),
			})
	}

	pub fn len(&self) -> usize {
		self.providers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}
}

/// Build the `bounds` object every vendor payload carries.
///
/// A bbox takes precedence over a GeoJSON geometry; absence of both is a
/// precondition failure naming the vendor.
pub(crate) fn bounds_object(
	provider: ThirdPartyProvider,
	params: &SearchParams,
) -> AdapterResult<Value> {
	if let Some(bbox) = &params.bbox {
		return Ok(json!({ "bbox": bbox }));
	}
	if let Some(geometry) = &params.geometry {
		return Ok(json!({ "geometry": geometry }));
	}
	Err(AdapterError::MissingSearchParameter {
		provider,
		field: "bbox or geometry",
	})
}

/// Insert `timeRange` plus any set optional filter into a `dataFilter` map
pub(crate) fn base_data_filter(params: &SearchParams) -> Map<String, Value> {
	let mut filter = Map::new();
	filter.insert(
		"timeRange".to_string(),
		json!({
			"from": params.from_time.to_rfc3339(),
			"to": params.to_time.to_rfc3339(),
		}),
	);
	if let Some(max_cloud_coverage) = params.max_cloud_coverage {
		filter.insert("maxCloudCoverage".to_string(), json!(max_cloud_coverage));
	}
	filter
}

/// Shared query-parameter merge used by the built-in adapters.
///
/// Kept private to each vendor's pagination entry point; the trait has no
/// default implementation on purpose.
pub(crate) fn merge_pagination(
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
