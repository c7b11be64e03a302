//! TPDI Client
//!
//! Client-side abstraction over the third-party data import (TPDI)
//! brokerage API: discover purchasable quota, search catalogs across
//! multiple imagery vendors, place and manage purchase transactions, and
//! retrieve preview assets behind one uniform surface.
//!
//! # Example
//!
//! ```no_run
//! use tpdi_client::{TpdiClientBuilder, StaticCredentials};
//! use tpdi_client::{AirbusConstellation, BoundingBox, SearchParams, ThirdPartyProvider};
//!
//! # async fn example() -> tpdi_client::TpdiResult<()> {
//! let client = TpdiClientBuilder::new()
//!     .with_credentials(StaticCredentials::new("auth-token"))
//!     .build()?;
//!
//! let mut params = SearchParams::new(
//!     "2024-01-01T00:00:00Z".parse().unwrap(),
//!     "2024-02-01T00:00:00Z".parse().unwrap(),
//! );
//! params.bbox = Some(BoundingBox::new(12.1, 41.9, 12.6, 42.2));
//! params.constellation = Some(AirbusConstellation::Pleiades);
//!
//! let page = client
//!     .search(ThirdPartyProvider::Airbus, &params, None, Some(10), None)
//!     .await?;
//! println!("{} items", page.data.len());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

// Core domain types
pub use tpdi_types::{
	AdapterError,
	AdapterResult,
	AirbusConstellation,
	BoundingBox,
	CompatibleCollection,
	// Auth
	CredentialProvider,
	DataProviderAdapter,
	EnvCredentials,
	NoCredentials,
	Quota,
	RequestConfiguration,
	SearchParams,
	SearchResult,
	SecretString,
	StaticCredentials,
	ThirdPartyProvider,
	TpdiCollection,
	// Errors
	TpdiError,
	TpdiResult,
	Transaction,
	TransactionParams,
	TransactionSearchParams,
	TransactionSearchResult,
	TransactionStatus,
};

// Adapters and registry
pub use tpdi_adapters::{AirbusAdapter, MaxarAdapter, PlanetAdapter, ProviderRegistry};

// Gateway
pub use tpdi_gateway::{
	parse_instance_id, CapabilitiesFetcher, TpdiClient, DEFAULT_SEARCH_PAGE_SIZE,
	DEFAULT_TIMEOUT, DEFAULT_TPDI_SERVICE_URL,
};

// Module aliases for qualified access
pub mod types {
	pub use tpdi_types::*;
}

pub mod adapters {
	pub use tpdi_adapters::*;
}

pub mod gateway {
	pub use tpdi_gateway::*;
}

pub mod mocks;

// Re-export external dependencies used in public signatures
pub use reqwest;
pub use serde_json;

/// Builder for configuring a [`TpdiClient`].
///
/// Defaults: public service endpoint, the three built-in vendor adapters,
/// ambient credentials from the environment.
pub struct TpdiClientBuilder {
	service_url: String,
	registry: ProviderRegistry,
	credentials: Arc<dyn CredentialProvider>,
}

impl TpdiClientBuilder {
	pub fn new() -> Self {
		Self {
			service_url: DEFAULT_TPDI_SERVICE_URL.to_string(),
			registry: ProviderRegistry::with_defaults(),
			credentials: Arc::new(EnvCredentials::default()),
		}
	}

	/// Point the client at a different service root (e.g. a staging
	/// deployment or a local mock).
	pub fn with_service_url(mut self, service_url: impl Into<String>) -> Self {
		self.service_url = service_url.into();
		self
	}

	/// Replace the adapter set entirely
	pub fn with_registry(mut self, registry: ProviderRegistry) -> Self {
		self.registry = registry;
		self
	}

	/// Register an additional adapter (replacing none)
	pub fn with_provider(mut self, adapter: Box<dyn DataProviderAdapter>) -> Self {
		self.registry.register(adapter);
		self
	}

	/// Inject the credential supplier consulted on every call
	pub fn with_credentials(mut self, credentials: impl CredentialProvider + 'static) -> Self {
		self.credentials = Arc::new(credentials);
		self
	}

	pub fn build(self) -> TpdiResult<TpdiClient> {
		TpdiClient::new(self.service_url, Arc::new(self.registry), self.credentials)
	}
}

impl Default for TpdiClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builder_defaults() {
		let client = TpdiClientBuilder::new()
			.with_credentials(StaticCredentials::new("tok"))
			.build()
			.unwrap();
		assert_eq!(client.service_url(), DEFAULT_TPDI_SERVICE_URL);
	}

	#[test]
	fn test_builder_with_custom_registry_and_url() {
		let client = TpdiClientBuilder::new()
			.with_service_url("https://example.com/dataimport")
			.with_registry(ProviderRegistry::new())
			.with_credentials(NoCredentials)
			.build()
			.unwrap();
		assert_eq!(client.service_url(), "https://example.com/dataimport");
	}
}
