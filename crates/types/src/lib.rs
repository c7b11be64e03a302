//! TPDI Types
//!
//! Domain types, the provider-adapter contract, credential resolution and
//! the error taxonomy shared by the TPDI client crates.

pub mod auth;
pub mod errors;
pub mod models;
pub mod providers;
pub mod request_config;
pub mod search;
pub mod transactions;

pub use auth::{CredentialProvider, EnvCredentials, NoCredentials, StaticCredentials};
pub use errors::{TpdiError, TpdiResult};
pub use models::{BoundingBox, CompatibleCollection, Quota, SecretString, TpdiCollection};
pub use providers::{AdapterError, AdapterResult, DataProviderAdapter, ThirdPartyProvider};
pub use request_config::RequestConfiguration;
pub use search::{AirbusConstellation, SearchParams, SearchResult};
pub use transactions::{
	Transaction, TransactionParams, TransactionSearchParams, TransactionSearchResult,
	TransactionStatus,
};

// Re-export commonly paired external crates for downstream convenience
pub use chrono;
pub use serde_json;
