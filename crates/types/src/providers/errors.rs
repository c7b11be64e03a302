//! Error types for provider adapter operations

use super::ThirdPartyProvider;
use thiserror::Error;

/// Failures raised while building vendor payloads or checking capabilities.
///
/// All variants are precondition failures: they are raised before any
/// network call is attempted.
#[derive(Error, Debug)]
pub enum AdapterError {
	#[error("Subscriptions are not supported for provider {provider}")]
	SubscriptionsNotSupported { provider: ThirdPartyProvider },

	#[error("Missing search parameter for {provider}: {field}")]
	MissingSearchParameter {
		provider: ThirdPartyProvider,
		field: &'static str,
	},

	#[error("Invalid search parameter for {provider}: {reason}")]
	InvalidSearchParameter {
		provider: ThirdPartyProvider,
		reason: String,
	},
}

/// Result type for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;
