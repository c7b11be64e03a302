//! Error taxonomy for gateway operations

use crate::providers::AdapterError;
use thiserror::Error;

/// Failure modes surfaced by gateway operations.
///
/// Precondition variants (`MissingArgument`, `UnknownProvider`,
/// `Unauthenticated`, `Adapter`) are raised before any network call.
/// Everything propagates to the caller unmodified; this layer never
/// retries and never logs an error it did not return.
#[derive(Error, Debug)]
pub enum TpdiError {
	#[error("Missing required argument: {name}")]
	MissingArgument { name: &'static str },

	#[error("Unknown data provider {provider}")]
	UnknownProvider { provider: String },

	#[error("Must be authenticated to perform request")]
	Unauthenticated,

	#[error("Could not parse instance id from URL: {url}")]
	InvalidUrl { url: String },

	#[error(transparent)]
	Adapter(#[from] AdapterError),

	#[error("Request timed out after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("Request was cancelled")]
	Cancelled,

	#[error("Upstream request failed with HTTP {status_code}: {message}")]
	Upstream { status_code: u16, message: String },

	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("Invalid response: {reason}")]
	InvalidResponse { reason: String },
}

impl TpdiError {
	/// Extract the HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			TpdiError::Upstream { status_code, .. } => Some(*status_code),
			TpdiError::Http(err) => err.status().map(|status| status.as_u16()),
			_ => None,
		}
	}

	/// Whether the failure was raised before any network attempt
	pub fn is_precondition(&self) -> bool {
		matches!(
			self,
			TpdiError::MissingArgument { .. }
				| TpdiError::UnknownProvider { .. }
				| TpdiError::Unauthenticated
				| TpdiError::InvalidUrl { .. }
				| TpdiError::Adapter(_)
		)
	}
}

/// Result type for gateway operations
pub type TpdiResult<T> = Result<T, TpdiError>;
