//! Per-call request overrides

use crate::models::SecretString;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Overrides scoped to a single gateway call.
///
/// Ephemeral by contract: build one per call and discard it afterwards;
/// configurations are never shared across calls.
#[derive(Debug, Clone, Default)]
pub struct RequestConfiguration {
	/// Explicit credential, taking precedence over the injected provider
	pub auth_token: Option<SecretString>,
	/// Deadline for the whole call, network wait included
	pub timeout: Option<Duration>,
	/// External cancellation signal raced against the call
	pub cancellation: Option<CancellationToken>,
}

impl RequestConfiguration {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_auth_token(mut self, token: impl Into<SecretString>) -> Self {
		self.auth_token = Some(token.into());
		self
	}

	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
		self.cancellation = Some(token);
		self
	}
}
