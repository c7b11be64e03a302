//! Credential resolution for outbound requests
//!
//! Every call needs a bearer credential. Resolution order is: explicit
//! per-call override, then the provider injected at gateway construction.
//! The ambient environment lookup is one concrete implementation of the
//! trait, not a hardcoded global.

use crate::models::SecretString;
use std::fmt::Debug;

/// Default environment variable consulted by [`EnvCredentials`]
pub const DEFAULT_AUTH_TOKEN_VAR: &str = "TPDI_AUTH_TOKEN";

/// Supplies the bearer credential attached to every outbound request.
///
/// Implementations must be cheap to call; the gateway consults the provider
/// once per operation.
#[cfg_attr(test, mockall::automock)]
pub trait CredentialProvider: Send + Sync + Debug {
	/// Current credential, or `None` when unauthenticated
	fn auth_token(&self) -> Option<SecretString>;
}

/// Fixed credential supplied at construction time
#[derive(Debug, Clone)]
pub struct StaticCredentials {
	token: SecretString,
}

impl StaticCredentials {
	pub fn new(token: impl Into<SecretString>) -> Self {
		Self {
			token: token.into(),
		}
	}
}

impl CredentialProvider for StaticCredentials {
	fn auth_token(&self) -> Option<SecretString> {
		Some(self.token.clone())
	}
}

/// Ambient credential lookup from the process environment.
///
/// Reads the variable on every call so externally refreshed tokens are
/// picked up without rebuilding the gateway.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
	var: String,
}

impl EnvCredentials {
	pub fn new(var: impl Into<String>) -> Self {
		Self { var: var.into() }
	}
}

impl Default for EnvCredentials {
	fn default() -> Self {
		Self::new(DEFAULT_AUTH_TOKEN_VAR)
	}
}

impl CredentialProvider for EnvCredentials {
	fn auth_token(&self) -> Option<SecretString> {
		std::env::var(&self.var)
			.ok()
			.filter(|token| !token.is_empty())
			.map(SecretString::new)
	}
}

/// Provider that never yields a credential; callers must pass an explicit
/// per-call token or every operation fails with an authentication error.
#[derive(Debug, Clone, Default)]
pub struct NoCredentials;

impl CredentialProvider for NoCredentials {
	fn auth_token(&self) -> Option<SecretString> {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_static_credentials_always_yield_token() {
		let creds = StaticCredentials::new("token-abc");
		assert_eq!(creds.auth_token().unwrap().expose_secret(), "token-abc");
	}

	#[test]
	fn test_no_credentials_yield_none() {
		assert!(NoCredentials.auth_token().is_none());
	}

	#[test]
	fn test_env_credentials_read_ambient_token() {
		let var = "TPDI_AUTH_TOKEN_TEST_AMBIENT";
		std::env::set_var(var, "env-token");
		let creds = EnvCredentials::new(var);
		assert_eq!(creds.auth_token().unwrap().expose_secret(), "env-token");

		std::env::set_var(var, "");
		assert!(creds.auth_token().is_none());
		std::env::remove_var(var);
	}

	#[test]
	fn test_mock_credential_provider() {
		let mut mock = MockCredentialProvider::new();
		mock.expect_auth_token()
			.return_const(Some(SecretString::from("mocked")));
		assert!(mock.auth_token().is_some());
	}
}
