//! Secure string handling for auth tokens and vendor API keys
//!
//! `SecretString` zeroizes its contents when dropped and redacts itself in
//! Debug/Display output so credentials never end up in logs.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A string holding sensitive data (bearer tokens, Planet API keys).
///
/// The underlying bytes are cleared from memory when the value is dropped,
/// and all formatting paths print `[REDACTED]` instead of the value.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
	inner: String,
}

impl SecretString {
	/// Create a new `SecretString` from a `String`
	pub fn new(secret: String) -> Self {
		Self { inner: secret }
	}

	/// Expose the secret value.
	///
	/// Use sparingly; the only intended consumers are header construction
	/// and vendor payload builders.
	pub fn expose_secret(&self) -> &str {
		&self.inner
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SecretString")
			.field("inner", &"[REDACTED]")
			.finish()
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "[REDACTED]")
	}
}

impl From<String> for SecretString {
	fn from(secret: String) -> Self {
		Self::new(secret)
	}
}

impl From<&str> for SecretString {
	fn from(secret: &str) -> Self {
		Self::new(secret.to_string())
	}
}

// Redact on serialization; secrets are only ever read in, never written out.
impl Serialize for SecretString {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str("[REDACTED]")
	}
}

impl<'de> Deserialize<'de> for SecretString {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let secret = String::deserialize(deserializer)?;
		Ok(SecretString::new(secret))
	}
}

impl PartialEq for SecretString {
	fn eq(&self, other: &Self) -> bool {
		constant_time_eq(self.inner.as_bytes(), other.inner.as_bytes())
	}
}

impl Eq for SecretString {}

/// Constant-time comparison to prevent timing attacks
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
	if a.len() != b.len() {
		return false;
	}

	let mut result = 0u8;
	for (x, y) in a.iter().zip(b.iter()) {
		result |= x ^ y;
	}
	result == 0
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_secret_string_creation() {
		let secret = SecretString::new("test-secret".to_string());
		assert_eq!(secret.expose_secret(), "test-secret");
	}

	#[test]
	fn test_secret_string_redacted_in_debug_and_display() {
		let secret = SecretString::from("token-123");
		let debug_str = format!("{:?}", secret);
		assert!(debug_str.contains("[REDACTED]"));
		assert!(!debug_str.contains("token-123"));
		assert_eq!(format!("{}", secret), "[REDACTED]");
	}

	#[test]
	fn test_secret_string_equality() {
		let secret1 = SecretString::from("same-secret");
		let secret2 = SecretString::from("same-secret");
		let secret3 = SecretString::from("different-secret");

		assert_eq!(secret1, secret2);
		assert_ne!(secret1, secret3);
	}

	#[test]
	fn test_secret_string_serialization_redacts() {
		let secret = SecretString::from("secret-key");
		let serialized = serde_json::to_string(&secret).unwrap();
		assert_eq!(serialized, "\"[REDACTED]\"");
	}

	#[test]
	fn test_secret_string_deserialization() {
		let secret: SecretString = serde_json::from_str("\"secret-value\"").unwrap();
		assert_eq!(secret.expose_secret(), "secret-value");
	}
}
