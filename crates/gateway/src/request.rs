//! Per-call request assembly and the bounded-wait envelope

use reqwest::header;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tpdi_types::{
	CredentialProvider, RequestConfiguration, SecretString, TpdiError, TpdiResult,
};

/// Deadline applied when the caller supplies none
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolve the credential for one call: explicit override first, then the
/// injected provider. Fails before any network attempt when neither yields
/// a token.
pub(crate) fn resolve_token(
	credentials: &dyn CredentialProvider,
	config: Option<&RequestConfiguration>,
) -> TpdiResult<SecretString> {
	config
		.and_then(|c| c.auth_token.clone())
		.or_else(|| credentials.auth_token())
		.ok_or(TpdiError::Unauthenticated)
}

/// Attach the headers every outbound request carries.
///
/// Transaction and search data is volatile and pagination-sensitive, so
/// responses must never be served from a cache.
pub(crate) fn apply_standard_headers(
	builder: reqwest::RequestBuilder,
	token: &SecretString,
) -> reqwest::RequestBuilder {
	builder
		.bearer_auth(token.expose_secret())
		.header(header::ACCEPT, "application/json")
		.header(header::CACHE_CONTROL, "no-cache")
}

/// Run a call body under the per-call deadline, raced against the optional
/// cancellation signal. The loser is abandoned: an in-flight network call
/// whose deadline elapsed is never awaited further.
pub(crate) async fn bounded<T, F>(
	config: Option<&RequestConfiguration>,
	body: F,
) -> TpdiResult<T>
where
	F: Future<Output = TpdiResult<T>>,
{
	let timeout = config.and_then(|c| c.timeout).unwrap_or(DEFAULT_TIMEOUT);
	let timeout_ms = timeout.as_millis() as u64;
	let cancellation = config.and_then(|c| c.cancellation.clone());

	let deadline = tokio::time::timeout(timeout, body);
	let result = match cancellation {
		Some(token) => {
			tokio::select! {
				_ = token.cancelled() => return Err(TpdiError::Cancelled),
				result = deadline => result,
			}
		},
		None => deadline.await,
	};
	match result {
		Ok(outcome) => outcome,
		Err(_) => Err(TpdiError::Timeout { timeout_ms }),
	}
}

/// Pass a successful response through, turn anything else into an upstream
/// error carrying the HTTP status and the vendor message when present.
pub(crate) async fn expect_success(response: reqwest::Response) -> TpdiResult<reqwest::Response> {
	let status = response.status();
	if status.is_success() {
		return Ok(response);
	}
	let body = response.text().await.unwrap_or_default();
	let message = extract_error_message(&body)
		.or_else(|| status.canonical_reason().map(str::to_string))
		.unwrap_or(body);
	Err(TpdiError::Upstream {
		status_code: status.as_u16(),
		message,
	})
}

/// Pull the vendor-reported message out of an error body, tolerating both
/// `{"error": {"message": ...}}` and a bare `{"message": ...}`.
fn extract_error_message(body: &str) -> Option<String> {
	let value: Value = serde_json::from_str(body).ok()?;
	let message = value
		.get("error")
		.and_then(|error| error.get("message"))
		.or_else(|| value.get("message"))?;
	message.as_str().map(str::to_string)
}

/// Read and deserialize a JSON body, mapping parse failures to a typed
/// invalid-response error.
pub(crate) async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> TpdiResult<T> {
	let body = response.text().await?;
	serde_json::from_str(&body).map_err(|err| TpdiError::InvalidResponse {
		reason: format!("could not interpret response body: {err}"),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::time::Duration;
	use tokio_util::sync::CancellationToken;
	use tpdi_types::NoCredentials;

	#[test]
	fn test_resolve_token_prefers_explicit_override() {
		let config =
			RequestConfiguration::new().with_auth_token(SecretString::from("explicit"));
		let creds = tpdi_types::StaticCredentials::new("ambient");
		let token = resolve_token(&creds, Some(&config)).unwrap();
		assert_eq!(token.expose_secret(), "explicit");
	}

	#[test]
	fn test_resolve_token_falls_back_to_provider() {
		let creds = tpdi_types::StaticCredentials::new("ambient");
		let token = resolve_token(&creds, None).unwrap();
		assert_eq!(token.expose_secret(), "ambient");
	}

	#[test]
	fn test_resolve_token_without_any_credential_is_unauthenticated() {
		let err = resolve_token(&NoCredentials, None).unwrap_err();
		assert!(matches!(err, TpdiError::Unauthenticated));
		assert!(err.is_precondition());
	}

	#[tokio::test]
	async fn test_bounded_returns_body_result_before_deadline() {
		let result: TpdiResult<u32> = bounded(None, async { Ok(7) }).await;
		assert_eq!(result.unwrap(), 7);
	}

	#[tokio::test]
	async fn test_bounded_times_out() {
		let config = RequestConfiguration::new().with_timeout(Duration::from_millis(5));
		let result: TpdiResult<()> = bounded(Some(&config), async {
			tokio::time::sleep(Duration::from_secs(60)).await;
			Ok(())
		})
		.await;
		assert!(matches!(
			result.unwrap_err(),
			TpdiError::Timeout { timeout_ms: 5 }
		));
	}

	#[tokio::test]
	async fn test_bounded_honours_cancellation() {
		let token = CancellationToken::new();
		token.cancel();
		let config = RequestConfiguration::new().with_cancellation(token);
		let result: TpdiResult<()> = bounded(Some(&config), async {
			tokio::time::sleep(Duration::from_secs(60)).await;
			Ok(())
		})
		.await;
		assert!(matches!(result.unwrap_err(), TpdiError::Cancelled));
	}

	#[test]
	fn test_extract_error_message_variants() {
		assert_eq!(
			extract_error_message(r#"{"error": {"message": "quota exceeded"}}"#).as_deref(),
			Some("quota exceeded")
		);
		assert_eq!(
			extract_error_message(r#"{"message": "not found"}"#).as_deref(),
			Some("not found")
		);
		assert_eq!(extract_error_message("plain text"), None);
	}
}
