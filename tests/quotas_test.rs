//! Quota endpoint behavior against a mock TPDI service

use mockito::{Matcher, Server, ServerGuard};
use tpdi_client::{StaticCredentials, TpdiClient, TpdiClientBuilder, TpdiCollection, TpdiError};

fn client(server: &ServerGuard) -> TpdiClient {
	TpdiClientBuilder::new()
		.with_service_url(server.url())
		.with_credentials(StaticCredentials::new("test-token"))
		.build()
		.unwrap()
}

#[tokio::test]
async fn test_quota_is_none_when_no_records_match() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/quotas")
		.match_query(Matcher::UrlEncoded(
			"collectionId".into(),
			"AIRBUS_SPOT".into(),
		))
		.match_header("authorization", "Bearer test-token")
		.match_header("cache-control", "no-cache")
		.with_header("content-type", "application/json")
		.with_body(r#"{"data": []}"#)
		.create_async()
		.await;

	let quota = client(&server)
		.get_quota(TpdiCollection::AirbusSpot, None)
		.await
		.unwrap();
	assert!(quota.is_none());
	mock.assert_async().await;
}

#[tokio::test]
async fn test_quota_returns_first_matching_record() {
	let mut server = Server::new_async().await;
	server
		.mock("GET", "/quotas")
		.match_query(Matcher::UrlEncoded(
			"collectionId".into(),
			"PLANET_SCOPE".into(),
		))
		.with_header("content-type", "application/json")
		.with_body(
			r#"{"data": [
				{"id": "q-1", "collectionId": "PLANET_SCOPE", "quotaSqkm": 500.0, "quotaUsed": 120.5},
				{"id": "q-2", "collectionId": "PLANET_SCOPE"}
			]}"#,
		)
		.create_async()
		.await;

	let quota = client(&server)
		.get_quota(TpdiCollection::PlanetScope, None)
		.await
		.unwrap()
		.unwrap();
	assert_eq!(quota.id, "q-1");
	assert_eq!(quota.quota_sqkm, Some(500.0));
}

#[tokio::test]
async fn test_quotas_lists_all_records_unfiltered() {
	let mut server = Server::new_async().await;
	server
		.mock("GET", "/quotas")
		.with_header("content-type", "application/json")
		.with_body(
			r#"{"data": [
				{"id": "q-1", "collectionId": "AIRBUS_PLEIADES"},
				{"id": "q-2", "collectionId": "MAXAR_WORLDVIEW"}
			]}"#,
		)
		.create_async()
		.await;

	let quotas = client(&server).get_quotas(None).await.unwrap();
	assert_eq!(quotas.len(), 2);
}

#[tokio::test]
async fn test_upstream_failure_carries_status_and_vendor_message() {
	let mut server = Server::new_async().await;
	server
		.mock("GET", "/quotas")
		.with_status(503)
		.with_header("content-type", "application/json")
		.with_body(r#"{"error": {"message": "quota backend unavailable"}}"#)
		.create_async()
		.await;

	let err = client(&server).get_quotas(None).await.unwrap_err();
	match err {
		TpdiError::Upstream {
			status_code,
			message,
		} => {
			assert_eq!(status_code, 503);
			assert_eq!(message, "quota backend unavailable");
		},
		other => panic!("expected upstream error, got {other:?}"),
	}
}
