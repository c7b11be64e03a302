//! Order and subscription lifecycle against a mock TPDI service

use mockito::{Matcher, Server, ServerGuard};
use tpdi_client::mocks::mock_search_params;
use tpdi_client::{
	StaticCredentials, ThirdPartyProvider, TpdiClient, TpdiClientBuilder, TpdiCollection,
	TpdiError, TransactionSearchParams, TransactionStatus,
};

fn client(server: &ServerGuard) -> TpdiClient {
	TpdiClientBuilder::new()
		.with_service_url(server.url())
		.with_credentials(StaticCredentials::new("test-token"))
		.build()
		.unwrap()
}

#[tokio::test]
async fn test_create_order_then_lookup_returns_matching_transaction() {
	let mut server = Server::new_async().await;
	server
		.mock("POST", "/orders")
		.match_body(Matcher::PartialJson(serde_json::json!({
			"name": "order-1",
			"collectionId": "collection-42",
			"input": { "provider": "AIRBUS" }
		})))
		.with_header("content-type", "application/json")
		.with_body(
			r#"{
				"id": "tx-1",
				"name": "order-1",
				"collectionId": "collection-42",
				"status": "CREATED",
				"created": "2024-03-04T10:00:00Z"
			}"#,
		)
		.create_async()
		.await;
	server
		.mock("GET", "/orders/tx-1")
		.with_header("content-type", "application/json")
		.with_body(
			r#"{"id": "tx-1", "name": "order-1", "collectionId": "collection-42", "status": "CREATED"}"#,
		)
		.create_async()
		.await;

	let client = client(&server);
	let items = vec!["item-1".to_string(), "item-2".to_string()];
	let created = client
		.create_order(
			ThirdPartyProvider::Airbus,
			"order-1",
			Some("collection-42"),
			&items,
			&mock_search_params(),
			None,
			None,
		)
		.await
		.unwrap();
	assert_eq!(created.id, "tx-1");
	assert_eq!(created.status, TransactionStatus::Created);

	let fetched = client.get_order(&created.id, None).await.unwrap();
	assert_eq!(fetched.id, created.id);
	assert_eq!(fetched.collection_id, created.collection_id);
}

#[tokio::test]
async fn test_confirm_changes_status_but_not_id() {
	let mut server = Server::new_async().await;
	server
		.mock("POST", "/orders/tx-1/confirm")
		.with_header("content-type", "application/json")
		.with_body(r#"{"id": "tx-1", "status": "CONFIRMED"}"#)
		.create_async()
		.await;

	let confirmed = client(&server).confirm_order("tx-1", None).await.unwrap();
	assert_eq!(confirmed.id, "tx-1");
	assert_eq!(confirmed.status, TransactionStatus::Confirmed);
}

#[tokio::test]
async fn test_deleted_transaction_lookup_surfaces_upstream_not_found() {
	let mut server = Server::new_async().await;
	let delete_mock = server
		.mock("DELETE", "/orders/tx-2")
		.with_status(204)
		.create_async()
		.await;
	server
		.mock("GET", "/orders/tx-2")
		.with_status(404)
		.with_header("content-type", "application/json")
		.with_body(r#"{"error": {"message": "Order tx-2 not found"}}"#)
		.create_async()
		.await;

	let client = client(&server);
	client.delete_order("tx-2", None).await.unwrap();
	delete_mock.assert_async().await;

	let err = client.get_order("tx-2", None).await.unwrap_err();
	assert_eq!(err.status_code(), Some(404));
	assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn test_listing_merges_filters_and_generic_pagination() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("GET", "/orders")
		.match_query(Matcher::AllOf(vec![
			Matcher::UrlEncoded("status".into(), "CREATED".into()),
			Matcher::UrlEncoded("count".into(), "5".into()),
			Matcher::UrlEncoded("viewtoken".into(), "tok-9".into()),
		]))
		.with_header("content-type", "application/json")
		.with_body(
			r#"{
				"data": [{"id": "tx-1", "status": "CREATED"}],
				"viewtoken": "tok-10",
				"hasMore": true
			}"#,
		)
		.create_async()
		.await;

	let params = TransactionSearchParams {
		status: Some(TransactionStatus::Created),
		..Default::default()
	};
	let page = client(&server)
		.get_orders(Some(&params), None, Some(5), Some("tok-9"))
		.await
		.unwrap();
	assert_eq!(page.data.len(), 1);
	assert_eq!(page.view_token.as_deref(), Some("tok-10"));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_subscription_lifecycle_routes_to_subscriptions_resource() {
	let mut server = Server::new_async().await;
	server
		.mock("POST", "/subscriptions")
		.with_header("content-type", "application/json")
		.with_body(r#"{"id": "sub-1", "status": "CREATED"}"#)
		.create_async()
		.await;
	let get_mock = server
		.mock("GET", "/subscriptions/sub-1")
		.with_header("content-type", "application/json")
		.with_body(r#"{"id": "sub-1", "status": "CREATED"}"#)
		.create_async()
		.await;
	server
		.mock("POST", "/subscriptions/sub-1/confirm")
		.with_header("content-type", "application/json")
		.with_body(r#"{"id": "sub-1", "status": "CONFIRMED"}"#)
		.create_async()
		.await;
	server
		.mock("DELETE", "/subscriptions/sub-1")
		.with_status(204)
		.create_async()
		.await;

	let client = client(&server);
	// Planet is the only built-in vendor offering subscriptions
	let created = client
		.create_subscription(
			ThirdPartyProvider::Planet,
			"sub-1",
			None,
			&[],
			&mock_search_params(),
			None,
			None,
		)
		.await
		.unwrap();
	assert_eq!(created.id, "sub-1");

	let fetched = client.get_subscription("sub-1", None).await.unwrap();
	assert_eq!(fetched.id, "sub-1");
	get_mock.assert_async().await;

	let confirmed = client.confirm_subscription("sub-1", None).await.unwrap();
	assert_eq!(confirmed.status, TransactionStatus::Confirmed);

	client.delete_subscription("sub-1", None).await.unwrap();
}

#[tokio::test]
async fn test_subscription_against_unsupporting_vendor_issues_no_network_call() {
	let mut server = Server::new_async().await;
	let mock = server
		.mock("POST", Matcher::Regex(".*".to_string()))
		.expect(0)
		.create_async()
		.await;

	let err = client(&server)
		.create_subscription(
			ThirdPartyProvider::Maxar,
			"sub-1",
			None,
			&[],
			&mock_search_params(),
			None,
			None,
		)
		.await
		.unwrap_err();
	assert!(err.is_precondition());
	assert!(err.to_string().contains("MAXAR"));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_thumbnail_is_returned_as_raw_bytes() {
	let mut server = Server::new_async().await;
	let png_header: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
	server
		.mock(
			"GET",
			"/collections/MAXAR_WORLDVIEW/products/prod-7/thumbnail",
		)
		.with_header("content-type", "image/png")
		.with_body(png_header)
		.create_async()
		.await;

	let bytes = client(&server)
		.get_thumbnail(TpdiCollection::MaxarWorldview, "prod-7", None)
		.await
		.unwrap();
	assert_eq!(&bytes[..], png_header);
}

#[tokio::test]
async fn test_empty_product_id_is_a_precondition_failure() {
	let server = Server::new_async().await;
	let err = client(&server)
		.get_thumbnail(TpdiCollection::AirbusSpot, "", None)
		.await
		.unwrap_err();
	assert!(matches!(
		err,
		TpdiError::MissingArgument { name: "productId" }
	));
}
