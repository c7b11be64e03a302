//! Transaction gateway over the TPDI brokerage API
//!
//! One `TpdiClient` instance is cheap to share: the adapter registry is
//! read-only after construction and the credential provider is consulted
//! once per call. No transaction or search state is cached locally.

use crate::request::{apply_standard_headers, bounded, expect_success, parse_json, resolve_token};
use bytes::Bytes;
use serde::Deserialize;
use std::sync::Arc;
use tpdi_adapters::ProviderRegistry;
use tpdi_types::{
	CompatibleCollection, CredentialProvider, DataProviderAdapter, Quota, RequestConfiguration,
	SearchParams, SearchResult, ThirdPartyProvider, TpdiCollection, TpdiError, TpdiResult,
	Transaction, TransactionParams, TransactionSearchParams, TransactionSearchResult,
};
use tracing::debug;
use url::Url;

/// Public TPDI service endpoint
pub const DEFAULT_TPDI_SERVICE_URL: &str = "https://services.sentinel-hub.com/api/v1/dataimport";

/// Page size used by `search` when the caller does not pick one
pub const DEFAULT_SEARCH_PAGE_SIZE: u32 = 10;

/// Wire wrapper for list-shaped responses (`{"data": [...]}`)
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
struct DataWrapper<T> {
	#[serde(default)]
	data: Vec<T>,
}

/// Compatible-collections responses may omit `data` entirely; absence is an
/// empty result, not an error.
#[derive(Debug, Deserialize)]
struct OptionalDataWrapper {
	#[serde(default)]
	data: Option<Vec<CompatibleCollection>>,
}

/// Client for the third-party data import transaction API.
///
/// Every operation is a bounded asynchronous call: request metadata is
/// assembled per call, one HTTP round-trip runs under the configured
/// deadline, and the raw response is normalized into a typed result.
#[derive(Debug, Clone)]
pub struct TpdiClient {
	http: reqwest::Client,
	service_url: String,
	registry: Arc<ProviderRegistry>,
	credentials: Arc<dyn CredentialProvider>,
}

impl TpdiClient {
	/// Create a gateway rooted at `service_url`.
	///
	/// Fails when the URL does not parse; a trailing slash is tolerated.
	pub fn new(
		service_url: impl Into<String>,
		registry: Arc<ProviderRegistry>,
		credentials: Arc<dyn CredentialProvider>,
	) -> TpdiResult<Self> {
		let service_url = service_url.into();
		Url::parse(&service_url).map_err(|_| TpdiError::InvalidUrl {
			url: service_url.clone(),
		})?;
		Ok(Self {
			http: reqwest::Client::new(),
			service_url: service_url.trim_end_matches('/').to_string(),
			registry,
			credentials,
		})
	}

	/// Base service URL this gateway talks to
	pub fn service_url(&self) -> &str {
		&self.service_url
	}

	fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.service_url, path)
	}

	fn resolve(&self, provider: ThirdPartyProvider) -> TpdiResult<&dyn DataProviderAdapter> {
		self.registry.resolve(provider)
	}

	// --- quotas ---

	/// Quota for one collection, `None` when the service reports no
	/// matching quota records.
	pub async fn get_quota(
		&self,
		collection: TpdiCollection,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<Option<Quota>> {
		let quotas = self.quotas_inner(Some(collection), config).await?;
		Ok(quotas.into_iter().next())
	}

	/// Unfiltered quota listing
	pub async fn get_quotas(
		&self,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<Vec<Quota>> {
		self.quotas_inner(None, config).await
	}

	async fn quotas_inner(
		&self,
		collection: Option<TpdiCollection>,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<Vec<Quota>> {
		let token = resolve_token(self.credentials.as_ref(), config)?;
		bounded(config, async {
			let mut request = self.http.get(self.endpoint("quotas"));
			if let Some(collection) = collection {
				request = request.query(&[("collectionId", collection.as_str())]);
			}
			let response = apply_standard_headers(request, &token).send().await?;
			let wrapper: DataWrapper<Quota> = parse_json(expect_success(response).await?).await?;
			Ok(wrapper.data)
		})
		.await
	}

	// --- catalog search ---

	/// Search a vendor's catalog, delegating payload shape and pagination
	/// to the resolved adapter.
	pub async fn search(
		&self,
		provider: ThirdPartyProvider,
		params: &SearchParams,
		config: Option<&RequestConfiguration>,
		count: Option<u32>,
		view_token: Option<&str>,
	) -> TpdiResult<SearchResult> {
		let adapter = self.resolve(provider)?;
		let payload = adapter.search_payload(params)?;
		let mut query = Vec::new();
		adapter.apply_search_pagination(
			&mut query,
			count.unwrap_or(DEFAULT_SEARCH_PAGE_SIZE),
			view_token,
		);
		let token = resolve_token(self.credentials.as_ref(), config)?;
		bounded(config, async {
			debug!(provider = %provider, "searching vendor catalog");
			let request = self
				.http
				.post(self.endpoint("search"))
				.query(&query)
				.json(&payload);
			let response = apply_standard_headers(request, &token).send().await?;
			parse_json(expect_success(response).await?).await
		})
		.await
	}

	/// Preview image for a product, returned as raw bytes
	pub async fn get_thumbnail(
		&self,
		collection: TpdiCollection,
		product_id: &str,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<Bytes> {
		if product_id.is_empty() {
			return Err(TpdiError::MissingArgument { name: "productId" });
		}
		let token = resolve_token(self.credentials.as_ref(), config)?;
		let path = format!(
			"collections/{}/products/{}/thumbnail",
			collection, product_id
		);
		bounded(config, async {
			let request = self.http.get(self.endpoint(&path));
			let response = apply_standard_headers(request, &token).send().await?;
			let response = expect_success(response).await?;
			Ok(response.bytes().await?)
		})
		.await
	}

	/// Collections that would accept the items matched by `params`,
	/// empty when the vendor reports none.
	pub async fn get_compatible_collections(
		&self,
		provider: ThirdPartyProvider,
		params: &SearchParams,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<Vec<CompatibleCollection>> {
		let adapter = self.resolve(provider)?;
		let payload = serde_json::json!({ "input": adapter.search_payload(params)? });
		let token = resolve_token(self.credentials.as_ref(), config)?;
		bounded(config, async {
			let request = self
				.http
				.post(self.endpoint("orders/searchcompatiblecollections/"))
				.json(&payload);
			let response = apply_standard_headers(request, &token).send().await?;
			let wrapper: OptionalDataWrapper =
				parse_json(expect_success(response).await?).await?;
			Ok(wrapper.data.unwrap_or_default())
		})
		.await
	}

	// --- transaction creation ---

	/// Place a one-off order with the given vendor
	#[allow(clippy::too_many_arguments)]
	pub async fn create_order(
		&self,
		provider: ThirdPartyProvider,
		name: &str,
		collection_id: Option<&str>,
		items: &[String],
		params: &SearchParams,
		order_params: Option<&TransactionParams>,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<Transaction> {
		let adapter = self.resolve(provider)?;
		self.create_purchase(
			"orders",
			adapter,
			name,
			collection_id,
			items,
			params,
			order_params,
			config,
		)
		.await
	}

	/// Start a recurring subscription with the given vendor.
	///
	/// Fails with a capability error before any network call when the
	/// vendor does not offer subscriptions.
	#[allow(clippy::too_many_arguments)]
	pub async fn create_subscription(
		&self,
		provider: ThirdPartyProvider,
		name: &str,
		collection_id: Option<&str>,
		items: &[String],
		params: &SearchParams,
		order_params: Option<&TransactionParams>,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<Transaction> {
		let adapter = self.resolve(provider)?;
		adapter.ensure_subscriptions_supported()?;
		self.create_purchase(
			"subscriptions",
			adapter,
			name,
			collection_id,
			items,
			params,
			order_params,
			config,
		)
		.await
	}

	#[allow(clippy::too_many_arguments)]
	async fn create_purchase(
		&self,
		resource: &str,
		adapter: &dyn DataProviderAdapter,
		name: &str,
		collection_id: Option<&str>,
		items: &[String],
		params: &SearchParams,
		order_params: Option<&TransactionParams>,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<Transaction> {
		if name.is_empty() {
			return Err(TpdiError::MissingArgument { name: "name" });
		}
		let payload = adapter.order_payload(name, collection_id, items, params, order_params)?;
		let token = resolve_token(self.credentials.as_ref(), config)?;
		bounded(config, async {
			debug!(provider = %adapter.provider(), resource, "creating transaction");
			let request = self.http.post(self.endpoint(resource)).json(&payload);
			let response = apply_standard_headers(request, &token).send().await?;
			parse_json(expect_success(response).await?).await
		})
		.await
	}

	// --- transaction listing and lookup ---

	/// Paginated order listing
	pub async fn get_orders(
		&self,
		params: Option<&TransactionSearchParams>,
		config: Option<&RequestConfiguration>,
		count: Option<u32>,
		view_token: Option<&str>,
	) -> TpdiResult<TransactionSearchResult> {
		self.purchases("orders", params, config, count, view_token)
			.await
	}

	/// Paginated subscription listing
	pub async fn get_subscriptions(
		&self,
		params: Option<&TransactionSearchParams>,
		config: Option<&RequestConfiguration>,
		count: Option<u32>,
		view_token: Option<&str>,
	) -> TpdiResult<TransactionSearchResult> {
		self.purchases("subscriptions", params, config, count, view_token)
			.await
	}

	async fn purchases(
		&self,
		resource: &str,
		params: Option<&TransactionSearchParams>,
		config: Option<&RequestConfiguration>,
		count: Option<u32>,
		view_token: Option<&str>,
	) -> TpdiResult<TransactionSearchResult> {
		let token = resolve_token(self.credentials.as_ref(), config)?;
		// listing pagination is generic, not vendor-specific
		let mut query = params.map(TransactionSearchParams::to_query).unwrap_or_default();
		if let Some(count) = count {
			query.push(("count".to_string(), count.to_string()));
		}
		if let Some(view_token) = view_token {
			query.push(("viewtoken".to_string(), view_token.to_string()));
		}
		bounded(config, async {
			let request = self.http.get(self.endpoint(resource)).query(&query);
			let response = apply_standard_headers(request, &token).send().await?;
			parse_json(expect_success(response).await?).await
		})
		.await
	}

	/// Point lookup of an order by id
	pub async fn get_order(
		&self,
		order_id: &str,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<Transaction> {
		self.purchase("orders", order_id, config).await
	}

	/// Point lookup of a subscription by id
	pub async fn get_subscription(
		&self,
		subscription_id: &str,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<Transaction> {
		self.purchase("subscriptions", subscription_id, config).await
	}

	async fn purchase(
		&self,
		resource: &str,
		id: &str,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<Transaction> {
		if id.is_empty() {
			return Err(TpdiError::MissingArgument { name: "id" });
		}
		let token = resolve_token(self.credentials.as_ref(), config)?;
		let path = format!("{resource}/{id}");
		bounded(config, async {
			let request = self.http.get(self.endpoint(&path));
			let response = apply_standard_headers(request, &token).send().await?;
			parse_json(expect_success(response).await?).await
		})
		.await
	}

	// --- transaction transitions ---

	/// Delete an order. Repeated deletion of an already-deleted id surfaces
	/// the vendor's error unchanged.
	pub async fn delete_order(
		&self,
		order_id: &str,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<()> {
		self.delete_purchase("orders", order_id, config).await
	}

	/// Delete a subscription
	pub async fn delete_subscription(
		&self,
		subscription_id: &str,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<()> {
		self.delete_purchase("subscriptions", subscription_id, config)
			.await
	}

	async fn delete_purchase(
		&self,
		resource: &str,
		id: &str,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<()> {
		if id.is_empty() {
			return Err(TpdiError::MissingArgument { name: "id" });
		}
		let token = resolve_token(self.credentials.as_ref(), config)?;
		let path = format!("{resource}/{id}");
		bounded(config, async {
			let request = self.http.delete(self.endpoint(&path));
			let response = apply_standard_headers(request, &token).send().await?;
			expect_success(response).await?;
			Ok(())
		})
		.await
	}

	/// Confirm an order, moving it toward execution. The returned
	/// transaction reflects whatever state the server assigned.
	pub async fn confirm_order(
		&self,
		order_id: &str,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<Transaction> {
		self.confirm_purchase("orders", order_id, config).await
	}

	/// Confirm a subscription
	pub async fn confirm_subscription(
		&self,
		subscription_id: &str,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<Transaction> {
		self.confirm_purchase("subscriptions", subscription_id, config)
			.await
	}

	async fn confirm_purchase(
		&self,
		resource: &str,
		id: &str,
		config: Option<&RequestConfiguration>,
	) -> TpdiResult<Transaction> {
		if id.is_empty() {
			return Err(TpdiError::MissingArgument { name: "id" });
		}
		let token = resolve_token(self.credentials.as_ref(), config)?;
		let path = format!("{resource}/{id}/confirm");
		bounded(config, async {
			debug!(resource, id, "confirming transaction");
			let request = self
				.http
				.post(self.endpoint(&path))
				.json(&serde_json::json!({}));
			let response = apply_standard_headers(request, &token).send().await?;
			parse_json(expect_success(response).await?).await
		})
		.await
	}
}
