//! HTTP client for the catalog API.
//!
//! The API is a single POST endpoint taking a JSON envelope
//! `{ "action": ..., "params": ... }` with an `X-Auth` token header and
//! answering `{ "result": ... }`.

use crate::catalog::auth::AuthToken;
use crate::catalog::error::CatalogError;
use crate::catalog::models::Item;
use crate::catalog::query::{ListingQuery, ID_PAGE_LIMIT};
use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};
use wreq::Client;

/// Trait for catalog lookups - enables mocking for tests.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetches one page of matching item ids. The list may contain
    /// duplicates; order is the catalog's own.
    async fn get_ids(&self, query: &ListingQuery) -> Result<Vec<String>, CatalogError>;

    /// Fetches the detail record for a single id. `None` means the
    /// catalog has no item under that id.
    async fn get_item(&self, id: &str) -> Result<Option<Item>, CatalogError>;
}

/// Request envelope for every catalog action.
#[derive(Serialize)]
struct Envelope<'a, P: Serialize> {
    action: &'a str,
    params: P,
}

/// Response envelope for every catalog action.
#[derive(Deserialize)]
struct ResultEnvelope<T> {
    result: T,
}

#[derive(Serialize)]
struct GetIdsParams<'a> {
    offset: u32,
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    brand: Option<&'a str>,
}

#[derive(Serialize)]
struct GetItemsParams<'a> {
    ids: [&'a str; 1],
}

/// Catalog HTTP client.
pub struct CatalogClient {
    client: Client,
    endpoint: String,
    token: AuthToken,
}

impl CatalogClient {
    /// Creates a new catalog client from the configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url).context("Failed to configure proxy")?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().context("Failed to build HTTP client")?;

        // One client lives for one fetch cycle, so deriving the token here
        // reuses it across the id lookup and every detail lookup.
        let token = AuthToken::for_today(&config.password);

        Ok(Self { client, endpoint: config.endpoint.clone(), token })
    }

    /// Sends one action to the endpoint and unwraps the result envelope.
    async fn post<P, T>(&self, action: &str, params: P) -> Result<T, CatalogError>
    where
        P: Serialize + Send,
        T: DeserializeOwned,
    {
        let body = serde_json::to_vec(&Envelope { action, params })?;

        debug!("POST {} action={}", self.endpoint, action);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("X-Auth", self.token.as_str())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status { status: status.as_u16(), body });
        }

        let text = response.text().await?;
        let envelope: ResultEnvelope<T> = serde_json::from_str(&text)?;
        Ok(envelope.result)
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    async fn get_ids(&self, query: &ListingQuery) -> Result<Vec<String>, CatalogError> {
        info!("Fetching ids (page {}, offset {})", query.page, query.offset());

        let params = GetIdsParams {
            offset: query.offset(),
            limit: ID_PAGE_LIMIT,
            search: query.search.as_deref(),
            min_price: query.min_price,
            max_price: query.max_price,
            brand: query.brand.as_deref(),
        };

        self.post("get_ids", params).await
    }

    async fn get_item(&self, id: &str) -> Result<Option<Item>, CatalogError> {
        debug!("Fetching item detail: {}", id);

        let params = GetItemsParams { ids: [id] };
        let mut slots: Vec<Option<Item>> = self.post("get_items", params).await?;

        // Unknown ids come back as an empty result or a null slot.
        let first = slots.drain(..).next().flatten();
        Ok(first)
    }
}
