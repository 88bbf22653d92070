//! HTTP client for the store's REST table endpoints.
//!
//! # Responsibility
//! - Build one `reqwest::Client` with authorization headers at startup.
//! - Issue table requests and decode JSON row arrays.
//! - Emit `store_request` logging events with duration and status.
//!
//! # Invariants
//! - Table endpoints live under `<base>/rest/v1/<table>`.
//! - Writes ask for `return=representation` so callers get confirmed rows.

use super::{StoreError, StoreResult};
use crate::config::StoreConfig;
use log::{error, info};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Instant;
use url::Url;

const REST_PREFIX: [&str; 2] = ["rest", "v1"];
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Row filter expressed as `column=eq.value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    column: &'static str,
    value: String,
}

impl Filter {
    /// Matches rows whose `column` equals `value`.
    pub fn eq(column: &'static str, value: impl ToString) -> Self {
        Self {
            column,
            value: value.to_string(),
        }
    }

    fn query_pair(&self) -> (&'static str, String) {
        (self.column, format!("eq.{}", self.value))
    }
}

/// Authorized handle to the remote store.
#[derive(Debug, Clone)]
pub struct StoreClient {
    base_url: Url,
    http: reqwest::Client,
}

impl StoreClient {
    /// Builds the client from validated configuration.
    ///
    /// # Errors
    /// - `InvalidKey` when the key contains non-header characters.
    /// - `InvalidEndpoint` when the URL cannot take path segments.
    /// - `Transport` when the HTTP backend cannot be initialized.
    pub fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let base_url = config.url().clone();
        if base_url.cannot_be_a_base() {
            return Err(StoreError::InvalidEndpoint(base_url.to_string()));
        }

        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(config.anon_key()).map_err(|_| StoreError::InvalidKey)?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.anon_key()))
            .map_err(|_| StoreError::InvalidKey)?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        info!(
            "event=store_connect module=store status=ok host={}",
            base_url.host_str().unwrap_or("unknown")
        );
        Ok(Self { base_url, http })
    }

    /// Resolves the REST endpoint for `table`.
    pub fn table_url(&self, table: &str) -> StoreResult<Url> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| StoreError::InvalidEndpoint(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(REST_PREFIX)
            .push(table);
        Ok(url)
    }

    /// Selects all columns, ordered by `order` (e.g. `updated_at.desc`).
    pub async fn select<T: DeserializeOwned>(&self, table: &str, order: &str) -> StoreResult<Vec<T>> {
        let request = self
            .request(Method::GET, table)?
            .query(&[("select", "*"), ("order", order)]);
        let response = self.send("select", table, request).await?;
        read_rows(response).await
    }

    /// Inserts one row and returns the stored representation.
    pub async fn insert<B, T>(&self, table: &str, body: &B) -> StoreResult<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::POST, table)?
            .header("Prefer", "return=representation")
            .json(body);
        let response = self.send("insert", table, request).await?;
        read_rows(response).await
    }

    /// Updates rows matching `filter` and returns their new representation.
    pub async fn update<B, T>(&self, table: &str, filter: &Filter, body: &B) -> StoreResult<Vec<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .request(Method::PATCH, table)?
            .query(&[filter.query_pair()])
            .header("Prefer", "return=representation")
            .json(body);
        let response = self.send("update", table, request).await?;
        read_rows(response).await
    }

    /// Deletes rows matching `filter`.
    pub async fn delete(&self, table: &str, filter: &Filter) -> StoreResult<()> {
        let request = self
            .request(Method::DELETE, table)?
            .query(&[filter.query_pair()]);
        let response = self.send("delete", table, request).await?;
        ensure_success(response).await.map(|_| ())
    }

    fn request(&self, method: Method, table: &str) -> StoreResult<RequestBuilder> {
        Ok(self.http.request(method, self.table_url(table)?))
    }

    async fn send(&self, op: &str, table: &str, request: RequestBuilder) -> StoreResult<Response> {
        let started_at = Instant::now();
        match request.send().await {
            Ok(response) => {
                info!(
                    "event=store_request module=store status=ok op={} table={} http_status={} duration_ms={}",
                    op,
                    table,
                    response.status().as_u16(),
                    started_at.elapsed().as_millis()
                );
                Ok(response)
            }
            Err(err) => {
                error!(
                    "event=store_request module=store status=error op={} table={} duration_ms={} error_code=transport_failed error={}",
                    op,
                    table,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

async fn ensure_success(response: Response) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Status {
        status: status.as_u16(),
        body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    })
}

async fn read_rows<T: DeserializeOwned>(response: Response) -> StoreResult<Vec<T>> {
    let response = ensure_success(response).await?;
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
