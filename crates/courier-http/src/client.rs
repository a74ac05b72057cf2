//! The API client: construction, request building, execution.

use std::collections::HashMap;

use reqwest::{Client, Method, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::request::{header_map, json_body};
use crate::response::{decode_json, ApiResponse};

/// A reusable JSON API client: a base URL, a set of static headers, and an
/// owned HTTP transport.
///
/// Immutable after construction and safe to share across tasks —
/// `reqwest::Client` manages its own connection pool, so many requests may be
/// in flight through one `ApiClient` without external locking.
#[derive(Debug, Clone)]
pub struct ApiClient {
    url: String,
    headers: HashMap<String, String>,
    inner: Client,
}

impl ApiClient {
    /// Create a client with a default transport.
    ///
    /// The URL is not validated here; a malformed URL surfaces when a request
    /// is built. No I/O occurs.
    pub fn new(url: impl Into<String>, headers: HashMap<String, String>) -> Self {
        Self::with_client(url, headers, Client::new())
    }

    /// Create a client around a pre-configured transport.
    pub fn with_client(
        url: impl Into<String>,
        headers: HashMap<String, String>,
        client: Client,
    ) -> Self {
        Self {
            url: url.into(),
            headers,
            inner: client,
        }
    }

    /// The configured URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The static headers attached to every built request.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Get the inner reqwest client.
    pub fn inner(&self) -> &Client {
        &self.inner
    }

    /// Build a request for the configured URL.
    ///
    /// `Some(payload)` is serialized to JSON and becomes the body verbatim;
    /// `None` yields an empty body. Every header on the client is copied onto
    /// the request at this moment — later mutation of a caller-held map never
    /// reaches an already-built request. Nothing is injected beyond the
    /// client's headers; a caller that wants `Content-Type: application/json`
    /// supplies it in the header map.
    ///
    /// Pure construction: no network I/O happens here.
    pub fn build_request<T: Serialize>(
        &self,
        method: Method,
        body: Option<&T>,
    ) -> Result<Request, ApiError> {
        let body = json_body(body)?;
        let headers = header_map(&self.headers)?;

        self.inner
            .request(method, &self.url)
            .headers(headers)
            .body(body)
            .build()
            .map_err(|e| ApiError::Build(e.to_string()))
    }

    /// Execute a previously built request.
    ///
    /// Resolves once the network exchange completes or fails; there are no
    /// retries and no cross-call state. Any HTTP status is a success at this
    /// layer — 4xx/5xx interpretation is the caller's job. The body is read
    /// fully into memory and, unless `dest` is `None` (the discard sentinel)
    /// or the body is empty, decoded as JSON into `dest`. On a decode failure
    /// `dest` is left untouched.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
        dest: Option<&mut T>,
    ) -> Result<ApiResponse, ApiError> {
        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!(%method, %url, "sending request");
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(ApiError::Transport)?;

        let status = response.status();
        let headers = response.headers().clone();
        tracing::debug!(%method, %url, status = status.as_u16(), "received response");

        // Consuming the response hands the connection back on every path.
        let bytes = response.bytes().await.map_err(ApiError::Read)?;

        if let Some(dest) = dest {
            if !bytes.is_empty() {
                *dest = decode_json(status, &bytes)?;
            }
        }

        Ok(ApiResponse { status, headers })
    }
}
