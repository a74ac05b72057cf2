//! Error taxonomy for building and executing requests.

use thiserror::Error;

/// Errors surfaced by [`ApiClient`](crate::ApiClient).
///
/// Every variant is returned directly to the immediate caller: no retries, no
/// fallbacks, no logging side effects. HTTP 4xx/5xx statuses are not errors
/// at this layer; they come back as ordinary [`ApiResponse`](crate::ApiResponse)
/// values.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request payload could not be represented as JSON.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The transport rejected the method/URL/header combination.
    #[error("failed to build request: {0}")]
    Build(String),

    /// The network exchange itself failed.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body could not be fully read.
    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),

    /// The response body was not JSON matching the destination's shape.
    ///
    /// "Not JSON at all" and "JSON of the wrong shape" are deliberately one
    /// kind; callers that need finer diagnostics can inspect `source`.
    #[error("failed to decode response body (status {status}): {source}")]
    Deserialize {
        /// Status of the response whose body failed to decode.
        status: u16,
        /// The offending body text.
        body: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
