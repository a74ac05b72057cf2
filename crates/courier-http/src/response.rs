//! Response metadata and JSON decoding.

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Metadata for a completed exchange: status and response headers.
///
/// The body is not retained here; it is decoded into the caller's destination
/// (or discarded) during [`execute`](crate::ApiClient::execute). Whatever the
/// status was — 2xx, 4xx, 5xx — it is the caller's to interpret.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The response headers.
    pub headers: HeaderMap,
}

/// Decode a JSON body into a destination value.
///
/// On failure the error carries the status and the offending body text so the
/// caller can see what actually came over the wire.
pub fn decode_json<T: DeserializeOwned>(status: StatusCode, bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes).map_err(|e| ApiError::Deserialize {
        status: status.as_u16(),
        body: String::from_utf8_lossy(bytes).into_owned(),
        source: e,
    })
}
