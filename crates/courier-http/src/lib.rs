//! Generic JSON API client for Courier.
//!
//! Three operations: construct an [`ApiClient`], build a request with
//! [`ApiClient::build_request`], execute it with [`ApiClient::execute`].
//! Bodies are JSON in both directions; HTTP status interpretation belongs to
//! the caller — 4xx/5xx responses are not errors at this layer.

pub mod client;
pub mod error;
pub mod request;
pub mod response;

pub use client::ApiClient;
pub use error::ApiError;
pub use request::{header_map, json_body};
pub use response::{decode_json, ApiResponse};

pub use reqwest::Method;
