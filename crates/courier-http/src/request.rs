//! Request construction helpers: header conversion and JSON body encoding.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

use crate::error::ApiError;

/// Convert a flat string map into a `HeaderMap`.
///
/// The result is a fresh copy on every call, so the client's map and a built
/// request never alias. Inserting twice under one name overwrites — flat-map
/// semantics, no duplicate keys.
pub fn header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, ApiError> {
    let mut map = HeaderMap::with_capacity(headers.len());

    for (name, value) in headers {
        let name = HeaderName::try_from(name.as_str())
            .map_err(|e| ApiError::Build(format!("invalid header name {name:?}: {e}")))?;
        let value = HeaderValue::try_from(value.as_str())
            .map_err(|e| ApiError::Build(format!("invalid value for header {name}: {e}")))?;
        map.insert(name, value);
    }

    Ok(map)
}

/// Encode an optional payload as a JSON body.
///
/// `None` means "no payload" and yields an empty body; `Some` serializes the
/// value and the bytes pass through unchanged. No `Content-Type` is implied
/// here — headers are the client's business.
pub fn json_body<T: Serialize>(body: Option<&T>) -> Result<Vec<u8>, ApiError> {
    match body {
        Some(value) => serde_json::to_vec(value).map_err(ApiError::Serialize),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_header_map_copies_all_pairs() {
        let headers = HashMap::from([
            ("content-type".to_string(), "application/json".to_string()),
            ("cache-control".to_string(), "no-cache".to_string()),
        ]);

        let map = header_map(&headers).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get("content-type").unwrap().to_str().unwrap(),
            "application/json"
        );
        assert_eq!(
            map.get("cache-control").unwrap().to_str().unwrap(),
            "no-cache"
        );
    }

    #[test]
    fn test_header_map_empty() {
        let map = header_map(&HashMap::new()).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_header_map_rejects_invalid_name() {
        let headers = HashMap::from([("bad header".to_string(), "value".to_string())]);
        let err = header_map(&headers).unwrap_err();
        assert!(matches!(err, ApiError::Build(_)));
    }

    #[test]
    fn test_header_map_rejects_invalid_value() {
        let headers = HashMap::from([("x-note".to_string(), "line1\nline2".to_string())]);
        let err = header_map(&headers).unwrap_err();
        assert!(matches!(err, ApiError::Build(_)));
    }

    #[test]
    fn test_json_body_absent_is_empty() {
        let body = json_body::<Value>(None).unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_json_body_serializes_payload() {
        let payload = json!({"message": "hello", "value": 42});
        let body = json_body(Some(&payload)).unwrap();

        let decoded: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_json_body_rejects_non_string_keys() {
        let payload: HashMap<Vec<u8>, i32> = HashMap::from([(vec![1], 1)]);
        let err = json_body(Some(&payload)).unwrap_err();
        assert!(matches!(err, ApiError::Serialize(_)));
    }
}
