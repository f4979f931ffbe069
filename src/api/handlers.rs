//! API Request Handlers
//!
//! HTTP request handlers for the checksum, hash and health endpoints.
//! Handlers are stateless; each request is computed independently.

use crate::api::models::*;
use crate::config::HashAlgorithm;
use crate::error::Result;
use crate::hash::{compute_digest, crc32_hex, SHA256};
use axum::extract::Query;
use tracing::{debug, error};

/// Text used when the caller supplies none
pub const DEFAULT_TEXT: &str = "Hello World Check Sum!";

/// Body returned by `/hash` when the digest cannot be computed
pub const HASH_ERROR_BODY: &str = "Error generating checksum";

/// Pick the caller's text, falling back to `DEFAULT_TEXT` when absent or empty
pub fn resolve_text(text: Option<&str>) -> &str {
    match text {
        Some(text) if !text.is_empty() => text,
        _ => DEFAULT_TEXT,
    }
}

/// CRC32 of the resolved text
pub fn compute_checksum(text: Option<&str>) -> DigestResponse {
    let data = resolve_text(text);
    DigestResponse::new(data, HashAlgorithm::Crc32, crc32_hex(data.as_bytes()))
}

/// SHA-256 of the resolved text
pub fn compute_hash(text: Option<&str>) -> Result<DigestResponse> {
    compute_hash_with(SHA256, text)
}

pub(crate) fn compute_hash_with(algorithm: &str, text: Option<&str>) -> Result<DigestResponse> {
    let data = resolve_text(text);
    let result = compute_digest(algorithm, Some(data))?;
    Ok(DigestResponse::new(data, result.algorithm, result.hash))
}

/// Render a hash result as a response body
///
/// Failures are logged and replaced by `HASH_ERROR_BODY`.
pub fn hash_body(result: Result<DigestResponse>) -> String {
    match result {
        Ok(response) => response.to_string(),
        Err(e) => {
            error!(error = %e, "Failed to compute digest");
            HASH_ERROR_BODY.to_string()
        }
    }
}

/// Handler for GET /checksum
pub async fn handle_checksum(Query(params): Query<Vec<(String, String)>>) -> String {
    let query = TextQuery::from_pairs(params);
    let response = compute_checksum(query.text.as_deref());
    debug!(checksum = %response.value, "Computed checksum");
    response.to_string()
}

/// Handler for GET /hash
pub async fn handle_hash(Query(params): Query<Vec<(String, String)>>) -> String {
    let query = TextQuery::from_pairs(params);
    let result = compute_hash(query.text.as_deref());
    if let Ok(ref response) = result {
        debug!(hash = %response.value, "Computed hash");
    }
    hash_body(result)
}

/// Handler for GET /health
pub async fn handle_health() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_text() {
        assert_eq!(resolve_text(Some("abc")), "abc");
        assert_eq!(resolve_text(Some("")), DEFAULT_TEXT);
        assert_eq!(resolve_text(None), DEFAULT_TEXT);
        assert_eq!(resolve_text(Some(" ")), " ");
    }

    #[test]
    fn test_checksum_known_value() {
        assert_eq!(
            compute_checksum(Some("abc")).to_string(),
            "Data: abc | Checksum: 352441c2"
        );
    }

    #[test]
    fn test_checksum_default_text() {
        let expected = format!(
            "Data: {} | Checksum: {:x}",
            DEFAULT_TEXT,
            crc32fast::hash(DEFAULT_TEXT.as_bytes())
        );
        assert_eq!(compute_checksum(None).to_string(), expected);
        assert_eq!(compute_checksum(Some("")).to_string(), expected);
    }

    #[test]
    fn test_hash_known_value() {
        assert_eq!(
            hash_body(compute_hash(Some("abc"))),
            "Data: abc | Hash: ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_hash_empty_matches_absent() {
        assert_eq!(
            hash_body(compute_hash(Some(""))),
            hash_body(compute_hash(None))
        );
        assert!(hash_body(compute_hash(None)).starts_with("Data: Hello World Check Sum! | Hash: "));
    }

    #[test]
    fn test_hash_unavailable_algorithm() {
        let result = compute_hash_with("SHA-3000", Some("abc"));
        assert!(result.is_err());
        assert_eq!(hash_body(result), HASH_ERROR_BODY);
    }

    #[test]
    fn test_hash_label_follows_algorithm() {
        let response = compute_hash_with("crc32", Some("abc")).unwrap();
        assert_eq!(response.algorithm, HashAlgorithm::Crc32);
        assert_eq!(response.to_string(), "Data: abc | Checksum: 352441c2");
    }

    #[tokio::test]
    async fn test_handlers_direct() {
        let params = vec![("text".to_string(), "abc".to_string())];
        let body = handle_checksum(Query(params)).await;
        assert_eq!(body, "Data: abc | Checksum: 352441c2");

        let body = handle_hash(Query(Vec::new())).await;
        assert!(body.starts_with("Data: Hello World Check Sum! | Hash: "));

        assert_eq!(handle_health().await, "OK");
    }
}
