//! API Data Models
//!
//! Request and response types for the checksum and hash endpoints.

use crate::config::HashAlgorithm;
use serde::Serialize;
use std::fmt;

/// Name of the query parameter carrying the text
pub const TEXT_PARAM: &str = "text";

/// Query parameters accepted by `/checksum` and `/hash`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    /// Text to process; absent or empty means the default text
    pub text: Option<String>,
}

impl TextQuery {
    /// Build from decoded query pairs
    ///
    /// A repeated `text` parameter is joined with commas, so
    /// `?text=a&text=b` yields `a,b`. Other parameters are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let values: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| key == TEXT_PARAM)
            .map(|(_, value)| value)
            .collect();

        Self {
            text: (!values.is_empty()).then(|| values.join(",")),
        }
    }
}

/// Computed checksum or digest for a piece of text
///
/// Displays as the plain-text response body, e.g.
/// `Data: abc | Checksum: 352441c2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigestResponse {
    /// The text that was processed
    pub data: String,
    /// Algorithm used
    pub algorithm: HashAlgorithm,
    /// Lowercase hex value
    pub value: String,
}

impl DigestResponse {
    /// Create a new response
    pub fn new(data: impl Into<String>, algorithm: HashAlgorithm, value: String) -> Self {
        Self {
            data: data.into(),
            algorithm,
            value,
        }
    }

    /// Label used for the value in the response body
    pub fn label(&self) -> &'static str {
        match self.algorithm {
            HashAlgorithm::Crc32 => "Checksum",
            HashAlgorithm::Sha256 => "Hash",
        }
    }
}

impl fmt::Display for DigestResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Data: {} | {}: {}", self.data, self.label(), self.value)
    }
}
