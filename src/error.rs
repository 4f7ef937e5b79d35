// src/error.rs
//! Loud failures only: retrieval, status, target URL, decoding.
//! Anything that goes wrong inside a single field or list item is absorbed
//! by the extractors and never shows up here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrendingError {
    /// Transport-level failure (DNS, TLS, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered, but not with a success status.
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    /// Base origin or fetch target could not be parsed.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Raw document bytes were not valid UTF-8.
    #[error("document is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrendingError>;
