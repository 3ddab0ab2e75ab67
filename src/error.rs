//! Error taxonomy for engine round trips
//!
//! Every failure carries enough context to diagnose remotely (status code
//! plus the engine-provided message, or the parse failure). Nothing is
//! retried here; each call is a single idempotent read and a surrounding
//! resilience layer can retry it safely.

use thiserror::Error;

/// Errors returned by [`crate::network::EngineClient`] operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The engine could not be reached at all (DNS, connect, timeout,
    /// broken stream).
    #[error("search engine unreachable: {0}")]
    Connectivity(#[source] reqwest::Error),

    /// Index provisioning was rejected because the index already exists.
    /// Distinguished from other schema rejections so bootstrap code can
    /// tolerate it.
    #[error("index {index:?} already exists")]
    IndexExists { index: String },

    /// Index provisioning was rejected for any other reason.
    #[error("index creation rejected (status {status}): {message}")]
    Schema { status: u16, message: String },

    /// The engine returned a non-success status for a search, or the
    /// request was structurally invalid before it was sent.
    #[error("query rejected (status {status}): {message}")]
    Query { status: u16, message: String },

    /// The response body could not be parsed into the expected envelope.
    #[error("malformed response envelope: {0}")]
    Decode(#[source] serde_json::Error),
}

impl Error {
    pub(crate) fn query(status: u16, message: impl Into<String>) -> Self {
        Self::Query {
            status,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
