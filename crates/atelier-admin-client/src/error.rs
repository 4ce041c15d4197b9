//! Error types for the owner API client.

use thiserror::Error;

/// Errors that can occur when talking to the owner backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Failed to build the client or reach the backend.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Transport-level HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("HTTP {status}: {path}")]
    Status { status: u16, path: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}
