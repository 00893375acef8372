//! Error types for the heroes API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the server signals a missing
//! hero with 404. All other non-2xx responses land in `Http` with the raw
//! status code and body. `Transport` covers failures where no response was
//! received at all.

use thiserror::Error;

/// Errors produced while building, sending or parsing a heroes request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested hero does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}
