//! Error types for the todo API client.
//!
//! # Design
//! The server answers validation failures with 400 and a one-line message, so
//! that case gets its own variant carrying the message. Every other non-200
//! response lands in `HttpError` with the raw status and body.

use thiserror::Error;

/// Errors returned by `TodoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server rejected the request (400) with this message.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The server returned a status other than 200 or 400.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
