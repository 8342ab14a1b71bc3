//! Error types for the todo server.
//!
//! # Design
//! Three families mirror where a failure originates: `ValidationError` for
//! bad requests, `StorageError` for anything the database reports, and
//! `ConfigError` for startup problems. Handlers return `AppError`, which picks
//! the status code and writes a plain-text body terminated by a newline.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

/// A request was malformed, incomplete or used the wrong method.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid request body")]
    InvalidBody,

    #[error("Missing 'id' query parameter")]
    MissingId,

    #[error("Invalid 'id' parameter, must be an integer")]
    InvalidId,

    #[error("Please provide either 'title' or 'done', but not both")]
    ConflictingUpdate,

    #[error("Invalid 'done' parameter, must be a boolean")]
    InvalidDone,

    #[error("Invalid request method, expected DELETE")]
    ExpectedDelete,
}

impl ValidationError {
    pub fn status(&self) -> StatusCode {
        match self {
            ValidationError::ExpectedDelete => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

/// A statement failed to execute, or its rows failed to decode.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create todo: {0}")]
    Create(#[source] sqlx::Error),

    #[error("error updating todo: {0}")]
    Update(#[source] sqlx::Error),

    #[error("error deleting todo: {0}")]
    Delete(#[source] sqlx::Error),

    #[error("error getting all todos: {0}")]
    List(#[source] sqlx::Error),

    #[error("database unavailable: {0}")]
    Unavailable(#[from] ConfigError),
}

/// Startup configuration could not be loaded, or the database is unreachable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error loading .env file: {0}")]
    EnvFile(#[source] dotenvy::Error),

    #[error("missing environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },

    #[error("unable to connect to database: {0}")]
    Connect(#[source] sqlx::Error),
}

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The read path reports storage failures as a client error.
    #[error("error getting all todos")]
    ListTodos(#[source] StorageError),

    #[error("Failed to encode JSON")]
    Encode(#[source] serde_json::Error),

    #[error("Internal server error")]
    Storage(#[from] StorageError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(e) => {
                warn!(error = %e, "rejected request");
                e.status()
            }
            AppError::ListTodos(e) => {
                error!(error = %e, "list failed");
                StatusCode::BAD_REQUEST
            }
            AppError::Encode(e) => {
                error!(error = %e, "encoding todos failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Storage(e) => {
                error!(error = %e, "storage operation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, format!("{self}\n")).into_response()
    }
}
