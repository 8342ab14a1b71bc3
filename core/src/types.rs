//! Domain DTOs for the todo API.
//!
//! # Design
//! These mirror the server's schema but are defined independently so the
//! client does not pull in axum or sqlx. The integration test catches any
//! drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single todo item returned by `/getAllTodos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub done: bool,
}

/// Request payload for creating a new todo. The server always starts it as
/// not done.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// One field to change on an existing todo. The server rejects requests that
/// carry both or neither, so the client cannot express them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateTodo {
    Title(String),
    Done(bool),
}
