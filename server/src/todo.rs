//! The todo entity and the request payloads that carry it over HTTP.

use serde::{Deserialize, Serialize};

/// A single row of the `todos` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub done: bool,
}

/// Body of `POST /createTodo`. A missing `title` decodes as the empty string.
/// The capitalized key is accepted too; other casings are not.
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodo {
    #[serde(default, alias = "Title")]
    pub title: String,
}

/// The single column an update touches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoChange {
    Title(String),
    Done(bool),
}
