//! HTTP backend for a single `todos` table.
//!
//! # Overview
//! Four routes translate requests into one SQL statement each:
//! `POST /createTodo`, `/updateTodo`, `DELETE /deleteTodo` and `/getAllTodos`.
//! Handlers talk to a `TodoStore`; production uses `PgTodoStore` over a lazily
//! built pool, tests use `MemoryTodoStore`.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod repository;
pub mod store;
pub mod todo;

use std::future::Future;

use axum::{
    http::{header, HeaderValue, Method},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use config::Config;
pub use db::Database;
pub use error::{AppError, ConfigError, StorageError, ValidationError};
pub use handlers::AppState;
pub use memory::MemoryTodoStore;
pub use store::{PgTodoStore, TodoStore};
pub use todo::{CreateTodo, Todo, TodoChange};

/// Routes answer any method; `/deleteTodo` checks its method itself so it can
/// reply with a message.
pub fn app(state: AppState, cors_origin: HeaderValue) -> Router {
    Router::new()
        .route("/createTodo", any(handlers::create_todo))
        .route("/updateTodo", any(handlers::update_todo))
        .route("/deleteTodo", any(handlers::delete_todo))
        .route("/getAllTodos", any(handlers::get_all_todos))
        .layer(TraceLayer::new_for_http())
        .layer(cors(cors_origin))
        .with_state(state)
}

pub fn cors(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

pub async fn run<F>(
    listener: TcpListener,
    state: AppState,
    cors_origin: HeaderValue,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(state, cors_origin))
        .with_graceful_shutdown(shutdown)
        .await
}
