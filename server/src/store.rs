//! The seam between HTTP handlers and persistence.

use async_trait::async_trait;
use tracing::info;

use crate::{
    db::Database,
    error::StorageError,
    repository,
    todo::{Todo, TodoChange},
};

#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn create(&self, title: &str) -> Result<i32, StorageError>;

    async fn update(&self, id: i32, change: TodoChange) -> Result<(), StorageError>;

    async fn delete(&self, id: i32) -> Result<(), StorageError>;

    async fn list_all(&self) -> Result<Vec<Todo>, StorageError>;
}

/// PostgreSQL-backed store. The pool is acquired from `Database` on every
/// call, which after the first connect is just a cell read.
pub struct PgTodoStore {
    db: Database,
}

impl PgTodoStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn create(&self, title: &str) -> Result<i32, StorageError> {
        let pool = self.db.acquire().await?;
        let id = repository::create(pool, title).await?;
        info!(id, "created todo");
        Ok(id)
    }

    async fn update(&self, id: i32, change: TodoChange) -> Result<(), StorageError> {
        let pool = self.db.acquire().await?;
        repository::update(pool, id, &change).await?;
        info!(id, "updated todo");
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StorageError> {
        let pool = self.db.acquire().await?;
        repository::delete(pool, id).await?;
        info!(id, "deleted todo");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Todo>, StorageError> {
        let pool = self.db.acquire().await?;
        repository::list_all(pool).await
    }
}
