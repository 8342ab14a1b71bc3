//! SQL statements for the `todos` table. Each function runs exactly one
//! statement against the pool it is given.

use sqlx::{PgPool, Postgres};

use crate::{
    error::StorageError,
    todo::{Todo, TodoChange},
};

const INSERT_TODO: &str = "INSERT INTO todos (title) VALUES ($1) RETURNING id";
const UPDATE_TITLE: &str = "UPDATE todos SET title = $1 WHERE id = $2";
const UPDATE_DONE: &str = "UPDATE todos SET done = $1 WHERE id = $2";
const DELETE_TODO: &str = "DELETE FROM todos WHERE id = $1";
const SELECT_TODOS: &str = "SELECT id, title, done FROM todos";

/// Insert a todo and return the id the database assigned.
pub async fn create(pool: &PgPool, title: &str) -> Result<i32, StorageError> {
    sqlx::query_scalar::<_, i32>(INSERT_TODO)
        .bind(title)
        .fetch_one(pool)
        .await
        .map_err(StorageError::Create)
}

/// Apply a single-column change. Unknown ids affect zero rows and succeed.
pub async fn update(pool: &PgPool, id: i32, change: &TodoChange) -> Result<(), StorageError> {
    let query = match change {
        TodoChange::Title(title) => sqlx::query::<Postgres>(UPDATE_TITLE).bind(title.as_str()),
        TodoChange::Done(done) => sqlx::query::<Postgres>(UPDATE_DONE).bind(*done),
    };
    query
        .bind(id)
        .execute(pool)
        .await
        .map_err(StorageError::Update)?;
    Ok(())
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<(), StorageError> {
    sqlx::query(DELETE_TODO)
        .bind(id)
        .execute(pool)
        .await
        .map_err(StorageError::Delete)?;
    Ok(())
}

/// All rows in whatever order the database returns them.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Todo>, StorageError> {
    sqlx::query_as::<_, Todo>(SELECT_TODOS)
        .fetch_all(pool)
        .await
        .map_err(StorageError::List)
}
