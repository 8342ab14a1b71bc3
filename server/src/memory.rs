//! In-process store with the same observable behavior as the `todos` table:
//! ids start at 1 and are never reused, new rows are not done, updates and
//! deletes of unknown ids succeed without effect.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::StorageError,
    store::TodoStore,
    todo::{Todo, TodoChange},
};

#[derive(Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Todo>,
}

#[derive(Default)]
pub struct MemoryTodoStore {
    table: RwLock<Table>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn create(&self, title: &str) -> Result<i32, StorageError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = table.last_id;
        table.rows.insert(
            id,
            Todo {
                id,
                title: title.to_string(),
                done: false,
            },
        );
        Ok(id)
    }

    async fn update(&self, id: i32, change: TodoChange) -> Result<(), StorageError> {
        let mut table = self.table.write().await;
        if let Some(todo) = table.rows.get_mut(&id) {
            match change {
                TodoChange::Title(title) => todo.title = title,
                TodoChange::Done(done) => todo.done = done,
            }
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StorageError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Todo>, StorageError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }
}
