//! Lazily initialized PostgreSQL pool.
//!
//! # Design
//! `Database` is constructed once in `main` and handed to whoever needs the
//! pool. The first `acquire` connects; concurrent first callers wait on the
//! same `OnceCell` so exactly one pool is ever built. `release` closes the
//! pool during shutdown and does nothing if no pool was built.

use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use tokio::sync::OnceCell;
use tracing::info;

use crate::error::ConfigError;

pub struct Database {
    options: PgConnectOptions,
    pool: OnceCell<PgPool>,
}

impl Database {
    pub fn new(options: PgConnectOptions) -> Self {
        Self {
            options,
            pool: OnceCell::new(),
        }
    }

    pub async fn acquire(&self) -> Result<&PgPool, ConfigError> {
        self.pool
            .get_or_try_init(|| async {
                let pool = PgPoolOptions::new()
                    .connect_with(self.options.clone())
                    .await
                    .map_err(ConfigError::Connect)?;
                info!("Connected to PostgreSQL");
                Ok(pool)
            })
            .await
    }

    pub fn is_initialized(&self) -> bool {
        self.pool.initialized()
    }

    pub async fn release(&self) {
        if let Some(pool) = self.pool.get() {
            pool.close().await;
            info!("Database connection pool closed");
        }
    }
}
