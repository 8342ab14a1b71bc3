//! Environment-sourced settings.

use std::{fmt, net::SocketAddr};

use sqlx::postgres::{PgConnectOptions, PgSslMode};

use crate::error::ConfigError;

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub db_name: String,
    pub listen_addr: SocketAddr,
    pub cors_origin: String,
}

impl Config {
    /// Load `.env` from the working directory, then read the process
    /// environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().map_err(ConfigError::EnvFile)?;
        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::MissingVar(name));

        let port_raw = required("DB_PORT")?;
        let port = port_raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
            name: "DB_PORT",
            value: port_raw.clone(),
        })?;

        let listen_raw = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr = listen_raw.parse().map_err(|_| ConfigError::InvalidVar {
            name: "LISTEN_ADDR",
            value: listen_raw.clone(),
        })?;

        Ok(Self {
            host: required("DB_HOST")?,
            port,
            user: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
            db_name: required("DB_NAME")?,
            listen_addr,
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        })
    }

    /// Connection parameters for the pool. TLS is disabled.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.db_name)
            .ssl_mode(PgSslMode::Disable)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("db_name", &self.db_name)
            .field("listen_addr", &self.listen_addr)
            .field("cors_origin", &self.cors_origin)
            .finish()
    }
}
