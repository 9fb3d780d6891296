//! Server configuration read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `3000` |
//! | `DATABASE_URL` | `postgres://localhost/speedio` |
//! | `DATABASE_MAX_CONNECTIONS` | `10` |
//! | `PERSIST_ATOMIC` | `false` |
//! | `MAX_BODY_BYTES` | `102400` |
//! | `RUN_MIGRATIONS` | `false` |
//!
//! Malformed numeric values fall back to their default with a warning.

use std::fmt::Display;
use std::str::FromStr;

use speedio_core::defaults::{
    DEFAULT_DATABASE_URL, DEFAULT_HOST, DEFAULT_MAX_BODY_BYTES, DEFAULT_PORT,
};
use speedio_core::BatchMode;
use speedio_db::pool::DEFAULT_MAX_CONNECTIONS;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    /// How the inserts of one create request are committed.
    pub batch_mode: BatchMode,
    pub max_body_bytes: usize,
    /// Apply the bundled reference schema before serving.
    pub run_migrations: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            batch_mode: BatchMode::Independent,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            run_migrations: false,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let atomic = lookup("PERSIST_ATOMIC")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        Self {
            host: lookup("HOST")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port),
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                defaults.max_connections,
            ),
            batch_mode: if atomic {
                BatchMode::Atomic
            } else {
                BatchMode::Independent
            },
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes),
            run_migrations: lookup("RUN_MIGRATIONS")
                .map(|v| is_truthy(&v))
                .unwrap_or(false),
        }
    }

    /// Address string handed to the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1")
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?} ({e}), using default: {default}");
            default
        }),
        None => default,
    }
}
