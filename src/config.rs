//! Environment-driven configuration for the comment API server.
//!
//! Configuration is read once at startup; nothing in the library reads the
//! environment after that.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Default path of the JSON comment store.
const DEFAULT_COMMENTS_FILE: &str = "db/comments.json";

/// Default listening port.
const DEFAULT_PORT: u16 = 3000;

/// Storage backend selection with its backend-specific settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    /// Flat JSON file store.
    JsonFile {
        /// Path of the JSON document.
        path: PathBuf,
    },
    /// `PostgreSQL` store.
    Postgres {
        /// Connection string for the database.
        database_url: String,
    },
}

/// Server configuration resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Selected storage backend.
    pub storage: StorageConfig,
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
}

/// Errors returned while resolving configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `COMMENTS_STORAGE` named an unknown backend.
    #[error("unknown storage backend '{0}'; expected 'file' or 'postgres'")]
    UnknownBackend(String),

    /// The postgres backend was selected without a connection string.
    #[error("DATABASE_URL must be set when COMMENTS_STORAGE is 'postgres'")]
    MissingDatabaseUrl,

    /// `PORT` did not parse as a port number.
    #[error("invalid PORT value '{0}'")]
    InvalidPort(String),
}

impl Config {
    /// Resolves configuration from the process environment.
    ///
    /// Recognized variables:
    ///
    /// - `COMMENTS_STORAGE`: `file` (default) or `postgres`
    /// - `DATABASE_URL`: connection string, required for `postgres`
    /// - `COMMENTS_FILE`: JSON store path, default `db/comments.json`
    /// - `PORT`: listening port, default 3000
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a variable holds an unusable value or
    /// a required variable is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        let storage = match env::var("COMMENTS_STORAGE").ok().as_deref() {
            None | Some("file") => StorageConfig::JsonFile {
                path: env::var("COMMENTS_FILE")
                    .map_or_else(|_| PathBuf::from(DEFAULT_COMMENTS_FILE), PathBuf::from),
            },
            Some("postgres") => StorageConfig::Postgres {
                database_url: env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::MissingDatabaseUrl)?,
            },
            Some(other) => return Err(ConfigError::UnknownBackend(other.to_owned())),
        };

        let port = match env::var("PORT").ok() {
            None => DEFAULT_PORT,
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
        };

        Ok(Self {
            storage,
            listen_addr: format!("0.0.0.0:{port}"),
        })
    }
}
