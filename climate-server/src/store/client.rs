//! Connection pool for the climate dataset.

use std::path::PathBuf;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::debug;

use super::error::StoreError;
use super::session::Session;

/// Default dataset file, relative to the working directory.
const DEFAULT_PATH: &str = "Hawaii.sqlite";

/// Configuration for opening the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path to the SQLite file
    pub path: PathBuf,
    /// Maximum number of pooled connections (concurrent sessions)
    pub max_connections: u32,
}

impl StoreConfig {
    /// Create a new config for the given file with the default pool size.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: 4,
        }
    }

    /// Set a custom pool size.
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}

/// Handle to the read-only climate dataset.
///
/// Cheap to clone; every request takes its own [`Session`].
#[derive(Debug, Clone)]
pub struct ClimateStore {
    pool: SqlitePool,
}

impl ClimateStore {
    /// Open the dataset read-only.
    ///
    /// Fails if the file does not exist; it is never created. One connection
    /// is opened eagerly so an unreadable file is reported here rather than
    /// on the first request.
    pub async fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(1)
            .connect_with(options)
            .await?;

        debug!(
            path = %config.path.display(),
            max_connections = config.max_connections,
            "opened dataset"
        );

        Ok(Self { pool })
    }

    /// Take a session for the duration of one request.
    ///
    /// The connection goes back to the pool when the session is dropped.
    pub async fn session(&self) -> Result<Session, StoreError> {
        let conn = self.pool.acquire().await?;
        Ok(Session::new(conn))
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
