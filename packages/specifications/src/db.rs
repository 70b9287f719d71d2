// ABOUTME: Database connection management and shared application state
// ABOUTME: Provides the SQLite pool, storage layer, and AI client to API handlers

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::{debug, info};

use specgen_ai::AIService;

use crate::storage::{SpecificationStorage, StorageError};

/// Shared state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub spec_storage: Arc<SpecificationStorage>,
    pub ai: Arc<AIService>,
}

impl DbState {
    /// Create state from an existing pool and AI client
    pub fn new(pool: SqlitePool, ai: AIService) -> Self {
        let spec_storage = Arc::new(SpecificationStorage::new(pool.clone()));
        Self {
            pool,
            spec_storage,
            ai: Arc::new(ai),
        }
    }

    /// Initialize state with the default database location
    pub async fn init(ai: AIService) -> Result<Self, StorageError> {
        Self::init_with_path(None, ai).await
    }

    /// Initialize state with an optional custom database path, creating the
    /// database and running migrations
    pub async fn init_with_path(
        database_path: Option<PathBuf>,
        ai: AIService,
    ) -> Result<Self, StorageError> {
        let database_path = database_path.unwrap_or_else(specgen_core::database_file);

        // Ensure parent directory exists
        if let Some(parent) = database_path.parent() {
            std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
        }

        let database_url = format!("sqlite:{}?mode=rwc", database_path.display());

        debug!("Connecting to database: {}", database_url);

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect(&database_url)
            .await
            .map_err(StorageError::Sqlx)?;

        // Configure SQLite settings
        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        sqlx::query("PRAGMA synchronous = NORMAL")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;

        info!("Database connection established");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(StorageError::Migration)?;

        debug!("Database migrations completed");

        Ok(Self::new(pool, ai))
    }
}
