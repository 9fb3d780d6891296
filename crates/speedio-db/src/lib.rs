//! # speedio-db
//!
//! PostgreSQL database layer for the speedio notes service.
//!
//! This crate provides:
//! - Connection pool management
//! - The PostgreSQL [`NoteRepository`] implementation
//! - An optional reference migration for the `notes` table
//!
//! ## Example
//!
//! ```rust,ignore
//! use speedio_db::{AccessToken, BatchMode, Database, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/speedio").await?;
//!
//!     let token = AccessToken::generate();
//!     let note = serde_json::json!({"text": "hello"});
//!     db.notes
//!         .insert_batch(&token, vec![note.as_object().cloned().unwrap()], BatchMode::Independent)
//!         .await?;
//!
//!     println!("{:?}", db.notes.list_by_token(token.as_str()).await?);
//!     Ok(())
//! }
//! ```
pub mod notes;
pub mod pool;

// Test fixtures for integration tests
// Always compiled so integration tests (in tests/) can use DEFAULT_TEST_DATABASE_URL
pub mod test_fixtures;

// Re-export core types
pub use speedio_core::*;

pub use notes::PgNoteRepository;
pub use pool::{create_pool, PoolConfig};

/// Reference schema bundled with the crate.
pub const REFERENCE_SCHEMA: &str =
    include_str!("../../../migrations/20240101000000_create_notes.sql");

/// Combined database context.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Note repository.
    pub notes: PgNoteRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            notes: PgNoteRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_config(url, PoolConfig::default()).await
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }

    /// Close every connection, waiting for checked-out ones to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
