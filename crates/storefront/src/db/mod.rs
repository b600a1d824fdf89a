//! Database operations for the Festiva SQLite store.
//!
//! # Store
//!
//! A single embedded SQLite file (configurable via `FESTIVA_DATABASE_URL`)
//! holding the whole catalog:
//!
//! ## Tables
//!
//! - `categories` - Product categories, with a popularity flag for the home page
//! - `products` - Catalog products, each owned by exactly one category
//! - `blog_posts` - Blog entries
//! - `news_items` - News entries, gated by a published flag
//! - `color_options` - Color swatches offered by the shop
//! - `schema_meta` - Persisted schema version, checked by the schema guard
//!
//! # Lifecycle
//!
//! [`bootstrap::prepare_store`] runs once at process start, strictly before
//! any request is served: it checks the schema shape ([`schema`]), recreates
//! the tables when missing or stale, and inserts the one-time seed data
//! ([`seed`]). Request handlers only ever read.

pub mod bootstrap;
pub mod catalog;
pub mod content;
pub mod schema;
pub mod seed;

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use thiserror::Error;

pub use bootstrap::{Bootstrap, StoreHealth, prepare_store};
pub use catalog::CatalogRepository;
pub use content::ContentRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a SQLite connection pool with sensible defaults.
///
/// The pool is capped at a single connection: the reference deployment
/// serves one request at a time, and a single connection also keeps
/// `sqlite::memory:` stores coherent across queries.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (e.g. `sqlite://festiva.db`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}
