//! Schema guard for the SQLite store.
//!
//! The guard classifies the live store before anything queries it:
//! a store without the `categories` table is [`SchemaStatus::Uninitialized`],
//! a store whose persisted version (or table shape) does not match the
//! current entity definitions is [`SchemaStatus::Stale`], and everything
//! else is [`SchemaStatus::Ready`]. Querying a non-`Ready` store is
//! undefined, so request handlers treat the first two as fatal for the
//! request and only the bootstrap path reacts to them by recreating the
//! schema.

use sqlx::SqlitePool;

use super::RepositoryError;

/// Version of the declared schema below.
///
/// Bumped whenever the table shape changes; stores carrying an older
/// version are reported [`SchemaStatus::Stale`] and recreated at bootstrap.
pub const SCHEMA_VERSION: i64 = 2;

/// Classification of the live store's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// Schema matches the current entity definitions.
    Ready,
    /// The store has no schema at all.
    Uninitialized,
    /// The store has a schema, but it does not match the current
    /// entity definitions.
    Stale,
}

/// Statements that rebuild the store from scratch.
///
/// Drops run in reverse dependency order so the `products` foreign key
/// never dangles mid-batch.
const SCHEMA_SQL: &str = "
DROP TABLE IF EXISTS products;
DROP TABLE IF EXISTS categories;
DROP TABLE IF EXISTS blog_posts;
DROP TABLE IF EXISTS news_items;
DROP TABLE IF EXISTS color_options;
DROP TABLE IF EXISTS schema_meta;

CREATE TABLE categories (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    description TEXT,
    image_url   TEXT,
    is_popular  INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE products (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    subtitle    TEXT NOT NULL,
    image_url   TEXT NOT NULL,
    category_id INTEGER NOT NULL REFERENCES categories(id),
    price_cents INTEGER NOT NULL CHECK (price_cents >= 0),
    description TEXT,
    color       TEXT
);

CREATE INDEX idx_products_category ON products(category_id);

CREATE TABLE blog_posts (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    title      TEXT NOT NULL,
    excerpt    TEXT,
    content    TEXT NOT NULL,
    image_url  TEXT,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    author     TEXT NOT NULL DEFAULT 'Admin'
);

CREATE TABLE news_items (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    title      TEXT NOT NULL,
    excerpt    TEXT,
    content    TEXT NOT NULL,
    image_url  TEXT,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    published  INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE color_options (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name      TEXT NOT NULL,
    hex_code  TEXT NOT NULL CHECK (length(hex_code) = 7),
    is_active INTEGER NOT NULL DEFAULT 1
);

CREATE TABLE schema_meta (
    version INTEGER NOT NULL
);
";

/// Inspect the live store and classify its schema.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the inspection queries fail
/// (e.g. the backing file is not a database).
pub async fn ensure_schema(pool: &SqlitePool) -> Result<SchemaStatus, RepositoryError> {
    if !table_exists(pool, "categories").await? {
        return Ok(SchemaStatus::Uninitialized);
    }

    if !table_exists(pool, "schema_meta").await? {
        return Ok(SchemaStatus::Stale);
    }

    let version: Option<i64> = sqlx::query_scalar("SELECT version FROM schema_meta LIMIT 1")
        .fetch_optional(pool)
        .await?;
    if version != Some(SCHEMA_VERSION) {
        return Ok(SchemaStatus::Stale);
    }

    // Column probe on top of the version row: stores written before
    // versioning (or hand-edited ones) can carry a current-looking version
    // next to an old table shape.
    if !column_exists(pool, "categories", "is_popular").await? {
        return Ok(SchemaStatus::Stale);
    }

    Ok(SchemaStatus::Ready)
}

/// Drop and recreate all tables from the declared model, then persist the
/// current schema version. Runs in a single transaction.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if any statement fails; the
/// transaction is rolled back.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), RepositoryError> {
    let mut tx = pool.begin().await?;

    sqlx::raw_sql(SCHEMA_SQL).execute(&mut *tx).await?;
    sqlx::query("INSERT INTO schema_meta (version) VALUES (?1)")
        .bind(SCHEMA_VERSION)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(())
}

/// Check whether a table exists in the live store.
async fn table_exists(pool: &SqlitePool, name: &str) -> Result<bool, RepositoryError> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(name)
            .fetch_one(pool)
            .await?;
    Ok(count > 0)
}

/// Check whether a column exists on a table in the live store.
async fn column_exists(
    pool: &SqlitePool,
    table: &str,
    column: &str,
) -> Result<bool, RepositoryError> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2")
            .bind(table)
            .bind(column)
            .fetch_one(pool)
            .await?;
    Ok(count > 0)
}
