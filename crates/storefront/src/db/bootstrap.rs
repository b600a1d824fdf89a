//! Store bootstrap: schema guard, one-time seed, and destructive recovery.
//!
//! [`prepare_store`] runs exactly once per process lifetime, strictly
//! before any request is served. The recovery policy is deliberate and
//! loud: a store error during initialization deletes the backing file and
//! retries the full create+seed sequence exactly once; a second failure
//! leaves the process running against a store in an unknown state, which
//! is reported through [`StoreHealth::Degraded`] (and the readiness
//! endpoint) rather than swallowed.
//!
//! A schema that is merely missing or stale is NOT an error: it recreates
//! the tables in place without touching the file.

use std::path::{Path, PathBuf};

use sqlx::SqlitePool;
use tracing::{error, info, warn};

use super::schema::{SchemaStatus, create_schema, ensure_schema};
use super::seed::{SeedOutcome, seed_if_empty};
use super::{RepositoryError, create_pool};

/// Health of the store after bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreHealth {
    /// Bootstrap completed; the store is ready to serve.
    Ok,
    /// Recovery failed; the store's contents are not guaranteed.
    Degraded,
}

/// Result of [`prepare_store`].
#[derive(Debug)]
pub struct Bootstrap {
    /// Connection pool to the (possibly recreated) store.
    pub pool: SqlitePool,
    /// Whether the store is usable.
    pub health: StoreHealth,
    /// What the seed loader did, if bootstrap got that far.
    pub seeded: Option<SeedOutcome>,
}

/// Open the store, make sure its schema matches the declared model, and
/// seed it if empty.
///
/// # Errors
///
/// Returns `RepositoryError::Database` only when no pool can be opened at
/// all after recovery; every other failure is handled by the recovery
/// policy and reported via [`Bootstrap::health`].
pub async fn prepare_store(database_url: &str) -> Result<Bootstrap, RepositoryError> {
    match open_and_initialize(database_url).await {
        Ok((pool, seeded)) => Ok(Bootstrap {
            pool,
            health: StoreHealth::Ok,
            seeded: Some(seeded),
        }),
        Err(err) => {
            warn!(error = %err, "Store bootstrap failed, attempting destructive recovery");
            recover(database_url).await
        }
    }
}

/// Open a pool and run the schema/seed sequence, closing the pool again
/// on failure. A corrupt backing file can fail either step (sqlx touches
/// the file at connect time), so both are recoverable.
async fn open_and_initialize(
    database_url: &str,
) -> Result<(SqlitePool, SeedOutcome), RepositoryError> {
    let pool = create_pool(database_url).await?;
    match initialize(&pool).await {
        Ok(seeded) => Ok((pool, seeded)),
        Err(err) => {
            pool.close().await;
            Err(err)
        }
    }
}

/// Classify the schema, recreate it if missing or stale, then seed.
async fn initialize(pool: &SqlitePool) -> Result<SeedOutcome, RepositoryError> {
    match ensure_schema(pool).await? {
        SchemaStatus::Ready => {}
        SchemaStatus::Uninitialized => {
            info!("Store uninitialized, creating schema");
            create_schema(pool).await?;
        }
        SchemaStatus::Stale => {
            warn!("Store schema stale, recreating all tables");
            create_schema(pool).await?;
        }
    }
    seed_if_empty(pool).await
}

/// Delete the backing store file and retry the full create+seed sequence
/// exactly once.
async fn recover(database_url: &str) -> Result<Bootstrap, RepositoryError> {
    remove_store_files(database_url);

    match open_and_initialize(database_url).await {
        Ok((pool, seeded)) => {
            info!("Store recovered after recreation");
            Ok(Bootstrap {
                pool,
                health: StoreHealth::Ok,
                seeded: Some(seeded),
            })
        }
        Err(err) => {
            error!(
                error = %err,
                "Store recovery failed, continuing with a degraded store"
            );
            // The process keeps running so the failure stays observable;
            // the readiness endpoint reports the degraded store.
            let pool = create_pool(database_url).await?;
            Ok(Bootstrap {
                pool,
                health: StoreHealth::Degraded,
                seeded: None,
            })
        }
    }
}

/// Extract the filesystem path from a SQLite connection string, if it is
/// file-backed.
fn store_file_path(database_url: &str) -> Option<PathBuf> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);

    // Query parameters (e.g. ?mode=rwc) are not part of the path.
    let path = path.split('?').next().unwrap_or(path);

    if path.is_empty() || path == ":memory:" || database_url.contains("mode=memory") {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Best-effort removal of the store file and its WAL/SHM siblings.
///
/// Memory-backed stores have nothing to delete; recreating the schema on
/// the fresh connection is enough for them.
fn remove_store_files(database_url: &str) {
    let Some(path) = store_file_path(database_url) else {
        return;
    };

    for sibling in [
        path.clone(),
        sibling_path(&path, "-wal"),
        sibling_path(&path, "-shm"),
    ] {
        match std::fs::remove_file(&sibling) {
            Ok(()) => info!(path = %sibling.display(), "Deleted store file"),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => warn!(
                path = %sibling.display(),
                error = %err,
                "Failed to delete store file"
            ),
        }
    }
}

/// Append a suffix to a path's final component.
fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
