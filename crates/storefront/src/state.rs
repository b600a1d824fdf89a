//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::SiteConfig;
use crate::db::{StoreHealth, schema};
use crate::error::AppError;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the store pool and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    pool: SqlitePool,
    store_health: StoreHealth,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Site configuration
    /// * `pool` - SQLite connection pool, already bootstrapped
    /// * `store_health` - Outcome of the bootstrap sequence
    #[must_use]
    pub fn new(config: SiteConfig, pool: SqlitePool, store_health: StoreHealth) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                store_health,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the store connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    /// Health of the store as determined at bootstrap.
    #[must_use]
    pub fn store_health(&self) -> StoreHealth {
        self.inner.store_health
    }

    /// Run the schema guard and fail the request unless the store is
    /// `Ready`.
    ///
    /// Every query entry point calls this first; querying a missing or
    /// stale schema is undefined.
    ///
    /// # Errors
    ///
    /// Returns `SchemaUninitialized`/`SchemaStale` for a non-`Ready`
    /// store, or `Database` if the inspection itself fails.
    pub async fn ensure_store_ready(&self) -> Result<(), AppError> {
        let status = schema::ensure_schema(self.pool()).await?;
        AppError::require_ready(status)
    }
}
