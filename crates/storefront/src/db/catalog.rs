//! Catalog repository: categories, products, and color options.
//!
//! All operations are read-only and tolerate an empty result set. They are
//! only valid against a store the schema guard reports `Ready`.

use festiva_core::{CategoryId, ProductId};
use sqlx::SqlitePool;

use super::RepositoryError;
use crate::models::{Category, ColorOption, Product};

/// Repository for catalog reads.
pub struct CatalogRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All categories flagged for home-page highlighting, in seed
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn popular_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query_as::<_, Category>(
            "SELECT id, name, description, image_url, is_popular
             FROM categories WHERE is_popular = 1 ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// All categories.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn all_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query_as::<_, Category>(
            "SELECT id, name, description, image_url, is_popular
             FROM categories ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// All color options.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if a stored hex code is invalid.
    pub async fn all_color_options(&self) -> Result<Vec<ColorOption>, RepositoryError> {
        sqlx::query_as::<_, ColorOption>(
            "SELECT id, name, hex_code, is_active FROM color_options ORDER BY id",
        )
        .fetch_all(self.pool)
        .await
        .map_err(decode_as_corruption)
    }

    /// All products.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if a stored price is negative.
    pub async fn all_products(&self) -> Result<Vec<Product>, RepositoryError> {
        sqlx::query_as::<_, Product>(
            "SELECT id, title, subtitle, image_url, category_id, price_cents, description, color
             FROM products ORDER BY id",
        )
        .fetch_all(self.pool)
        .await
        .map_err(decode_as_corruption)
    }

    /// Products whose title contains `query` as a case-sensitive substring.
    ///
    /// An empty query matches every product (an empty string is a
    /// substring of any title). SQLite's `LIKE` is case-insensitive for
    /// ASCII, so matching goes through `instr()` instead.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn search_by_title(&self, query: &str) -> Result<Vec<Product>, RepositoryError> {
        if query.is_empty() {
            return self.all_products().await;
        }

        sqlx::query_as::<_, Product>(
            "SELECT id, title, subtitle, image_url, category_id, price_cents, description, color
             FROM products WHERE instr(title, ?1) > 0 ORDER BY id",
        )
        .bind(query)
        .fetch_all(self.pool)
        .await
        .map_err(decode_as_corruption)
    }

    /// Fetch a product by primary key.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn product_by_id(
        &self,
        id: ProductId,
    ) -> Result<Option<Product>, RepositoryError> {
        sqlx::query_as::<_, Product>(
            "SELECT id, title, subtitle, image_url, category_id, price_cents, description, color
             FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(decode_as_corruption)
    }

    /// Products sharing `category_id`, excluding `product_id` itself,
    /// truncated to `limit`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn related_products(
        &self,
        product_id: ProductId,
        category_id: CategoryId,
        limit: i64,
    ) -> Result<Vec<Product>, RepositoryError> {
        sqlx::query_as::<_, Product>(
            "SELECT id, title, subtitle, image_url, category_id, price_cents, description, color
             FROM products WHERE category_id = ?1 AND id <> ?2 ORDER BY id LIMIT ?3",
        )
        .bind(category_id)
        .bind(product_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await
        .map_err(decode_as_corruption)
    }
}

/// Re-classify row decode failures (invalid price or hex code) as data
/// corruption; everything else stays a database error.
fn decode_as_corruption(err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::ColumnDecode { index, source } => RepositoryError::DataCorruption(format!(
            "invalid value in column {index}: {source}"
        )),
        other => RepositoryError::Database(other),
    }
}
