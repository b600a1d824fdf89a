//! Content repository: blog posts and news items.
//!
//! Read-only, like the catalog repository. News visibility is gated by the
//! `published` flag; unpublished rows never leave this module.

use sqlx::SqlitePool;

use super::RepositoryError;
use crate::models::{BlogPost, NewsItem};

/// Repository for blog and news reads.
pub struct ContentRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ContentRepository<'a> {
    /// Create a new content repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// The most recent blog posts, newest first, truncated to `limit`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn recent_posts(&self, limit: i64) -> Result<Vec<BlogPost>, RepositoryError> {
        let rows = sqlx::query_as::<_, BlogPost>(
            "SELECT id, title, excerpt, content, image_url, created_at, author
             FROM blog_posts ORDER BY created_at DESC LIMIT ?1",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// All blog posts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn all_posts(&self) -> Result<Vec<BlogPost>, RepositoryError> {
        let rows = sqlx::query_as::<_, BlogPost>(
            "SELECT id, title, excerpt, content, image_url, created_at, author
             FROM blog_posts ORDER BY created_at DESC",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// The most recent published news items, newest first, truncated to
    /// `limit`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn recent_published_news(
        &self,
        limit: i64,
    ) -> Result<Vec<NewsItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, NewsItem>(
            "SELECT id, title, excerpt, content, image_url, created_at, published
             FROM news_items WHERE published = 1 ORDER BY created_at DESC LIMIT ?1",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }

    /// All published news items, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn published_news(&self) -> Result<Vec<NewsItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, NewsItem>(
            "SELECT id, title, excerpt, content, image_url, created_at, published
             FROM news_items WHERE published = 1 ORDER BY created_at DESC",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(rows)
    }
}
