//! Content domain types: blog posts and news items.

use chrono::{DateTime, Utc};
use festiva_core::{BlogPostId, NewsId};
use serde::Serialize;

/// A blog post. Independent entity, no relationships.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct BlogPost {
    /// Unique post ID.
    pub id: BlogPostId,
    /// Post title.
    pub title: String,
    /// Short excerpt for listing pages.
    pub excerpt: Option<String>,
    /// Full post body.
    pub content: String,
    /// Image reference for the post header.
    pub image_url: Option<String>,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// Author label; defaults to "Admin" at the store level.
    pub author: String,
}

/// A news item. Visibility is gated by [`published`](Self::published).
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct NewsItem {
    /// Unique news ID.
    pub id: NewsId,
    /// Headline.
    pub title: String,
    /// Short excerpt for listing pages.
    pub excerpt: Option<String>,
    /// Full item body.
    pub content: String,
    /// Image reference.
    pub image_url: Option<String>,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// Whether the item is visible on the site.
    pub published: bool,
}
