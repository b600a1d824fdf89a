//! Home page route handler.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::db::{CatalogRepository, ContentRepository};
use crate::error::Result;
use crate::models::{BlogPost, Category, ColorOption, NewsItem};
use crate::state::AppState;

/// Number of blog posts and news items featured on the home page.
const HOME_FEED_LIMIT: i64 = 4;

/// Home page payload.
#[derive(Debug, Serialize)]
pub struct HomePage {
    /// Categories highlighted at the top of the page.
    pub popular_categories: Vec<Category>,
    /// All categories for the navigation strip.
    pub categories: Vec<Category>,
    /// Latest blog posts, newest first.
    pub blog_posts: Vec<BlogPost>,
    /// Latest published news, newest first.
    pub news: Vec<NewsItem>,
    /// All color swatches.
    pub colors: Vec<ColorOption>,
}

/// Fetch the home page data.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<Json<HomePage>> {
    state.ensure_store_ready().await?;

    let catalog = CatalogRepository::new(state.pool());
    let content = ContentRepository::new(state.pool());

    Ok(Json(HomePage {
        popular_categories: catalog.popular_categories().await?,
        categories: catalog.all_categories().await?,
        blog_posts: content.recent_posts(HOME_FEED_LIMIT).await?,
        news: content.recent_published_news(HOME_FEED_LIMIT).await?,
        colors: catalog.all_color_options().await?,
    }))
}
