//! News route handler.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::db::ContentRepository;
use crate::error::Result;
use crate::models::NewsItem;
use crate::state::AppState;

/// News index payload.
#[derive(Debug, Serialize)]
pub struct NewsPage {
    /// All published news, newest first.
    pub items: Vec<NewsItem>,
}

/// Fetch all published news items, newest first.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<NewsPage>> {
    state.ensure_store_ready().await?;

    let items = ContentRepository::new(state.pool()).published_news().await?;
    Ok(Json(NewsPage { items }))
}
