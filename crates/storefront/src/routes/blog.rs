//! Blog route handler.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::db::ContentRepository;
use crate::error::Result;
use crate::models::BlogPost;
use crate::state::AppState;

/// Blog index payload.
#[derive(Debug, Serialize)]
pub struct BlogPage {
    /// All posts, newest first.
    pub posts: Vec<BlogPost>,
}

/// Fetch all blog posts, newest first.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<BlogPage>> {
    state.ensure_store_ready().await?;

    let posts = ContentRepository::new(state.pool()).all_posts().await?;
    Ok(Json(BlogPage { posts }))
}
