//! Search route handler.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::CatalogRepository;
use crate::error::Result;
use crate::models::Product;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Substring to match against product titles. Defaults to "" when the
    /// parameter is absent, which matches every product.
    #[serde(default)]
    pub q: String,
}

/// Search results payload.
#[derive(Debug, Serialize)]
pub struct SearchPage {
    /// The query as received.
    pub query: String,
    /// Products whose title contains the query.
    pub products: Vec<Product>,
}

/// Search products by title substring (case-sensitive).
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchPage>> {
    state.ensure_store_ready().await?;

    let products = CatalogRepository::new(state.pool())
        .search_by_title(&params.q)
        .await?;

    Ok(Json(SearchPage {
        query: params.q,
        products,
    }))
}
