//! Catalog listing route handler.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::db::CatalogRepository;
use crate::error::Result;
use crate::models::{Category, ColorOption, Product};
use crate::state::AppState;

/// Catalog page payload.
#[derive(Debug, Serialize)]
pub struct CatalogPage {
    /// All categories.
    pub categories: Vec<Category>,
    /// All products.
    pub products: Vec<Product>,
    /// All color swatches.
    pub colors: Vec<ColorOption>,
}

/// Fetch the full catalog.
#[instrument(skip(state))]
pub async fn catalog(State(state): State<AppState>) -> Result<Json<CatalogPage>> {
    state.ensure_store_ready().await?;

    let repo = CatalogRepository::new(state.pool());

    Ok(Json(CatalogPage {
        categories: repo.all_categories().await?,
        products: repo.all_products().await?,
        colors: repo.all_color_options().await?,
    }))
}
