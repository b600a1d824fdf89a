//! Product detail route handler.

use axum::{
    Json,
    extract::{Path, State},
};
use festiva_core::ProductId;
use serde::Serialize;
use tracing::instrument;

use crate::db::CatalogRepository;
use crate::error::{AppError, Result};
use crate::models::Product;
use crate::state::AppState;

/// Number of related products shown next to the detail view.
const RELATED_LIMIT: i64 = 4;

/// Product detail payload.
#[derive(Debug, Serialize)]
pub struct ProductPage {
    /// The requested product.
    pub product: Product,
    /// Up to 4 products from the same category, excluding this one.
    pub related: Vec<Product>,
}

/// Fetch one product and its related products.
///
/// # Errors
///
/// Returns 404 if no product has the given ID.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductPage>> {
    state.ensure_store_ready().await?;

    let repo = CatalogRepository::new(state.pool());
    let id = ProductId::new(id);

    let product = repo
        .product_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    let related = repo
        .related_products(product.id, product.category_id, RELATED_LIMIT)
        .await?;

    Ok(Json(ProductPage { product, related }))
}
