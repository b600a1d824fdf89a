//! Catalog domain types: categories, products, and color options.

use festiva_core::{CategoryId, ColorOptionId, HexColor, Price, ProductId};
use serde::Serialize;

/// A product category.
///
/// Created only by the seed loader; never updated or deleted in-app.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Category {
    /// Unique category ID.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Short description for listing pages.
    pub description: Option<String>,
    /// Image reference for the category tile.
    pub image_url: Option<String>,
    /// Whether the category is highlighted on the home page.
    pub is_popular: bool,
}

/// A catalog product.
///
/// Every product belongs to exactly one category; a category may own any
/// number of products.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Short subtitle shown under the title.
    pub subtitle: String,
    /// Image reference for the product card.
    pub image_url: String,
    /// Owning category.
    pub category_id: CategoryId,
    /// Price; never negative.
    #[sqlx(rename = "price_cents")]
    pub price: Price,
    /// Long-form description.
    pub description: Option<String>,
    /// Free-text color label. Deliberately NOT a reference into
    /// `color_options`.
    pub color: Option<String>,
}

/// A color swatch offered by the shop.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ColorOption {
    /// Unique color option ID.
    pub id: ColorOptionId,
    /// Display name.
    pub name: String,
    /// Swatch color in `#rrggbb` form.
    pub hex_code: HexColor,
    /// Whether the swatch is currently offered.
    pub is_active: bool,
}
