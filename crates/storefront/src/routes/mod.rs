//! HTTP route handlers for the catalog site.
//!
//! Rendering is an external collaborator, so every handler returns the
//! fetched data as JSON. All routes are GET and read-only.
//!
//! # Route Structure
//!
//! ```text
//! GET /              - Home page data (popular + all categories, recent posts/news, colors)
//! GET /catalog       - Full catalog (categories, products, colors)
//! GET /blog          - All blog posts, newest first
//! GET /news          - Published news, newest first
//! GET /contact       - Static contact card
//! GET /search?q=     - Products whose title contains q
//! GET /product/{id}  - One product plus up to 4 related
//! ```
//!
//! Unmatched paths fall through to a 404; handler failures are mapped to
//! generic 404/500 bodies by [`crate::error::AppError`].

pub mod blog;
pub mod catalog;
pub mod contact;
pub mod home;
pub mod news;
pub mod products;
pub mod search;

use axum::{Router, http::StatusCode, routing::get};

use crate::state::AppState;

/// Create all routes for the catalog site.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/catalog", get(catalog::catalog))
        .route("/blog", get(blog::index))
        .route("/news", get(news::index))
        .route("/contact", get(contact::contact))
        .route("/search", get(search::search))
        .route("/product/{id}", get(products::show))
        .fallback(not_found)
}

/// Fallback handler for unmatched paths.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
