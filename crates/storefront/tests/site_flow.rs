//! End-to-end tests for the catalog site.
//!
//! These drive the route handlers directly against in-memory SQLite
//! stores, exercising the full schema-guard + repository + error path
//! without a listener. The destructive-recovery tests use a temporary
//! directory for a file-backed store.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use axum::extract::{Path, Query, State};
use chrono::{DateTime, TimeZone, Utc};
use secrecy::SecretString;
use sqlx::SqlitePool;

use festiva_storefront::config::{MailConfig, PageSizes, SiteConfig};
use festiva_storefront::db::bootstrap::prepare_store;
use festiva_storefront::db::schema::create_schema;
use festiva_storefront::db::seed::{SeedOutcome, seed_if_empty};
use festiva_storefront::db::{StoreHealth, create_pool};
use festiva_storefront::error::AppError;
use festiva_storefront::routes::search::SearchQuery;
use festiva_storefront::routes::{blog, catalog, contact, home, news, products, search};
use festiva_storefront::state::AppState;

fn test_config() -> SiteConfig {
    SiteConfig {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 3000,
        secret_key: SecretString::from("test-secret"),
        session_lifetime: Duration::from_secs(30 * 60),
        mail: MailConfig {
            server: "smtp.gmail.com".to_string(),
            port: 587,
            use_tls: true,
            username: None,
            password: None,
        },
        pages: PageSizes::default(),
    }
}

/// A state wrapping a freshly created and seeded in-memory store.
async fn seeded_state() -> AppState {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    create_schema(&pool).await.unwrap();
    seed_if_empty(&pool).await.unwrap();
    AppState::new(test_config(), pool, StoreHealth::Ok)
}

fn ts(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
}

async fn insert_product(pool: &SqlitePool, title: &str, category_id: i64, price_cents: i64) -> i64 {
    sqlx::query(
        "INSERT INTO products (title, subtitle, image_url, category_id, price_cents, description, color)
         VALUES (?1, 'Ready to fly', '/static/images/products/set.jpg', ?2, ?3, NULL, 'Gold')",
    )
    .bind(title)
    .bind(category_id)
    .bind(price_cents)
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

async fn insert_post(pool: &SqlitePool, title: &str, created_at: DateTime<Utc>) {
    sqlx::query(
        "INSERT INTO blog_posts (title, excerpt, content, created_at)
         VALUES (?1, 'excerpt', 'content', ?2)",
    )
    .bind(title)
    .bind(created_at)
    .execute(pool)
    .await
    .unwrap();
}

async fn insert_news(pool: &SqlitePool, title: &str, created_at: DateTime<Utc>, published: bool) {
    sqlx::query(
        "INSERT INTO news_items (title, excerpt, content, created_at, published)
         VALUES (?1, 'excerpt', 'content', ?2, ?3)",
    )
    .bind(title)
    .bind(created_at)
    .bind(published)
    .execute(pool)
    .await
    .unwrap();
}

// ============================================================================
// Home page
// ============================================================================

#[tokio::test]
async fn home_after_seed_shows_catalog_shape() {
    let state = seeded_state().await;

    let page = home::home(State(state)).await.unwrap().0;

    assert_eq!(page.popular_categories.len(), 6);
    assert!(page.popular_categories.iter().all(|c| c.is_popular));
    assert_eq!(page.categories.len(), 18);
    assert_eq!(page.colors.len(), 12);
    assert!(page.blog_posts.is_empty());
    assert!(page.news.is_empty());
}

#[tokio::test]
async fn home_truncates_feeds_to_four() {
    let state = seeded_state().await;

    for day in 1..=10 {
        insert_post(state.pool(), &format!("Post {day}"), ts(day, 9)).await;
        insert_news(state.pool(), &format!("News {day}"), ts(day, 10), true).await;
    }

    let page = home::home(State(state)).await.unwrap().0;

    assert_eq!(page.blog_posts.len(), 4);
    assert_eq!(page.news.len(), 4);

    // The four most recent posts, strictly descending by created_at.
    let titles: Vec<&str> = page.blog_posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Post 10", "Post 9", "Post 8", "Post 7"]);
    assert!(
        page.blog_posts
            .windows(2)
            .all(|w| w[0].created_at > w[1].created_at)
    );
}

// ============================================================================
// Catalog and contact
// ============================================================================

#[tokio::test]
async fn catalog_lists_everything() {
    let state = seeded_state().await;

    insert_product(state.pool(), "Unicorn Bundle", 1, 4500).await;
    insert_product(state.pool(), "Pirate Bundle", 2, 3900).await;

    let page = catalog::catalog(State(state)).await.unwrap().0;

    assert_eq!(page.categories.len(), 18);
    assert_eq!(page.products.len(), 2);
    assert_eq!(page.colors.len(), 12);
    assert!(page.colors.iter().all(|c| c.is_active));
}

#[tokio::test]
async fn contact_is_static() {
    let page = contact::contact().await.0;
    assert!(!page.email.is_empty());
}

// ============================================================================
// Blog and news
// ============================================================================

#[tokio::test]
async fn blog_lists_all_posts_newest_first() {
    let state = seeded_state().await;

    insert_post(state.pool(), "Oldest", ts(1, 8)).await;
    insert_post(state.pool(), "Middle", ts(2, 8)).await;
    insert_post(state.pool(), "Newest", ts(3, 8)).await;

    let page = blog::index(State(state)).await.unwrap().0;

    let titles: Vec<&str> = page.posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, ["Newest", "Middle", "Oldest"]);
}

#[tokio::test]
async fn news_never_returns_unpublished_items() {
    let state = seeded_state().await;

    insert_news(state.pool(), "Visible", ts(1, 8), true).await;
    insert_news(state.pool(), "Draft", ts(2, 8), false).await;
    insert_news(state.pool(), "Also visible", ts(3, 8), true).await;

    let page = news::index(State(state)).await.unwrap().0;

    assert_eq!(page.items.len(), 2);
    assert!(page.items.iter().all(|n| n.published));
    assert_eq!(page.items[0].title, "Also visible");
}

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn search_empty_query_returns_all_products() {
    let state = seeded_state().await;

    insert_product(state.pool(), "Unicorn Bundle", 1, 4500).await;
    insert_product(state.pool(), "Pirate Bundle", 2, 3900).await;

    let page = search::search(
        State(state),
        Query(SearchQuery { q: String::new() }),
    )
    .await
    .unwrap()
    .0;

    assert_eq!(page.products.len(), 2);
    assert_eq!(page.query, "");
}

#[tokio::test]
async fn search_matches_case_sensitive_substring() {
    let state = seeded_state().await;

    insert_product(state.pool(), "Unicorn Bundle", 1, 4500).await;
    insert_product(state.pool(), "Pirate Bundle", 2, 3900).await;

    let hits = search::search(
        State(state.clone()),
        Query(SearchQuery {
            q: "Unicorn".to_string(),
        }),
    )
    .await
    .unwrap()
    .0;
    assert_eq!(hits.products.len(), 1);
    assert_eq!(hits.products[0].title, "Unicorn Bundle");

    // Lowercase needle does not match the capitalized title.
    let misses = search::search(
        State(state),
        Query(SearchQuery {
            q: "unicorn".to_string(),
        }),
    )
    .await
    .unwrap()
    .0;
    assert!(misses.products.is_empty());
}

// ============================================================================
// Product detail
// ============================================================================

#[tokio::test]
async fn product_detail_returns_product_and_related() {
    let state = seeded_state().await;

    let subject = insert_product(state.pool(), "Subject", 1, 1000).await;
    for i in 0..6 {
        insert_product(state.pool(), &format!("Same category {i}"), 1, 1000).await;
    }
    insert_product(state.pool(), "Other category", 2, 1000).await;

    let page = products::show(State(state), Path(subject)).await.unwrap().0;

    assert_eq!(page.product.id.as_i64(), subject);
    assert_eq!(page.product.price.cents(), 1000);
    assert_eq!(page.related.len(), 4);
    assert!(page.related.iter().all(|p| p.id.as_i64() != subject));
    assert!(page.related.iter().all(|p| p.category_id.as_i64() == 1));
}

#[tokio::test]
async fn product_detail_missing_id_is_not_found() {
    let state = seeded_state().await;

    let err = products::show(State(state), Path(9999)).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

// ============================================================================
// Schema guard on the request path
// ============================================================================

#[tokio::test]
async fn stale_schema_fails_requests_without_querying() {
    let state = seeded_state().await;

    sqlx::raw_sql("ALTER TABLE categories DROP COLUMN is_popular")
        .execute(state.pool())
        .await
        .unwrap();

    let err = home::home(State(state)).await.unwrap_err();
    assert!(matches!(err, AppError::SchemaStale));
}

#[tokio::test]
async fn uninitialized_schema_fails_requests() {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    let state = AppState::new(test_config(), pool, StoreHealth::Ok);

    let err = blog::index(State(state)).await.unwrap_err();
    assert!(matches!(err, AppError::SchemaUninitialized));
}

// ============================================================================
// Bootstrap and recovery
// ============================================================================

#[tokio::test]
async fn bootstrap_seeds_file_store_once() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}/festiva.db", dir.path().display());

    let first = prepare_store(&url).await.unwrap();
    assert_eq!(first.health, StoreHealth::Ok);
    assert_eq!(
        first.seeded,
        Some(SeedOutcome::Inserted {
            categories: 18,
            colors: 12
        })
    );
    first.pool.close().await;

    let second = prepare_store(&url).await.unwrap();
    assert_eq!(second.health, StoreHealth::Ok);
    assert_eq!(second.seeded, Some(SeedOutcome::Skipped));
}

#[tokio::test]
async fn bootstrap_recovers_from_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("festiva.db");
    std::fs::write(&path, b"this is not a sqlite database, not even close").unwrap();

    let url = format!("sqlite://{}", path.display());
    let bootstrap = prepare_store(&url).await.unwrap();

    // The corrupt file was deleted and the store recreated + reseeded.
    assert_eq!(bootstrap.health, StoreHealth::Ok);
    assert_eq!(
        bootstrap.seeded,
        Some(SeedOutcome::Inserted {
            categories: 18,
            colors: 12
        })
    );

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(&bootstrap.pool)
        .await
        .unwrap();
    assert_eq!(count, 18);
}
