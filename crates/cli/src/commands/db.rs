//! Store management commands.
//!
//! All commands resolve the store location the same way the storefront
//! does: `FESTIVA_DATABASE_URL`, then `DATABASE_URL`, then the embedded
//! `sqlite://festiva.db` default.

use tracing::{info, warn};

use festiva_storefront::config::SiteConfig;
use festiva_storefront::db::schema::{SchemaStatus, ensure_schema};
use festiva_storefront::db::seed::{SeedOutcome, seed_if_empty};
use festiva_storefront::db::{StoreHealth, create_pool, prepare_store};

/// Bootstrap the store: schema guard, create/recreate if needed, seed.
///
/// Applies the same destructive recovery policy as the storefront binary:
/// a store error deletes the backing file and retries once.
///
/// # Errors
///
/// Returns an error if configuration fails to load or no pool can be
/// opened at all.
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = SiteConfig::from_env()?;

    info!(url = %config.database_url, "Bootstrapping store");
    let bootstrap = prepare_store(&config.database_url).await?;

    match bootstrap.health {
        StoreHealth::Ok => match bootstrap.seeded {
            Some(SeedOutcome::Inserted { categories, colors }) => {
                info!("Store ready");
                info!("  Categories inserted: {categories}");
                info!("  Colors inserted: {colors}");
            }
            Some(SeedOutcome::Skipped) => info!("Store ready, seed data already present"),
            None => info!("Store ready"),
        },
        StoreHealth::Degraded => {
            warn!("Bootstrap and recovery both failed; store contents are not guaranteed");
        }
    }

    Ok(())
}

/// Seed an empty store.
///
/// # Errors
///
/// Returns an error if the schema is not `Ready` or the insert fails.
pub async fn seed() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = SiteConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;

    match ensure_schema(&pool).await? {
        SchemaStatus::Ready => {}
        status => return Err(format!("store is not ready to seed (schema {status:?})").into()),
    }

    match seed_if_empty(&pool).await? {
        SeedOutcome::Inserted { categories, colors } => {
            info!("Seeding complete!");
            info!("  Categories inserted: {categories}");
            info!("  Colors inserted: {colors}");
        }
        SeedOutcome::Skipped => info!("Seed data already present, nothing inserted"),
    }

    Ok(())
}

/// Show schema status and row counts.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or queried.
pub async fn status() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = SiteConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    let schema = ensure_schema(&pool).await?;

    info!("Store: {}", config.database_url);
    info!("Schema: {schema:?}");

    if schema != SchemaStatus::Ready {
        return Ok(());
    }

    for table in [
        "categories",
        "products",
        "blog_posts",
        "news_items",
        "color_options",
    ] {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await?;
        info!("  {table}: {count}");
    }

    Ok(())
}
