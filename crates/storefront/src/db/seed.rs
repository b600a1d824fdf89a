//! One-time seed data for the catalog.
//!
//! The seed dataset is defined exactly once here and consumed by every
//! path that seeds (first boot and destructive recovery). [`seed_if_empty`]
//! is idempotent: it checks the category row count and does nothing when
//! data is already present, so it is safe to call on every restart.

use sqlx::SqlitePool;
use tracing::info;

use super::RepositoryError;

/// A category row in the seed dataset.
#[derive(Debug, Clone, Copy)]
pub struct CategorySeed {
    pub name: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub is_popular: bool,
}

/// A color option row in the seed dataset.
#[derive(Debug, Clone, Copy)]
pub struct ColorSeed {
    pub name: &'static str,
    pub hex_code: &'static str,
    pub is_active: bool,
}

/// The shop's category catalog: 6 popular categories highlighted on the
/// home page, 12 regular ones.
pub const CATEGORY_SEED: &[CategorySeed] = &[
    CategorySeed {
        name: "BALLOONS FOR GIRLS",
        description: "Balloon bundles for girls",
        image_url: "/static/images/categories/girls.jpg",
        is_popular: true,
    },
    CategorySeed {
        name: "BALLOONS FOR BOYS",
        description: "Balloon bundles for boys",
        image_url: "/static/images/categories/boys.jpg",
        is_popular: true,
    },
    CategorySeed {
        name: "NUMBER BALLOONS",
        description: "Balloon bundles with birthday numbers",
        image_url: "/static/images/categories/numbers.jpg",
        is_popular: true,
    },
    CategorySeed {
        name: "JUMBO BALLOON SETS",
        description: "Balloon bundles built around one jumbo balloon",
        image_url: "/static/images/categories/jumbo.jpg",
        is_popular: true,
    },
    CategorySeed {
        name: "BALLOONS FOR MEN",
        description: "Balloon bundles for men",
        image_url: "/static/images/categories/men.jpg",
        is_popular: true,
    },
    CategorySeed {
        name: "BALLOONS FOR WOMEN",
        description: "Balloon bundles for women",
        image_url: "/static/images/categories/women.jpg",
        is_popular: true,
    },
    CategorySeed {
        name: "BACHELORETTE PARTY",
        description: "Balloon bundles for bachelorette parties",
        image_url: "/static/images/categories/bachelorette.jpg",
        is_popular: false,
    },
    CategorySeed {
        name: "GENDER REVEAL",
        description: "Balloon bundles for gender reveal parties",
        image_url: "/static/images/categories/gender_reveal.jpg",
        is_popular: false,
    },
    CategorySeed {
        name: "WELCOME BABY",
        description: "Balloon bundles for bringing the newborn home",
        image_url: "/static/images/categories/welcome_baby.jpg",
        is_popular: false,
    },
    CategorySeed {
        name: "FIRST BIRTHDAY",
        description: "Balloon bundles for first birthdays",
        image_url: "/static/images/categories/first_birthday.jpg",
        is_popular: false,
    },
    CategorySeed {
        name: "BALLOON FIGURES",
        description: "Figures sculpted from balloons",
        image_url: "/static/images/categories/figures.jpg",
        is_popular: false,
    },
    CategorySeed {
        name: "EVENT STYLING",
        description: "Full event decoration with balloons",
        image_url: "/static/images/categories/styling.jpg",
        is_popular: false,
    },
    CategorySeed {
        name: "LATEX BALLOONS",
        description: "Helium latex balloons",
        image_url: "/static/images/categories/latex.jpg",
        is_popular: false,
    },
    CategorySeed {
        name: "FOIL BALLOONS",
        description: "Helium foil balloons",
        image_url: "/static/images/categories/foil.jpg",
        is_popular: false,
    },
    CategorySeed {
        name: "MESSAGE BALLOONS",
        description: "Balloons printed with compliments and jokes",
        image_url: "/static/images/categories/messages.jpg",
        is_popular: false,
    },
    CategorySeed {
        name: "SURPRISE BOXES",
        description: "Surprise boxes packed with balloons",
        image_url: "/static/images/categories/surprise.jpg",
        is_popular: false,
    },
    CategorySeed {
        name: "BALLOON FOUNTAINS",
        description: "Table fountains made of balloons",
        image_url: "/static/images/categories/fountains.jpg",
        is_popular: false,
    },
    CategorySeed {
        name: "BALLOON COLUMNS",
        description: "Floor-standing balloon columns",
        image_url: "/static/images/categories/columns.jpg",
        is_popular: false,
    },
];

/// The shop's color palette, all active.
pub const COLOR_SEED: &[ColorSeed] = &[
    ColorSeed {
        name: "White & Beige",
        hex_code: "#ffffff",
        is_active: true,
    },
    ColorSeed {
        name: "Black",
        hex_code: "#000000",
        is_active: true,
    },
    ColorSeed {
        name: "Pink",
        hex_code: "#ff99cc",
        is_active: true,
    },
    ColorSeed {
        name: "Rose Gold & Blush",
        hex_code: "#e6b8cf",
        is_active: true,
    },
    ColorSeed {
        name: "Hot Pink",
        hex_code: "#ff00ff",
        is_active: true,
    },
    ColorSeed {
        name: "Sky Blue",
        hex_code: "#0099ff",
        is_active: true,
    },
    ColorSeed {
        name: "Blue",
        hex_code: "#0000ff",
        is_active: true,
    },
    ColorSeed {
        name: "Tiffany Teal",
        hex_code: "#009999",
        is_active: true,
    },
    ColorSeed {
        name: "Silver",
        hex_code: "#cccccc",
        is_active: true,
    },
    ColorSeed {
        name: "Gold",
        hex_code: "#ffd700",
        is_active: true,
    },
    ColorSeed {
        name: "Lilac Violet",
        hex_code: "#9370db",
        is_active: true,
    },
    ColorSeed {
        name: "Red",
        hex_code: "#ff0000",
        is_active: true,
    },
];

/// Outcome of a seed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already held data; nothing was inserted.
    Skipped,
    /// The seed dataset was inserted.
    Inserted {
        /// Number of categories inserted.
        categories: usize,
        /// Number of color options inserted.
        colors: usize,
    },
}

/// Insert the seed dataset if the store is empty.
///
/// Precondition: the schema is `Ready`. Both datasets are inserted in a
/// single transaction; a mid-seed failure rolls everything back.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the count query or any insert
/// fails.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<SeedOutcome, RepositoryError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(SeedOutcome::Skipped);
    }

    let mut tx = pool.begin().await?;

    for category in CATEGORY_SEED {
        sqlx::query(
            "INSERT INTO categories (name, description, image_url, is_popular)
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(category.name)
        .bind(category.description)
        .bind(category.image_url)
        .bind(category.is_popular)
        .execute(&mut *tx)
        .await?;
    }

    for color in COLOR_SEED {
        sqlx::query("INSERT INTO color_options (name, hex_code, is_active) VALUES (?1, ?2, ?3)")
            .bind(color.name)
            .bind(color.hex_code)
            .bind(color.is_active)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    info!(
        categories = CATEGORY_SEED.len(),
        colors = COLOR_SEED.len(),
        "Seed data inserted"
    );

    Ok(SeedOutcome::Inserted {
        categories: CATEGORY_SEED.len(),
        colors: COLOR_SEED.len(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::create_pool;
    use crate::db::schema::create_schema;

    async fn ready_pool() -> SqlitePool {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        create_schema(&pool).await.unwrap();
        pool
    }

    #[test]
    fn test_seed_dataset_shape() {
        assert_eq!(CATEGORY_SEED.len(), 18);
        assert_eq!(CATEGORY_SEED.iter().filter(|c| c.is_popular).count(), 6);
        assert_eq!(COLOR_SEED.len(), 12);
        assert!(COLOR_SEED.iter().all(|c| c.is_active));
        // Every hex code is a valid #rrggbb literal.
        assert!(
            COLOR_SEED
                .iter()
                .all(|c| festiva_core::HexColor::parse(c.hex_code).is_ok())
        );
    }

    #[tokio::test]
    async fn test_seed_inserts_once() {
        let pool = ready_pool().await;

        let first = seed_if_empty(&pool).await.unwrap();
        assert_eq!(
            first,
            SeedOutcome::Inserted {
                categories: 18,
                colors: 12
            }
        );

        let second = seed_if_empty(&pool).await.unwrap();
        assert_eq!(second, SeedOutcome::Skipped);

        let categories: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&pool)
            .await
            .unwrap();
        let colors: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM color_options")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(categories, 18);
        assert_eq!(colors, 12);
    }
}
