use std::{path::PathBuf, str::FromStr};

use laptop_review_catalog::{BrandInput, CategoryInput, LaptopInput};
use laptop_review_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_string_lossy()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    laptop_review_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub fn laptop_input(name: &str, brand_id: i64, category_id: i64) -> LaptopInput {
    LaptopInput {
        name: name.to_owned(),
        release_year: 2024,
        spec: "16GB RAM, 512GB SSD".to_owned(),
        price: 1299.99,
        brand_id,
        category_id,
    }
}

/// Returns `(brand_id, category_id)`.
#[allow(dead_code)]
pub async fn create_brand_and_category(
    cmd: &laptop_review_catalog::Command,
) -> anyhow::Result<(i64, i64)> {
    let brand = cmd
        .brand
        .create(BrandInput {
            name: "Lenovo".to_owned(),
        })
        .await?;
    let category = cmd
        .category
        .create(CategoryInput {
            name: "Ultrabook".to_owned(),
        })
        .await?;

    Ok((brand.id, category.id))
}
