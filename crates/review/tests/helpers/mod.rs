use std::{path::PathBuf, str::FromStr};

use laptop_review_catalog::{BrandInput, CategoryInput, LaptopInput};
use laptop_review_review::CommentInput;
use laptop_review_shared::State;
use laptop_review_user::{JwtKeys, RegisterInput};
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

pub async fn create_users(
    state: &State,
    names: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<i64>> {
    let command = laptop_review_user::Command::new(
        state.clone(),
        JwtKeys::new("test_secret_key_minimum_32_characters_long", 3600),
    );

    let mut ids = vec![];
    for name in names.into_iter() {
        let name = name.into();
        let user = command
            .register(RegisterInput {
                username: name.to_owned(),
                email: format!("{name}@laptop-review.localhost"),
                password: "my_password".to_owned(),
            })
            .await?;
        ids.push(user.id);
    }

    Ok(ids)
}

pub async fn create_laptops(state: &State, count: usize) -> anyhow::Result<Vec<i64>> {
    let command = laptop_review_catalog::Command::new(state.clone());
    let brand = command
        .brand
        .create(BrandInput {
            name: "Dell".to_owned(),
        })
        .await?;
    let category = command
        .category
        .create(CategoryInput {
            name: "Business".to_owned(),
        })
        .await?;

    let mut ids = vec![];
    for i in 0..count {
        let laptop = command
            .laptop
            .create(LaptopInput {
                name: format!("Latitude {i}"),
                release_year: 2023,
                spec: "".to_owned(),
                price: 999.0,
                brand_id: brand.id,
                category_id: category.id,
            })
            .await?;
        ids.push(laptop.id);
    }

    Ok(ids)
}

#[allow(dead_code)]
pub async fn delete_laptop(state: &State, id: i64) -> anyhow::Result<()> {
    laptop_review_catalog::Command::new(state.clone())
        .laptop
        .delete(id)
        .await?;

    Ok(())
}

pub fn input(laptop_id: i64, content: &str, rating: i64) -> CommentInput {
    CommentInput {
        content: content.to_owned(),
        rating,
        laptop_id,
    }
}
