use std::{path::PathBuf, str::FromStr};

use laptop_review_shared::State;
use laptop_review_user::{JwtKeys, RegisterInput};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub const SECRET: &str = "test_secret_key_minimum_32_characters_long";

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

pub fn command(state: State) -> laptop_review_user::Command {
    laptop_review_user::Command::new(state, JwtKeys::new(SECRET, 3600))
}

#[allow(dead_code)]
pub async fn create_user(
    cmd: &laptop_review_user::Command,
    name: impl Into<String>,
) -> anyhow::Result<i64> {
    let name = name.into();
    let user = cmd
        .register(RegisterInput {
            username: name.to_owned(),
            email: format!("{name}@laptop-review.localhost"),
            password: "my_password".to_owned(),
        })
        .await?;

    Ok(user.id)
}
