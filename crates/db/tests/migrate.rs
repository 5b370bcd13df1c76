use std::str::FromStr;

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use temp_dir::TempDir;

async fn setup_pool(dir: &TempDir) -> anyhow::Result<SqlitePool> {
    let path = dir.child("db.sqlite3");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_string_lossy()))?
        .create_if_missing(true)
        .foreign_keys(true);

    Ok(SqlitePool::connect_with(opts).await?)
}

async fn table_names(pool: &SqlitePool) -> anyhow::Result<Vec<String>> {
    let names = sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('user', 'profile', 'brand', 'category', 'laptop', 'comment') ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(names)
}

#[tokio::test]
async fn test_apply_and_revert_all() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = setup_pool(&dir).await?;
    let mut conn = pool.acquire().await?;

    laptop_review_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);

    assert_eq!(
        table_names(&pool).await?,
        vec!["brand", "category", "comment", "laptop", "profile", "user"]
    );

    let mut conn = pool.acquire().await?;
    laptop_review_db::migrator()?
        .run(&mut conn, &Plan::revert_all())
        .await?;
    drop(conn);

    assert!(table_names(&pool).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_laptop_requires_existing_brand() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = setup_pool(&dir).await?;
    let mut conn = pool.acquire().await?;
    laptop_review_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);

    let err = sqlx::query(
        "INSERT INTO laptop (brand_id, category_id, name, release_year, spec, price, created_at, updated_at) VALUES (42, 42, 'ghost', 2024, '', 1.0, 0, 0)",
    )
    .execute(&pool)
    .await
    .unwrap_err();

    let db_err = err.as_database_error().unwrap();
    assert!(db_err.is_foreign_key_violation());

    Ok(())
}
