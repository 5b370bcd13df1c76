use sqlx_migrator::{Migrate, Plan};
use std::path::Path;

use crate::Config;

/// Apply every pending migration, creating the database file if needed
pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Migrating database");

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    let mut conn = pool.acquire().await?;
    laptop_review_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

/// Drop the database file and run migrations
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Dropping database");

    let path = database_path(&config.database.url);
    for suffix in ["", "-wal", "-shm"] {
        let file = format!("{path}{suffix}");
        if Path::new(&file).exists() {
            std::fs::remove_file(&file)?;
            tracing::info!("Dropped database file: {}", file);
        }
    }

    migrate(config).await
}

fn database_path(url: &str) -> &str {
    let path = url.strip_prefix("sqlite://").unwrap_or(url);
    let path = path.strip_prefix("sqlite:").unwrap_or(path);

    path.split('?').next().unwrap_or(path)
}
