use anyhow::Result;

pub async fn migrate(config: crate::config::Config) -> Result<()> {
    tracing::info!(database.url = %config.database.url, "Running migrations...");

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    crate::db::migrate(&pool).await?;
    pool.close().await;

    Ok(())
}
