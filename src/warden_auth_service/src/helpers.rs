use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};
use warden_adapters::{MIGRATOR, config::PostgresSetting};

/// Connect to PostgreSQL and bring the schema up to date
///
/// # Arguments
/// * `setting` - Connection settings holding the database URL
///
/// # Returns
/// A PgPool with all pending migrations applied
pub async fn configure_postgresql(setting: &PostgresSetting) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(setting.url.expose_secret()).await?;

    MIGRATOR.run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
///
/// # Arguments
/// * `url` - Database connection URL
pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}
