use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(
    database_url: &str,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply every pending migration under `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Drop the schema and the migration ledger, then migrate from scratch.
///
/// Destroys all stored articles and comments.
pub async fn reset_schema(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::query("DROP TABLE IF EXISTS comments, articles, _sqlx_migrations")
        .execute(pool)
        .await?;
    tracing::warn!("Dropped articles, comments and migration history");
    run_migrations(pool).await
}
