use anyhow::Context;
use chronicle_app::config::AppConfig;
use chronicle_app::{report, seed};
use chronicle_db::repositories::ArticleRepo;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chronicle=info,chronicle_app=info,chronicle_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env()?;

    let pool = chronicle_db::create_pool(&config.database_url, config.max_connections)
        .await
        .context("Failed to connect to database")?;
    tracing::info!(
        max_connections = config.max_connections,
        "Database connection pool created"
    );

    chronicle_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    if config.drop_first {
        chronicle_db::reset_schema(&pool)
            .await
            .context("Failed to reset database schema")?;
    } else {
        chronicle_db::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
    }
    tracing::info!("Database migrations applied");

    if config.seed_demo {
        let created = seed::seed_demo(&pool)
            .await
            .context("Failed to seed demo articles")?;
        tracing::info!(created, "Demo articles seeded");
    }

    let articles = ArticleRepo::find_all(&pool)
        .await
        .context("Failed to load articles")?;
    tracing::info!(count = articles.len(), "Loaded articles");
    println!("{}", report::render(&articles));

    Ok(())
}
