use anyhow::Context;
use dotenvy::dotenv;

use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::seed::seed_database;

/// Clears the database and loads the demo data set.
///
/// Uses the same DATABASE_URL and MIGRATIONS_PATH variables as the server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let migrations_path = std::env::var("MIGRATIONS_PATH")
        .unwrap_or_else(|_| "infrastructure/persistence/migrations".to_string());

    let pool = create_postgres_pool(&DatabaseConfig::new(db_url))
        .await
        .context("failed to connect to PostgreSQL")?;
    run_migrations(&pool, &migrations_path)
        .await
        .context("failed to apply database migrations")?;

    let report = seed_database(&pool).await.context("error seeding database")?;
    tracing::info!(
        items = report.items,
        shopping_lists = report.shopping_lists,
        entries = report.entries,
        "Database seed completed"
    );

    pool.close().await;
    Ok(())
}
