//! Loads the mock resource catalog into the database.
//!
//! Usage: DATABASE_URL=postgres://... cargo run --bin seed

use swipestudy_backend::db::Database;
use swipestudy_backend::services::catalog;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let resources = catalog::catalog();
    let count = db.upsert_resources(&resources).await?;

    tracing::info!("Seeded {} resources", count);

    Ok(())
}
