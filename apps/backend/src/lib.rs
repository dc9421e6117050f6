pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

/// Build the API router for the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // User routes
        .route("/api/users/register", post(routes::users::register))
        .route("/api/users/:id", get(routes::users::get))
        .route(
            "/api/users/:id/onboarding",
            post(routes::users::complete_onboarding),
        )
        .route(
            "/api/users/:id/weekly-hours",
            put(routes::users::update_weekly_hours),
        )
        .route("/api/users/:id/saved", get(routes::feed::saved))
        // Feed routes
        .route("/api/feed/:user_id", get(routes::feed::batch))
        .route("/api/resources", get(routes::feed::list))
        .route("/api/swipes", post(routes::feed::record_swipe))
        // Playlist routes
        .route("/api/playlist/:user_id", get(routes::playlist::get))
        .route(
            "/api/playlist/:user_id/items",
            post(routes::playlist::add_item),
        )
        .route(
            "/api/playlist/:user_id/schedule",
            get(routes::playlist::schedule),
        )
        .route(
            "/api/playlist/items/:item_id/status",
            put(routes::playlist::update_status),
        )
        .route(
            "/api/playlist/items/:item_id/cycle",
            post(routes::playlist::cycle_status),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let state = AppState { db: Arc::new(db) };
    let app = build_router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
