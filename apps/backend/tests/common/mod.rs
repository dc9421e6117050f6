//! Common test utilities and fixtures for integration tests.
//!
//! Provides a TestContext that connects to a real database, builds the
//! application router, and cleans up per-test data afterwards.
//!
//! # Requirements
//! Integration tests require PostgreSQL (set DATABASE_URL env var).

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use swipestudy_backend::db::Database;
use swipestudy_backend::{build_router, AppState};

/// Test context containing database connection and test server.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);
        let app = build_router(AppState { db: db.clone() });

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Create a test user with a unique email and return its ID.
    pub async fn create_test_user(&self) -> Uuid {
        let user = self
            .db
            .get_or_create_user(&fixtures::unique_email())
            .await
            .expect("Failed to create test user");
        user.id
    }

    /// Create a test user that has completed onboarding.
    pub async fn create_onboarded_user(&self, goals: &[&str], level: &str) -> Uuid {
        let user_id = self.create_test_user().await;
        let data = swipestudy_core::OnboardingData {
            goals: goals.iter().map(|g| g.to_string()).collect(),
            level: level.parse().expect("invalid level"),
            weekly_hours: 5,
        };
        self.db
            .complete_onboarding(user_id, &data)
            .await
            .expect("Failed to complete onboarding")
            .expect("test user vanished");
        user_id
    }

    /// Make sure the mock catalog is present in the resources table.
    pub async fn seed_catalog(&self) {
        self.db
            .upsert_resources(&swipestudy_backend::services::catalog::catalog())
            .await
            .expect("Failed to seed catalog");
    }

    /// Clean up test data for a user.
    ///
    /// Call this after tests to remove test data. Catalog resources are
    /// shared between tests and left in place.
    pub async fn cleanup_user(&self, user_id: Uuid) {
        // Delete in order due to foreign keys
        let _ = sqlx::query(
            "DELETE FROM playlist_items WHERE playlist_id IN \
             (SELECT id FROM playlists WHERE user_id = $1)",
        )
        .bind(user_id)
        .execute(self.db.pool())
        .await;
        let _ = sqlx::query("DELETE FROM playlists WHERE user_id = $1")
            .bind(user_id)
            .execute(self.db.pool())
            .await;
        let _ = sqlx::query("DELETE FROM swipes WHERE user_id = $1")
            .bind(user_id)
            .execute(self.db.pool())
            .await;
        let _ = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(self.db.pool())
            .await;
    }
}
