//! PostgreSQL database operations

use sqlx::{postgres::PgPoolOptions, PgPool, Row};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === User Repository ===

    /// Get the user with this email, creating a fresh un-onboarded one
    /// if none exists
    pub async fn get_or_create_user(&self, email: &str) -> Result<DbUser> {
        let existing = sqlx::query_as::<_, DbUser>(
            r#"
            SELECT id, email, goals, level, weekly_hours, onboarding_completed,
                   created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(user) = existing {
            return Ok(user);
        }

        let user = sqlx::query_as::<_, DbUser>(
            r#"
            INSERT INTO users (email)
            VALUES ($1)
            RETURNING id, email, goals, level, weekly_hours, onboarding_completed,
                      created_at, updated_at
            "#,
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Get user by ID
    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<DbUser>> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"
            SELECT id, email, goals, level, weekly_hours, onboarding_completed,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Store onboarding preferences and mark onboarding complete
    pub async fn complete_onboarding(
        &self,
        user_id: Uuid,
        data: &OnboardingData,
    ) -> Result<Option<DbUser>> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"
            UPDATE users
            SET goals = $2, level = $3, weekly_hours = $4,
                onboarding_completed = TRUE, updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, goals, level, weekly_hours, onboarding_completed,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&data.goals)
        .bind(data.level.as_str())
        .bind(data.weekly_hours)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Update the weekly time budget setting
    pub async fn update_weekly_hours(
        &self,
        user_id: Uuid,
        weekly_hours: i32,
    ) -> Result<Option<DbUser>> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"
            UPDATE users
            SET weekly_hours = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, email, goals, level, weekly_hours, onboarding_completed,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(weekly_hours)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    // === Resource Repository ===

    /// Upsert resources by id, overwriting stale fields
    pub async fn upsert_resources(&self, resources: &[Resource]) -> Result<usize> {
        for resource in resources {
            let row = DbResource::from_api_resource(resource);
            sqlx::query(
                r#"
                INSERT INTO resources (id, title, kind, url, thumbnail_url, duration,
                                       duration_minutes, quality_score, difficulty, tags, metadata)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                ON CONFLICT (id) DO UPDATE SET
                    title = EXCLUDED.title,
                    kind = EXCLUDED.kind,
                    url = EXCLUDED.url,
                    thumbnail_url = EXCLUDED.thumbnail_url,
                    duration = EXCLUDED.duration,
                    duration_minutes = EXCLUDED.duration_minutes,
                    quality_score = EXCLUDED.quality_score,
                    difficulty = EXCLUDED.difficulty,
                    tags = EXCLUDED.tags,
                    metadata = EXCLUDED.metadata,
                    updated_at = NOW()
                "#,
            )
            .bind(&row.id)
            .bind(&row.title)
            .bind(&row.kind)
            .bind(&row.url)
            .bind(&row.thumbnail_url)
            .bind(&row.duration)
            .bind(row.duration_minutes)
            .bind(row.quality_score)
            .bind(&row.difficulty)
            .bind(&row.tags)
            .bind(&row.metadata)
            .execute(&self.pool)
            .await?;
        }

        Ok(resources.len())
    }

    /// Get resource by ID
    pub async fn get_resource(&self, resource_id: &str) -> Result<Option<DbResource>> {
        let resource = sqlx::query_as::<_, DbResource>(
            r#"
            SELECT id, title, kind, url, thumbnail_url, duration, duration_minutes,
                   quality_score, difficulty, tags, metadata, created_at, updated_at
            FROM resources
            WHERE id = $1
            "#,
        )
        .bind(resource_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(resource)
    }

    /// Get resources by ID, in no particular order
    pub async fn get_resources_by_ids(&self, ids: &[String]) -> Result<Vec<DbResource>> {
        let resources = sqlx::query_as::<_, DbResource>(
            r#"
            SELECT id, title, kind, url, thumbnail_url, duration, duration_minutes,
                   quality_score, difficulty, tags, metadata, created_at, updated_at
            FROM resources
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(resources)
    }

    /// List resources ranked by quality, skipping excluded ids and,
    /// when a user is given, anything they already swiped on. Callers
    /// pass `limit = take + 1` to probe whether more rows remain.
    pub async fn list_resources(
        &self,
        skip: i64,
        limit: i64,
        exclude: &[String],
        swiped_by: Option<Uuid>,
    ) -> Result<Vec<DbResource>> {
        let resources = sqlx::query_as::<_, DbResource>(
            r#"
            SELECT id, title, kind, url, thumbnail_url, duration, duration_minutes,
                   quality_score, difficulty, tags, metadata, created_at, updated_at
            FROM resources r
            WHERE NOT (r.id = ANY($1))
              AND ($2::uuid IS NULL OR NOT EXISTS (
                    SELECT 1 FROM swipes s
                    WHERE s.user_id = $2 AND s.resource_id = r.id
              ))
            ORDER BY quality_score DESC, created_at DESC
            OFFSET $3
            LIMIT $4
            "#,
        )
        .bind(exclude)
        .bind(swiped_by)
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(resources)
    }

    // === Swipe Repository ===

    /// Record a swipe, overwriting the action on a repeat swipe of the
    /// same resource
    pub async fn upsert_swipe(
        &self,
        user_id: Uuid,
        resource_id: &str,
        action: SwipeAction,
    ) -> Result<DbSwipe> {
        let swipe = sqlx::query_as::<_, DbSwipe>(
            r#"
            INSERT INTO swipes (user_id, resource_id, action)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, resource_id) DO UPDATE SET action = EXCLUDED.action
            RETURNING id, user_id, resource_id, action, created_at
            "#,
        )
        .bind(user_id)
        .bind(resource_id)
        .bind(action.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(swipe)
    }

    /// IDs of every resource this user has swiped on
    pub async fn swiped_resource_ids(&self, user_id: Uuid) -> Result<Vec<String>> {
        let rows = sqlx::query(
            r#"
            SELECT resource_id FROM swipes WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(|r| r.get("resource_id")).collect())
    }

    /// Resources the user saved, newest save first
    pub async fn saved_resources(&self, user_id: Uuid) -> Result<Vec<DbResource>> {
        let resources = sqlx::query_as::<_, DbResource>(
            r#"
            SELECT r.id, r.title, r.kind, r.url, r.thumbnail_url, r.duration,
                   r.duration_minutes, r.quality_score, r.difficulty, r.tags, r.metadata,
                   r.created_at, r.updated_at
            FROM resources r
            JOIN swipes s ON s.resource_id = r.id
            WHERE s.user_id = $1 AND s.action = 'SAVE'
            ORDER BY s.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(resources)
    }

    // === Playlist Repository ===

    /// Get the user's playlist, if any
    pub async fn find_playlist(&self, user_id: Uuid) -> Result<Option<DbPlaylist>> {
        let playlist = sqlx::query_as::<_, DbPlaylist>(
            r#"
            SELECT id, user_id, title, created_at, updated_at
            FROM playlists
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(playlist)
    }

    /// Get the user's playlist, creating the default one on first use
    pub async fn get_or_create_playlist(&self, user_id: Uuid) -> Result<DbPlaylist> {
        if let Some(playlist) = self.find_playlist(user_id).await? {
            return Ok(playlist);
        }

        let playlist = sqlx::query_as::<_, DbPlaylist>(
            r#"
            INSERT INTO playlists (user_id, title)
            VALUES ($1, 'My Learning Path')
            RETURNING id, user_id, title, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(playlist)
    }

    /// Items of a playlist in presentation order
    pub async fn playlist_items(&self, playlist_id: Uuid) -> Result<Vec<DbPlaylistItem>> {
        let items = sqlx::query_as::<_, DbPlaylistItem>(
            r#"
            SELECT id, playlist_id, resource_id, position, status, created_at
            FROM playlist_items
            WHERE playlist_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(playlist_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Add a resource to a playlist at the next free position.
    ///
    /// Idempotent per (playlist, resource): re-adding returns the
    /// existing item untouched. Positions are assigned max + 1 and never
    /// renumbered.
    pub async fn add_playlist_item(
        &self,
        playlist_id: Uuid,
        resource_id: &str,
    ) -> Result<(DbPlaylistItem, bool)> {
        let existing = sqlx::query_as::<_, DbPlaylistItem>(
            r#"
            SELECT id, playlist_id, resource_id, position, status, created_at
            FROM playlist_items
            WHERE playlist_id = $1 AND resource_id = $2
            "#,
        )
        .bind(playlist_id)
        .bind(resource_id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(item) = existing {
            return Ok((item, true));
        }

        let row = sqlx::query(
            r#"
            SELECT COALESCE(MAX(position), 0) AS max_position
            FROM playlist_items
            WHERE playlist_id = $1
            "#,
        )
        .bind(playlist_id)
        .fetch_one(&self.pool)
        .await?;
        let next_position: i32 = row.get::<i32, _>("max_position") + 1;

        let item = sqlx::query_as::<_, DbPlaylistItem>(
            r#"
            INSERT INTO playlist_items (playlist_id, resource_id, position, status)
            VALUES ($1, $2, $3, 'TODO')
            RETURNING id, playlist_id, resource_id, position, status, created_at
            "#,
        )
        .bind(playlist_id)
        .bind(resource_id)
        .bind(next_position)
        .fetch_one(&self.pool)
        .await?;

        Ok((item, false))
    }

    /// Get playlist item by ID
    pub async fn get_playlist_item(&self, item_id: Uuid) -> Result<Option<DbPlaylistItem>> {
        let item = sqlx::query_as::<_, DbPlaylistItem>(
            r#"
            SELECT id, playlist_id, resource_id, position, status, created_at
            FROM playlist_items
            WHERE id = $1
            "#,
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Set a playlist item's completion status
    pub async fn update_item_status(
        &self,
        item_id: Uuid,
        status: ItemStatus,
    ) -> Result<Option<DbPlaylistItem>> {
        let item = sqlx::query_as::<_, DbPlaylistItem>(
            r#"
            UPDATE playlist_items
            SET status = $2
            WHERE id = $1
            RETURNING id, playlist_id, resource_id, position, status, created_at
            "#,
        )
        .bind(item_id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }
}
