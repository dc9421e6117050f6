//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from swipestudy-core
pub use swipestudy_core::types::{
    Difficulty, ItemStatus, OnboardingData, PlaylistItem, PlaylistItemWithWeek, RepoMetadata,
    Resource, ResourceKind, ResourceMetadata, SwipeAction, VideoMetadata,
};

// === Database Entity Types ===

/// User row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub email: String,
    pub goals: Vec<String>,
    pub level: String,
    pub weekly_hours: i32,
    pub onboarding_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbUser {
    /// Convert to API user type
    pub fn to_api_user(&self) -> UserResponse {
        UserResponse {
            id: self.id,
            email: self.email.clone(),
            goals: self.goals.clone(),
            level: self.level.parse().unwrap_or_default(),
            weekly_hours: self.weekly_hours,
            onboarding_completed: self.onboarding_completed,
            created_at: self.created_at,
        }
    }
}

/// Resource row; `metadata` is kind-specific JSON
#[derive(Debug, Clone, FromRow)]
pub struct DbResource {
    pub id: String,
    pub title: String,
    pub kind: String,
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub duration: Option<String>,
    pub duration_minutes: Option<i32>,
    pub quality_score: f64,
    pub difficulty: Option<String>,
    pub tags: Vec<String>,
    pub metadata: Json<ResourceMetadata>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DbResource {
    /// Convert to core Resource type
    pub fn to_api_resource(&self) -> Resource {
        Resource {
            id: self.id.clone(),
            title: self.title.clone(),
            kind: self.kind.parse().unwrap_or_default(),
            url: self.url.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            duration: self.duration.clone(),
            duration_minutes: self.duration_minutes.map(|m| m as u32),
            quality_score: self.quality_score,
            difficulty: self.difficulty.as_ref().and_then(|d| d.parse().ok()),
            tags: self.tags.clone(),
            metadata: self.metadata.0.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Create from a core Resource (for upserts)
    pub fn from_api_resource(resource: &Resource) -> Self {
        Self {
            id: resource.id.clone(),
            title: resource.title.clone(),
            kind: resource.kind.as_str().to_string(),
            url: resource.url.clone(),
            thumbnail_url: resource.thumbnail_url.clone(),
            duration: resource.duration.clone(),
            duration_minutes: resource.duration_minutes.map(|m| m as i32),
            quality_score: resource.quality_score,
            difficulty: resource.difficulty.map(|d| d.as_str().to_string()),
            tags: resource.tags.clone(),
            metadata: Json(resource.metadata.clone()),
            created_at: resource.created_at,
            updated_at: resource.updated_at,
        }
    }
}

/// Swipe record; one row per (user, resource), action overwritten on
/// repeat swipes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSwipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub resource_id: String,
    pub action: String,
    pub created_at: DateTime<Utc>,
}

/// Playlist row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPlaylist {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Playlist item row. The `position` column carries the core `order`
/// field (`order` is reserved in SQL).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPlaylistItem {
    pub id: Uuid,
    pub playlist_id: Uuid,
    pub resource_id: String,
    pub position: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl DbPlaylistItem {
    /// Convert to core PlaylistItem, hydrating the resource when its row
    /// still exists
    pub fn to_api_item(&self, resource: Option<Resource>) -> PlaylistItem {
        PlaylistItem {
            id: self.id,
            playlist_id: self.playlist_id,
            resource_id: self.resource_id.clone(),
            resource,
            order: self.position,
            status: self.status.parse().unwrap_or_default(),
            created_at: self.created_at,
        }
    }
}

// === API Request/Response Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub goals: Vec<String>,
    pub level: Difficulty,
    pub weekly_hours: i32,
    pub onboarding_completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateWeeklyHoursRequest {
    pub weekly_hours: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedBatchResponse {
    pub resources: Vec<Resource>,
}

#[derive(Debug, Deserialize)]
pub struct ResourceListQuery {
    pub skip: Option<i64>,
    pub take: Option<i64>,
    /// Comma-separated resource ids to exclude
    pub exclude: Option<String>,
    /// When set, resources this user already swiped on are excluded
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceListResponse {
    pub resources: Vec<Resource>,
    pub has_more: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordSwipeRequest {
    pub user_id: Uuid,
    pub resource_id: String,
    pub action: SwipeAction,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordSwipeResponse {
    pub swipe_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavedResourcesResponse {
    pub resources: Vec<Resource>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub id: Uuid,
    pub title: String,
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddPlaylistItemRequest {
    pub resource_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddPlaylistItemResponse {
    pub item_id: Uuid,
    pub already_present: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateItemStatusRequest {
    pub status: ItemStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlaylistItemResponse {
    pub item: PlaylistItem,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    /// Overrides the budget derived from the user's weekly hours
    pub weekly_minutes: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub weekly_minutes: f64,
    pub items: Vec<PlaylistItemWithWeek>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resource() -> Resource {
        Resource {
            id: "rust-003".to_string(),
            title: "rustlings".to_string(),
            kind: ResourceKind::Repo,
            url: "https://github.com/rust-lang/rustlings".to_string(),
            thumbnail_url: None,
            duration: None,
            duration_minutes: Some(180),
            quality_score: 9.6,
            difficulty: Some(Difficulty::Beginner),
            tags: vec!["Rust".to_string()],
            metadata: ResourceMetadata::Repo(RepoMetadata {
                owner: "rust-lang".to_string(),
                stars: Some(48000),
                language: Some("Rust".to_string()),
                description: None,
            }),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn resource_round_trips_through_row() {
        let resource = sample_resource();
        let row = DbResource::from_api_resource(&resource);
        assert_eq!(row.to_api_resource(), resource);
    }

    #[test]
    fn unknown_stored_strings_fall_back_to_defaults() {
        let mut row = DbResource::from_api_resource(&sample_resource());
        row.kind = "PODCAST".to_string();
        row.difficulty = Some("EXPERT".to_string());
        let api = row.to_api_resource();
        assert_eq!(api.kind, ResourceKind::Video);
        assert_eq!(api.difficulty, None);
    }

    #[test]
    fn item_row_maps_position_to_order() {
        let row = DbPlaylistItem {
            id: Uuid::new_v4(),
            playlist_id: Uuid::new_v4(),
            resource_id: "rust-003".to_string(),
            position: 4,
            status: "IN_PROGRESS".to_string(),
            created_at: Utc::now(),
        };
        let item = row.to_api_item(None);
        assert_eq!(item.order, 4);
        assert_eq!(item.status, ItemStatus::InProgress);
        assert!(item.resource.is_none());

        let video = Resource {
            metadata: ResourceMetadata::Video(VideoMetadata {
                channel_name: "ByteByteGo".to_string(),
                view_count: None,
                description: None,
            }),
            ..sample_resource()
        };
        assert!(row.to_api_item(Some(video)).resource.is_some());
    }
}
