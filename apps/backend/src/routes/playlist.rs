//! Playlist and schedule endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::db::Database;
use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;
use swipestudy_core::schedule::{assign_weeks, effective_budget};

/// Hydrate item rows with their resources. Items whose resource row is
/// gone keep `resource: None` and stay schedulable.
async fn hydrate_items(db: &Database, rows: Vec<DbPlaylistItem>) -> Result<Vec<PlaylistItem>> {
    let ids: Vec<String> = rows.iter().map(|r| r.resource_id.clone()).collect();
    let resources = db.get_resources_by_ids(&ids).await?;

    Ok(rows
        .iter()
        .map(|row| {
            let resource = resources
                .iter()
                .find(|r| r.id == row.resource_id)
                .map(|r| r.to_api_resource());
            row.to_api_item(resource)
        })
        .collect())
}

/// GET /api/playlist/:user_id
/// The user's playlist with ordered, hydrated items
pub async fn get(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<PlaylistResponse>> {
    let playlist = state
        .db
        .find_playlist(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Playlist for user {user_id}")))?;

    let rows = state.db.playlist_items(playlist.id).await?;
    let items = hydrate_items(&state.db, rows).await?;

    Ok(Json(PlaylistResponse {
        id: playlist.id,
        title: playlist.title,
        items,
    }))
}

/// POST /api/playlist/:user_id/items
///
/// Adds a resource to the user's playlist, creating the default
/// playlist on first use. Idempotent per resource.
pub async fn add_item(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<AddPlaylistItemRequest>,
) -> Result<Json<AddPlaylistItemResponse>> {
    state
        .db
        .get_user(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {user_id}")))?;

    state
        .db
        .get_resource(&payload.resource_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Resource {}", payload.resource_id)))?;

    let playlist = state.db.get_or_create_playlist(user_id).await?;
    let (item, already_present) = state
        .db
        .add_playlist_item(playlist.id, &payload.resource_id)
        .await?;

    if !already_present {
        tracing::info!(
            "Added {} to playlist {} at position {}",
            item.resource_id,
            playlist.id,
            item.position
        );
    }

    Ok(Json(AddPlaylistItemResponse {
        item_id: item.id,
        already_present,
    }))
}

/// PUT /api/playlist/items/:item_id/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
    Json(payload): Json<UpdateItemStatusRequest>,
) -> Result<Json<PlaylistItemResponse>> {
    let row = state
        .db
        .update_item_status(item_id, payload.status)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Playlist item {item_id}")))?;

    let item = hydrate_items(&state.db, vec![row]).await?.remove(0);

    Ok(Json(PlaylistItemResponse { item }))
}

/// POST /api/playlist/items/:item_id/cycle
/// Advances the item one step around TODO -> IN_PROGRESS -> DONE -> TODO
pub async fn cycle_status(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
) -> Result<Json<PlaylistItemResponse>> {
    let current = state
        .db
        .get_playlist_item(item_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Playlist item {item_id}")))?;

    let next = current.status.parse::<ItemStatus>().unwrap_or_default().next();
    let row = state
        .db
        .update_item_status(item_id, next)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Playlist item {item_id}")))?;

    let item = hydrate_items(&state.db, vec![row]).await?.remove(0);

    Ok(Json(PlaylistItemResponse { item }))
}

/// GET /api/playlist/:user_id/schedule
///
/// The playlist partitioned into week buckets. The budget comes from
/// `weekly_minutes` when given, otherwise from the user's weekly hours
/// setting; recomputed from scratch on every request so budget changes
/// take effect immediately.
pub async fn schedule(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<ScheduleResponse>> {
    let user = state
        .db
        .get_user(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {user_id}")))?;

    let requested = query
        .weekly_minutes
        .unwrap_or_else(|| f64::from(user.weekly_hours) * 60.0);
    let weekly_minutes = effective_budget(requested);

    let items = match state.db.find_playlist(user_id).await? {
        Some(playlist) => {
            let rows = state.db.playlist_items(playlist.id).await?;
            hydrate_items(&state.db, rows).await?
        }
        // No playlist yet: an empty schedule, not an error.
        None => vec![],
    };

    Ok(Json(ScheduleResponse {
        weekly_minutes,
        items: assign_weeks(&items, weekly_minutes),
    }))
}
