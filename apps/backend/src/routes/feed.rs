//! Feed and swipe endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::catalog;
use crate::AppState;

/// How many recommendations a feed batch carries.
const FEED_BATCH_SIZE: usize = 20;

/// Default page size for the paged resource listing.
const DEFAULT_PAGE_SIZE: i64 = 10;

/// GET /api/feed/:user_id
///
/// Recommended batch for the user's goals and level, minus anything
/// they already swiped on. Served resources are upserted so later
/// swipes and saves have a row to reference. Users without goals get an
/// empty batch (onboarding not done yet).
pub async fn batch(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<FeedBatchResponse>> {
    let user = state
        .db
        .get_user(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {user_id}")))?;

    if user.goals.is_empty() {
        return Ok(Json(FeedBatchResponse { resources: vec![] }));
    }

    let level: Difficulty = user.level.parse().unwrap_or_default();
    let swiped = state.db.swiped_resource_ids(user_id).await?;

    let mut resources = catalog::resources_for_goals(&user.goals, level);
    resources.retain(|r| !swiped.contains(&r.id));
    resources.truncate(FEED_BATCH_SIZE);

    state.db.upsert_resources(&resources).await?;

    Ok(Json(FeedBatchResponse { resources }))
}

/// GET /api/resources
///
/// Paged quality-ranked listing. Fetches one row past the page to tell
/// whether more remain.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ResourceListQuery>,
) -> Result<Json<ResourceListResponse>> {
    let skip = query.skip.unwrap_or(0).max(0);
    let take = query.take.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, 100);
    let exclude: Vec<String> = query
        .exclude
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect();

    let rows = state
        .db
        .list_resources(skip, take + 1, &exclude, query.user_id)
        .await?;

    let has_more = rows.len() as i64 > take;
    let resources = rows
        .iter()
        .take(take as usize)
        .map(|r| r.to_api_resource())
        .collect();

    Ok(Json(ResourceListResponse {
        resources,
        has_more,
    }))
}

/// POST /api/swipes
/// Records a swipe, upserting by (user, resource)
pub async fn record_swipe(
    State(state): State<AppState>,
    Json(payload): Json<RecordSwipeRequest>,
) -> Result<Json<RecordSwipeResponse>> {
    state
        .db
        .get_user(payload.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {}", payload.user_id)))?;

    state
        .db
        .get_resource(&payload.resource_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Resource {}", payload.resource_id)))?;

    let swipe = state
        .db
        .upsert_swipe(payload.user_id, &payload.resource_id, payload.action)
        .await?;

    tracing::debug!(
        "Recorded {} swipe on {} by {}",
        payload.action.as_str(),
        payload.resource_id,
        payload.user_id
    );

    Ok(Json(RecordSwipeResponse { swipe_id: swipe.id }))
}

/// GET /api/users/:user_id/saved
/// Resources the user saved, newest first
pub async fn saved(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<SavedResourcesResponse>> {
    let resources = state
        .db
        .saved_resources(user_id)
        .await?
        .iter()
        .map(|r| r.to_api_resource())
        .collect();

    Ok(Json(SavedResourcesResponse { resources }))
}
