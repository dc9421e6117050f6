//! User registration and onboarding endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/users/register
/// Gets the user for this email, creating a fresh one if needed
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserRequest>,
) -> Result<Json<UserResponse>> {
    if payload.email.trim().is_empty() {
        return Err(ApiError::BadRequest("email must not be empty".to_string()));
    }

    let user = state.db.get_or_create_user(payload.email.trim()).await?;

    tracing::info!("Registered user: {}", user.id);

    Ok(Json(user.to_api_user()))
}

/// GET /api/users/:id
pub async fn get(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>> {
    let user = state
        .db
        .get_user(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {user_id}")))?;

    Ok(Json(user.to_api_user()))
}

/// POST /api/users/:id/onboarding
/// Stores goals, level and weekly hours, marking onboarding complete
pub async fn complete_onboarding(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<OnboardingData>,
) -> Result<Json<UserResponse>> {
    if payload.goals.is_empty() {
        return Err(ApiError::BadRequest(
            "at least one goal is required".to_string(),
        ));
    }

    let user = state
        .db
        .complete_onboarding(user_id, &payload)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {user_id}")))?;

    tracing::info!("Completed onboarding for user: {}", user.id);

    Ok(Json(user.to_api_user()))
}

/// PUT /api/users/:id/weekly-hours
/// Updates the weekly time budget driving the schedule view
pub async fn update_weekly_hours(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UpdateWeeklyHoursRequest>,
) -> Result<Json<UserResponse>> {
    let user = state
        .db
        .update_weekly_hours(user_id, payload.weekly_hours)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("User {user_id}")))?;

    Ok(Json(user.to_api_user()))
}
