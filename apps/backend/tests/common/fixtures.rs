//! Test fixtures and factory functions for creating test data.

use serde_json::json;
use uuid::Uuid;

/// Generate a unique test email to avoid collisions between runs.
pub fn unique_email() -> String {
    format!("test_{}@swipestudy.test", &Uuid::new_v4().to_string()[..8])
}

/// Create a user register request body.
pub fn register_request(email: &str) -> serde_json::Value {
    json!({ "email": email })
}

/// Create an onboarding request body.
pub fn onboarding_request(goals: &[&str], level: &str, weekly_hours: i32) -> serde_json::Value {
    json!({
        "goals": goals,
        "level": level,
        "weekly_hours": weekly_hours
    })
}

/// Create a weekly hours update request body.
pub fn weekly_hours_request(weekly_hours: i32) -> serde_json::Value {
    json!({ "weekly_hours": weekly_hours })
}

/// Create a record swipe request body.
pub fn swipe_request(user_id: Uuid, resource_id: &str, action: &str) -> serde_json::Value {
    json!({
        "user_id": user_id,
        "resource_id": resource_id,
        "action": action
    })
}

/// Create an add playlist item request body.
pub fn add_item_request(resource_id: &str) -> serde_json::Value {
    json!({ "resource_id": resource_id })
}

/// Create an update item status request body.
pub fn status_request(status: &str) -> serde_json::Value {
    json!({ "status": status })
}
