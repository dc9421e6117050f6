//! Core types for the swipe-study system.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ParseEnumError;

/// Kind of learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceKind {
    Video,
    Repo,
}

impl Default for ResourceKind {
    fn default() -> Self {
        Self::Video
    }
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "VIDEO",
            Self::Repo => "REPO",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VIDEO" => Ok(Self::Video),
            "REPO" => Ok(Self::Repo),
            _ => Err(ParseEnumError::new("resource kind", s)),
        }
    }
}

/// Difficulty tier of a resource or user level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Beginner
    }
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "BEGINNER",
            Self::Intermediate => "INTERMEDIATE",
            Self::Advanced => "ADVANCED",
        }
    }

    /// Whether a user at this level should be shown a resource of the
    /// given tier. Beginners see only beginner material, intermediates
    /// also see beginner material, advanced users see everything.
    pub fn admits(&self, resource: Difficulty) -> bool {
        match self {
            Self::Beginner => resource == Self::Beginner,
            Self::Intermediate => resource != Self::Advanced,
            Self::Advanced => true,
        }
    }
}

impl FromStr for Difficulty {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BEGINNER" => Ok(Self::Beginner),
            "INTERMEDIATE" => Ok(Self::Intermediate),
            "ADVANCED" => Ok(Self::Advanced),
            _ => Err(ParseEnumError::new("difficulty", s)),
        }
    }
}

/// Completion status of a playlist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Todo,
    InProgress,
    Done,
}

impl Default for ItemStatus {
    fn default() -> Self {
        Self::Todo
    }
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }

    /// Next status in the TODO -> IN_PROGRESS -> DONE -> TODO cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Todo => Self::InProgress,
            Self::InProgress => Self::Done,
            Self::Done => Self::Todo,
        }
    }
}

impl FromStr for ItemStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseEnumError::new("item status", s)),
        }
    }
}

/// Recorded outcome of a swipe on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SwipeAction {
    Left,
    Right,
    Save,
}

impl SwipeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Save => "SAVE",
        }
    }
}

impl FromStr for SwipeAction {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LEFT" => Ok(Self::Left),
            "RIGHT" => Ok(Self::Right),
            "SAVE" => Ok(Self::Save),
            _ => Err(ParseEnumError::new("swipe action", s)),
        }
    }
}

impl From<crate::gesture::SwipeDirection> for SwipeAction {
    fn from(direction: crate::gesture::SwipeDirection) -> Self {
        match direction {
            crate::gesture::SwipeDirection::Left => Self::Left,
            crate::gesture::SwipeDirection::Right => Self::Right,
        }
    }
}

/// Kind-specific resource metadata.
///
/// Stored as free-form JSON; the variant is recognized by its required
/// field (`channel_name` for videos, `owner` for repositories).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceMetadata {
    Video(VideoMetadata),
    Repo(RepoMetadata),
}

impl ResourceMetadata {
    pub fn is_video(&self) -> bool {
        matches!(self, Self::Video(_))
    }

    pub fn is_repo(&self) -> bool {
        matches!(self, Self::Repo(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub channel_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoMetadata {
    pub owner: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An external learning unit (video or repository).
///
/// Created by the ingestion side; read-only input to the scheduler and
/// the deck engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub kind: ResourceKind,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Display duration, e.g. "12:34" for videos.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Estimated time investment in minutes; scheduling falls back to a
    /// default when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    pub quality_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub metadata: ResourceMetadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A resource's ordered, status-tracked membership in a user's playlist.
///
/// Holds only a weak reference to its resource: `resource` is hydrated
/// when the row still exists and left `None` otherwise, in which case the
/// item stays schedulable at the default duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub id: Uuid,
    pub playlist_id: Uuid,
    pub resource_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<Resource>,
    /// Position within the playlist. Assigned max-existing + 1 on insert
    /// and never renumbered; ascending order is the scheduling sequence.
    pub order: i32,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
}

/// A playlist item annotated with its computed week. Derived on every
/// schedule request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistItemWithWeek {
    #[serde(flatten)]
    pub item: PlaylistItem,
    pub week_number: u32,
}

/// Preferences collected by the onboarding flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingData {
    pub goals: Vec<String>,
    pub level: Difficulty,
    pub weekly_hours: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_cycles_forward() {
        assert_eq!(ItemStatus::Todo.next(), ItemStatus::InProgress);
        assert_eq!(ItemStatus::InProgress.next(), ItemStatus::Done);
        assert_eq!(ItemStatus::Done.next(), ItemStatus::Todo);
    }

    #[test]
    fn status_cycle_returns_to_start() {
        let status = ItemStatus::Todo;
        assert_eq!(status.next().next().next(), status);
    }

    #[test]
    fn difficulty_admission() {
        assert!(Difficulty::Beginner.admits(Difficulty::Beginner));
        assert!(!Difficulty::Beginner.admits(Difficulty::Intermediate));
        assert!(Difficulty::Intermediate.admits(Difficulty::Beginner));
        assert!(Difficulty::Intermediate.admits(Difficulty::Intermediate));
        assert!(!Difficulty::Intermediate.admits(Difficulty::Advanced));
        assert!(Difficulty::Advanced.admits(Difficulty::Beginner));
        assert!(Difficulty::Advanced.admits(Difficulty::Advanced));
    }

    #[test]
    fn enum_string_round_trips() {
        for kind in [ResourceKind::Video, ResourceKind::Repo] {
            assert_eq!(kind.as_str().parse::<ResourceKind>().unwrap(), kind);
        }
        for status in [ItemStatus::Todo, ItemStatus::InProgress, ItemStatus::Done] {
            assert_eq!(status.as_str().parse::<ItemStatus>().unwrap(), status);
        }
        for action in [SwipeAction::Left, SwipeAction::Right, SwipeAction::Save] {
            assert_eq!(action.as_str().parse::<SwipeAction>().unwrap(), action);
        }
        assert!("SIDEWAYS".parse::<SwipeAction>().is_err());
    }

    #[test]
    fn metadata_deserializes_by_shape() {
        let video: ResourceMetadata = serde_json::from_str(
            r#"{"channel_name": "ByteByteGo", "view_count": 2500000}"#,
        )
        .unwrap();
        assert!(video.is_video());

        let repo: ResourceMetadata = serde_json::from_str(
            r#"{"owner": "rust-lang", "stars": 48000, "language": "Rust"}"#,
        )
        .unwrap();
        assert!(repo.is_repo());
    }
}
