//! Core swipe-study library shared by the backend and any future client.
//!
//! Provides:
//! - Weekly schedule derivation for playlists (budget-bounded week buckets)
//! - Swipe deck state container with pre-fetch signalling
//! - Gesture classification (flick / drag / rubber-band-back)
//! - Shared types (Resource, PlaylistItem, ItemStatus, etc.)

pub mod deck;
pub mod error;
pub mod gesture;
pub mod schedule;
pub mod types;

pub use deck::{SwipeDeck, SwipeOutcome, DEFAULT_PREFETCH_THRESHOLD};
pub use error::{ParseEnumError, Result};
pub use gesture::{
    classify_release, CardMotion, CardPhase, GestureRelease, SwipeDecision, SwipeDirection,
    SwipePhysics,
};
pub use schedule::{assign_weeks, effective_budget, DEFAULT_ITEM_MINUTES, DEFAULT_WEEKLY_MINUTES};
pub use types::{
    Difficulty, ItemStatus, OnboardingData, PlaylistItem, PlaylistItemWithWeek, RepoMetadata,
    Resource, ResourceKind, ResourceMetadata, SwipeAction, VideoMetadata,
};
