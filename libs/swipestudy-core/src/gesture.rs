//! Gesture classification for the swipe deck.
//!
//! A completed drag is classified from its release offset and velocity
//! alone; the derived presentation values (rotation, glow) are separate
//! continuous functions of the offset and never feed back into the
//! decision.

use serde::{Deserialize, Serialize};

/// Maximum card rotation in degrees at full deflection.
pub const MAX_ROTATION_DEGREES: f64 = 15.0;

/// Tunable physics for swipe interpretation and card presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipePhysics {
    /// Spring tension for the return animation; higher snaps back faster.
    pub stiffness: f64,
    /// Spring resistance; higher slows the return.
    pub damping: f64,
    /// Minimum horizontal velocity (px/s) for a flick commit.
    pub velocity_threshold: f64,
    /// Minimum horizontal offset (px) for a drag commit.
    pub distance_threshold: f64,
    /// Rotation in degrees per horizontal pixel, clamped to ±15°.
    pub rotation_factor: f64,
    /// Offset (px) at which the directional glow starts ramping.
    pub glow_threshold: f64,
}

impl Default for SwipePhysics {
    fn default() -> Self {
        Self {
            stiffness: 300.0,
            damping: 25.0,
            velocity_threshold: 500.0,
            distance_threshold: 100.0,
            rotation_factor: 0.1,
            glow_threshold: 50.0,
        }
    }
}

/// Pointer state captured at release.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GestureRelease {
    pub offset_x: f64,
    pub offset_y: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
}

/// Horizontal swipe direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Outcome of classifying a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
    /// Decisive swipe; the card flies off and the cursor advances.
    Commit(SwipeDirection),
    /// Neither threshold met; the card springs back to center.
    Cancel,
}

/// Classify a completed drag.
///
/// A commit is either a flick (horizontal velocity past the threshold)
/// or a drag past the distance threshold; the direction follows the sign
/// of the horizontal offset. Everything else cancels.
pub fn classify_release(release: &GestureRelease, physics: &SwipePhysics) -> SwipeDecision {
    let is_flick = release.velocity_x.abs() > physics.velocity_threshold;
    let is_drag = release.offset_x.abs() > physics.distance_threshold;

    if is_flick || is_drag {
        let direction = if release.offset_x > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        };
        SwipeDecision::Commit(direction)
    } else {
        SwipeDecision::Cancel
    }
}

/// Card rotation in degrees for a horizontal offset, clamped to ±15°.
pub fn rotation_degrees(offset_x: f64, physics: &SwipePhysics) -> f64 {
    (offset_x * physics.rotation_factor).clamp(-MAX_ROTATION_DEGREES, MAX_ROTATION_DEGREES)
}

/// Directional glow opacities `(left, right)` for a horizontal offset.
///
/// Ramps from 0 at rest to 0.3 at the glow threshold and 0.8 at the
/// distance threshold, then stays capped.
pub fn glow_opacities(offset_x: f64, physics: &SwipePhysics) -> (f64, f64) {
    let magnitude = offset_x.abs();
    let opacity = if magnitude <= physics.glow_threshold {
        0.3 * magnitude / physics.glow_threshold.max(f64::EPSILON)
    } else if magnitude <= physics.distance_threshold {
        let span = (physics.distance_threshold - physics.glow_threshold).max(f64::EPSILON);
        0.3 + 0.5 * (magnitude - physics.glow_threshold) / span
    } else {
        0.8
    };

    if offset_x >= 0.0 {
        (0.0, opacity)
    } else {
        (opacity, 0.0)
    }
}

/// Presentation phase of the active card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPhase {
    /// Centered, awaiting a gesture.
    #[default]
    Resting,
    /// Pointer down, position tracked.
    Dragging,
    /// Committed swipe animating off-screen.
    Committing(SwipeDirection),
    /// Cancelled swipe springing back to center.
    Returning,
}

/// Per-card gesture state machine.
///
/// Resting -> Dragging -> (Committing | Returning) -> Resting. Invalid
/// transitions are no-ops so out-of-order pointer events cannot corrupt
/// the phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardMotion {
    phase: CardPhase,
}

impl CardMotion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CardPhase {
        self.phase
    }

    /// Pointer down. Only a resting or returning card can be grabbed.
    pub fn begin_drag(&mut self) {
        if matches!(self.phase, CardPhase::Resting | CardPhase::Returning) {
            self.phase = CardPhase::Dragging;
        }
    }

    /// Pointer up: classify and transition. Releases outside a drag are
    /// ignored and report a cancel.
    pub fn release(&mut self, release: &GestureRelease, physics: &SwipePhysics) -> SwipeDecision {
        if self.phase != CardPhase::Dragging {
            return SwipeDecision::Cancel;
        }
        let decision = classify_release(release, physics);
        self.phase = match decision {
            SwipeDecision::Commit(direction) => CardPhase::Committing(direction),
            SwipeDecision::Cancel => CardPhase::Returning,
        };
        decision
    }

    /// Animation finished. A committing card yields its direction for
    /// the host to feed to the deck cursor, and the machine rests for
    /// the next card; a returning card just rests.
    pub fn settle(&mut self) -> Option<SwipeDirection> {
        match self.phase {
            CardPhase::Committing(direction) => {
                self.phase = CardPhase::Resting;
                Some(direction)
            }
            CardPhase::Returning => {
                self.phase = CardPhase::Resting;
                None
            }
            CardPhase::Resting | CardPhase::Dragging => None,
        }
    }
}
