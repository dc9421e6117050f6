//! Weekly schedule derivation for playlists.
//!
//! Partitions an ordered playlist into week buckets so that no week's
//! total estimated minutes exceeds the weekly budget, except when a
//! single item alone is larger than the budget (that item overflows the
//! week it opens rather than spawning empty weeks).

use crate::types::{PlaylistItem, PlaylistItemWithWeek};

/// Budget substituted when the caller supplies a non-positive or
/// non-finite weekly budget.
pub const DEFAULT_WEEKLY_MINUTES: f64 = 60.0;

/// Estimated minutes for an item whose resource is missing or carries no
/// duration.
pub const DEFAULT_ITEM_MINUTES: f64 = 15.0;

/// The budget actually used for a requested weekly budget: the request
/// itself when positive and finite, the default otherwise.
pub fn effective_budget(weekly_minutes: f64) -> f64 {
    if weekly_minutes.is_finite() && weekly_minutes > 0.0 {
        weekly_minutes
    } else {
        DEFAULT_WEEKLY_MINUTES
    }
}

/// Annotate each playlist item with its 1-based week number.
///
/// Items are processed in the order given (callers pass them sorted by
/// `order` ascending). A new week starts when the running total strictly
/// exceeds the budget, unless the current item is the first assigned to
/// the week in progress. Pure function of its inputs: identical inputs
/// always produce identical output, order is preserved and nothing is
/// dropped, so it is safe to recompute on every budget change.
pub fn assign_weeks(items: &[PlaylistItem], weekly_minutes: f64) -> Vec<PlaylistItemWithWeek> {
    let budget = effective_budget(weekly_minutes);

    let mut week: u32 = 1;
    let mut running = 0.0;
    let mut items_in_week: usize = 0;
    let mut scheduled = Vec::with_capacity(items.len());

    for item in items {
        let duration = item_minutes(item);
        running += duration;

        if running > budget && items_in_week > 0 {
            week += 1;
            running = duration;
            items_in_week = 0;
        }
        items_in_week += 1;

        scheduled.push(PlaylistItemWithWeek {
            item: item.clone(),
            week_number: week,
        });
    }

    scheduled
}

/// Estimated minutes for a single item.
pub fn item_minutes(item: &PlaylistItem) -> f64 {
    item.resource
        .as_ref()
        .and_then(|r| r.duration_minutes)
        .map(f64::from)
        .unwrap_or(DEFAULT_ITEM_MINUTES)
}
