//! Swipe deck state container.
//!
//! Owns the candidate pool and a strict forward-only cursor. All
//! mutation happens in response to discrete host events (gesture
//! commits, fetch completions), delivered one at a time; the deck itself
//! performs no I/O and cannot fail; collaborator outcomes are reflected
//! through the loading/error/has-more flags the host sets.

use crate::gesture::SwipeDirection;
use crate::types::Resource;

/// Remaining-card count below which a pre-fetch is requested.
pub const DEFAULT_PREFETCH_THRESHOLD: usize = 3;

/// A committed swipe: the resource that was on top and the direction it
/// went. The deck records nothing else; persisting the swipe is the
/// host's job.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeOutcome {
    pub resource: Resource,
    pub direction: SwipeDirection,
}

/// Ordered pool of resources presented one at a time for swipe triage.
#[derive(Debug, Clone)]
pub struct SwipeDeck {
    resources: Vec<Resource>,
    active_index: usize,
    is_loading: bool,
    has_more: bool,
    error: Option<String>,
    prefetch_threshold: usize,
}

impl Default for SwipeDeck {
    fn default() -> Self {
        Self {
            resources: Vec::new(),
            active_index: 0,
            is_loading: false,
            has_more: true,
            error: None,
            prefetch_threshold: DEFAULT_PREFETCH_THRESHOLD,
        }
    }
}

impl SwipeDeck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deck with a non-default pre-fetch threshold.
    pub fn with_prefetch_threshold(threshold: usize) -> Self {
        Self {
            prefetch_threshold: threshold,
            ..Self::default()
        }
    }

    /// Replace the pool with a fresh batch and rewind the cursor.
    pub fn set_resources(&mut self, resources: Vec<Resource>) {
        self.resources = resources;
        self.active_index = 0;
    }

    /// Append a pre-fetched batch without disturbing the cursor.
    pub fn append_resources(&mut self, resources: Vec<Resource>) {
        self.resources.extend(resources);
    }

    /// Advance past the active card in the given direction.
    ///
    /// Returns the swiped resource so the caller can act on it (record
    /// the swipe, save to playlist). The skipped card never resurfaces.
    /// Advancing an exhausted deck is a no-op returning `None`.
    pub fn advance(&mut self, direction: SwipeDirection) -> Option<SwipeOutcome> {
        let resource = self.resources.get(self.active_index)?.clone();
        self.active_index += 1;
        Some(SwipeOutcome { resource, direction })
    }

    /// The card currently on top, or `None` once the deck is exhausted.
    /// An empty current card is the deck-empty end state, not an error.
    pub fn current_resource(&self) -> Option<&Resource> {
        self.resources.get(self.active_index)
    }

    pub fn remaining_count(&self) -> usize {
        self.resources.len() - self.active_index
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Whether the host should request more candidates now: the pool is
    /// running low, the collaborator has more, and no fetch is already
    /// in flight.
    pub fn should_pre_fetch(&self) -> bool {
        self.remaining_count() < self.prefetch_threshold && self.has_more && !self.is_loading
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn set_has_more(&mut self, has_more: bool) {
        self.has_more = has_more;
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Clear the pool, cursor and flags back to the fresh-deck state.
    pub fn reset(&mut self) {
        let threshold = self.prefetch_threshold;
        *self = Self {
            prefetch_threshold: threshold,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RepoMetadata, ResourceKind, ResourceMetadata};
    use chrono::Utc;

    fn resource(id: &str) -> Resource {
        Resource {
            id: id.to_string(),
            title: format!("Resource {id}"),
            kind: ResourceKind::Repo,
            url: format!("https://github.com/test/{id}"),
            thumbnail_url: None,
            duration: None,
            duration_minutes: Some(30),
            quality_score: 9.0,
            difficulty: None,
            tags: vec![],
            metadata: ResourceMetadata::Repo(RepoMetadata {
                owner: "test".to_string(),
                stars: None,
                language: None,
                description: None,
            }),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn batch(ids: &[&str]) -> Vec<Resource> {
        ids.iter().map(|id| resource(id)).collect()
    }

    #[test]
    fn fresh_deck_is_empty_but_expects_more() {
        let deck = SwipeDeck::new();
        assert_eq!(deck.current_resource(), None);
        assert_eq!(deck.remaining_count(), 0);
        assert!(deck.has_more());
        assert!(!deck.is_loading());
        assert_eq!(deck.error(), None);
    }

    #[test]
    fn set_resources_rewinds_the_cursor() {
        let mut deck = SwipeDeck::new();
        deck.set_resources(batch(&["a", "b"]));
        deck.advance(SwipeDirection::Left);
        assert_eq!(deck.current_resource().unwrap().id, "b");

        deck.set_resources(batch(&["c", "d", "e"]));
        assert_eq!(deck.current_resource().unwrap().id, "c");
        assert_eq!(deck.remaining_count(), 3);
    }

    #[test]
    fn append_keeps_the_cursor_in_place() {
        let mut deck = SwipeDeck::new();
        deck.set_resources(batch(&["a", "b"]));
        deck.advance(SwipeDirection::Right);
        deck.append_resources(batch(&["c", "d"]));
        assert_eq!(deck.current_resource().unwrap().id, "b");
        assert_eq!(deck.remaining_count(), 3);
    }

    #[test]
    fn advance_reports_the_swiped_resource() {
        let mut deck = SwipeDeck::new();
        deck.set_resources(batch(&["a", "b"]));

        let outcome = deck.advance(SwipeDirection::Right).unwrap();
        assert_eq!(outcome.resource.id, "a");
        assert_eq!(outcome.direction, SwipeDirection::Right);
        assert_eq!(deck.current_resource().unwrap().id, "b");
    }

    #[test]
    fn cursor_never_passes_the_end() {
        let mut deck = SwipeDeck::new();
        deck.set_resources(batch(&["a"]));

        assert!(deck.advance(SwipeDirection::Left).is_some());
        assert_eq!(deck.current_resource(), None);
        assert_eq!(deck.remaining_count(), 0);

        // Past-the-end advances are no-ops.
        assert!(deck.advance(SwipeDirection::Left).is_none());
        assert!(deck.advance(SwipeDirection::Right).is_none());
        assert_eq!(deck.remaining_count(), 0);
    }

    #[test]
    fn prefetch_fires_when_running_low() {
        let mut deck = SwipeDeck::new();
        deck.set_resources(batch(&[
            "a", "b", "c", "d", "e", "f", "g", "h", "i", "j",
        ]));
        for _ in 0..8 {
            deck.advance(SwipeDirection::Left);
        }
        assert_eq!(deck.remaining_count(), 2);
        assert!(deck.should_pre_fetch());
    }

    #[test]
    fn prefetch_suppressed_while_loading_or_exhausted() {
        let mut deck = SwipeDeck::new();
        deck.set_resources(batch(&["a", "b"]));
        assert!(deck.should_pre_fetch());

        deck.set_loading(true);
        assert!(!deck.should_pre_fetch());

        deck.set_loading(false);
        deck.set_has_more(false);
        assert!(!deck.should_pre_fetch());
    }

    #[test]
    fn prefetch_not_needed_with_a_full_pool() {
        let mut deck = SwipeDeck::new();
        deck.set_resources(batch(&["a", "b", "c", "d"]));
        assert!(!deck.should_pre_fetch());
    }

    #[test]
    fn custom_threshold_is_honored() {
        let mut deck = SwipeDeck::with_prefetch_threshold(5);
        deck.set_resources(batch(&["a", "b", "c", "d"]));
        assert!(deck.should_pre_fetch());
    }

    #[test]
    fn reset_restores_the_fresh_state() {
        let mut deck = SwipeDeck::with_prefetch_threshold(5);
        deck.set_resources(batch(&["a", "b"]));
        deck.advance(SwipeDirection::Right);
        deck.set_loading(true);
        deck.set_has_more(false);
        deck.set_error(Some("fetch failed".to_string()));

        deck.reset();
        assert!(deck.is_empty());
        assert_eq!(deck.remaining_count(), 0);
        assert!(!deck.is_loading());
        assert!(deck.has_more());
        assert_eq!(deck.error(), None);
        // Threshold is configuration, not state; it survives a reset.
        deck.set_resources(batch(&["a", "b", "c", "d"]));
        assert!(deck.should_pre_fetch());
    }

    #[test]
    fn error_flag_round_trips() {
        let mut deck = SwipeDeck::new();
        deck.set_error(Some("network unreachable".to_string()));
        assert_eq!(deck.error(), Some("network unreachable"));
        deck.set_error(None);
        assert_eq!(deck.error(), None);
    }
}
