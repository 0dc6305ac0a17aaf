//! Active-clue session tracking.
//!
//! The host raises sightings (clue text read, scroll item seen) and the
//! render side asks for the current hint. Sightings arrive on the game
//! event thread while hints are read from the render thread, so the active
//! slot sits behind a lock.

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

use crate::catalog::ClueCatalog;
use crate::clue::ClueRecord;
use crate::overlay::{build_hint, ClueHint};
use crate::state::{GameState, StateError};

/// Tracks which clue the player is currently working on.
pub struct ClueTracker {
    catalog: Arc<ClueCatalog>,
    active: RwLock<Option<ClueRecord>>,
}

impl ClueTracker {
    /// Create a tracker over the shared catalog.
    pub fn new(catalog: Arc<ClueCatalog>) -> Self {
        Self {
            catalog,
            active: RwLock::new(None),
        }
    }

    /// Handle clue or challenge text read from the screen.
    ///
    /// Returns true when a record matched and became the active clue. An
    /// unmatched sighting leaves the current clue in place.
    pub fn on_game_text(&self, state: &dyn GameState, observed: &str) -> Result<bool, StateError> {
        match self.catalog.find_by_text(state, observed)? {
            Some(record) => {
                info!("Active clue set from text, area: {}", record.area());
                *self.active.write() = Some(record.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Handle a clue scroll item appearing in the player's possession.
    ///
    /// Returns true when the item maps to a record.
    pub fn on_clue_item(&self, item_id: i32) -> bool {
        match self.catalog.find_by_item(item_id) {
            Some(record) => {
                info!("Active clue set from item id {}", item_id);
                *self.active.write() = Some(record.clone());
                true
            }
            None => false,
        }
    }

    /// Drop the active clue (completed, dropped, or replaced).
    pub fn clear(&self) {
        debug!("Clearing active clue");
        *self.active.write() = None;
    }

    /// Whether a clue is currently active.
    pub fn is_active(&self) -> bool {
        self.active.read().is_some()
    }

    /// Produce the hint for the active clue under the given session.
    pub fn active_hint(&self, state: &dyn GameState) -> Result<Option<ClueHint>, StateError> {
        match &*self.active.read() {
            Some(record) => Ok(Some(build_hint(record, state)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ids;
    use crate::overlay::PanelLine;
    use crate::state::SimulatedState;

    fn tracker() -> ClueTracker {
        ClueTracker::new(Arc::new(ClueCatalog::new()))
    }

    #[test]
    fn test_new_tracker_has_no_active_clue() {
        let tracker = tracker();
        let state = SimulatedState::new();

        assert!(!tracker.is_active());
        assert_eq!(tracker.active_hint(&state).unwrap(), None);
    }

    #[test]
    fn test_clue_item_sighting_sets_active_clue() {
        let tracker = tracker();
        let state = SimulatedState::new();

        assert!(tracker.on_clue_item(ids::item::MEDIUM_A_BAKER));
        assert!(tracker.is_active());

        let hint = tracker.active_hint(&state).unwrap().unwrap();
        assert_eq!(hint.lines[1], PanelLine::entry("NPC:", "Baraek"));
    }

    #[test]
    fn test_unknown_item_leaves_tracker_unchanged() {
        let tracker = tracker();

        assert!(!tracker.on_clue_item(-1));
        assert!(!tracker.is_active());

        // An unknown sighting must not displace an active clue either
        tracker.on_clue_item(ids::item::MEDIUM_A_BAKER);
        assert!(!tracker.on_clue_item(424242));
        assert!(tracker.is_active());
    }

    #[test]
    fn test_game_text_sighting_sets_active_clue() {
        let tracker = tracker();
        let state = SimulatedState::new();

        assert!(tracker.on_game_text(&state, "I EVEN").unwrap());
        let hint = tracker.active_hint(&state).unwrap().unwrap();
        assert_eq!(hint.lines[1], PanelLine::entry("NPC:", "Nieve"));

        assert!(!tracker.on_game_text(&state, "NOT A REAL CLUE").unwrap());
        assert!(tracker.is_active());
    }

    #[test]
    fn test_later_sighting_replaces_active_clue() {
        let tracker = tracker();
        let state = SimulatedState::new();

        tracker.on_clue_item(ids::item::MEDIUM_A_BAKER);
        tracker.on_clue_item(ids::item::MEDIUM_AHA_JAR);

        let hint = tracker.active_hint(&state).unwrap().unwrap();
        assert_eq!(hint.lines[1], PanelLine::entry("NPC:", "Jaraah"));
    }

    #[test]
    fn test_clear_drops_active_clue() {
        let tracker = tracker();
        let state = SimulatedState::new();

        tracker.on_clue_item(ids::item::MEDIUM_A_BAKER);
        tracker.clear();

        assert!(!tracker.is_active());
        assert_eq!(tracker.active_hint(&state).unwrap(), None);
    }

    #[test]
    fn test_active_hint_propagates_unreadable_session() {
        let tracker = tracker();
        let state = SimulatedState::new();

        tracker.on_clue_item(ids::item::MEDIUM_EEK_ZERO_OP);

        let mut offline = state.clone();
        offline.available = false;
        assert!(tracker.active_hint(&offline).is_err());
    }
}
