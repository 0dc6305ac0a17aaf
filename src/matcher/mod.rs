//! Observed-text matching.
//!
//! Clue text arrives from the game as a full sentence. Each record's text
//! can appear on screen three ways: bare, or behind one of the two lead-in
//! sentences. The NPC's follow-up question is checked too, so an open
//! challenge re-identifies the active clue.

use tracing::debug;

use crate::clue::ClueRecord;
use crate::state::{GameState, StateError};

/// Lead-in sentence on standard anagram clues.
pub const LEAD_IN_STANDARD: &str = "This anagram reveals who to speak to next: ";

/// Lead-in sentence on beginner anagram clues.
pub const LEAD_IN_BEGINNER: &str = "The anagram reveals who to speak to next: ";

/// Find the first record whose surface forms match `observed`.
///
/// Comparison is case-insensitive and exact over the whole string; there
/// is no substring or fuzzy matching. Records are scanned in catalog order
/// and the first hit wins. A resolution failure inside the scan aborts it
/// and propagates; records are never silently skipped.
pub fn find_by_text<'a>(
    records: &'a [ClueRecord],
    state: &dyn GameState,
    observed: &str,
) -> Result<Option<&'a ClueRecord>, StateError> {
    for record in records {
        if matches_record(record, state, observed)? {
            debug!("Observed text matched clue for area: {}", record.area());
            return Ok(Some(record));
        }
    }
    debug!("Observed text matched no clue record");
    Ok(None)
}

fn matches_record(
    record: &ClueRecord,
    state: &dyn GameState,
    observed: &str,
) -> Result<bool, StateError> {
    let text = record.resolve_text(state)?;
    Ok(observed.eq_ignore_ascii_case(text)
        || observed.eq_ignore_ascii_case(&format!("{LEAD_IN_STANDARD}{text}"))
        || observed.eq_ignore_ascii_case(&format!("{LEAD_IN_BEGINNER}{text}"))
        || record
            .question()
            .map(|q| observed.eq_ignore_ascii_case(q))
            .unwrap_or(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ids, ClueCatalog};
    use crate::state::SimulatedState;

    #[test]
    fn test_matches_standard_lead_in() {
        let catalog = ClueCatalog::new();
        let state = SimulatedState::new();

        let observed = format!("{LEAD_IN_STANDARD}A BAKER");
        let record = catalog.find_by_text(&state, &observed).unwrap().unwrap();
        assert_eq!(record.item_id(), Some(ids::item::MEDIUM_A_BAKER));
    }

    #[test]
    fn test_matches_beginner_lead_in() {
        let catalog = ClueCatalog::new();
        let state = SimulatedState::new();

        let observed = format!("{LEAD_IN_BEGINNER}AN EARL");
        let record = catalog.find_by_text(&state, &observed).unwrap().unwrap();
        assert_eq!(record.resolve_npc(&state), Ok("Ranael"));
    }

    #[test]
    fn test_matches_bare_text() {
        let catalog = ClueCatalog::new();
        let state = SimulatedState::new();

        let record = catalog.find_by_text(&state, "CARPET AHOY").unwrap().unwrap();
        assert_eq!(record.resolve_npc(&state), Ok("Apothecary"));
    }

    #[test]
    fn test_matches_follow_up_question() {
        let catalog = ClueCatalog::new();
        let state = SimulatedState::new();

        let record = catalog
            .find_by_text(&state, "How many stalls are there in Varrock Square?")
            .unwrap()
            .unwrap();
        assert_eq!(record.item_id(), Some(ids::item::MEDIUM_A_BAKER));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let catalog = ClueCatalog::new();
        let state = SimulatedState::new();

        let observed = "this ANAGRAM reveals WHO to speak to next: a baker";
        let record = catalog.find_by_text(&state, observed).unwrap().unwrap();
        assert_eq!(record.item_id(), Some(ids::item::MEDIUM_A_BAKER));
    }

    #[test]
    fn test_unknown_text_is_absent_not_an_error() {
        let catalog = ClueCatalog::new();
        let state = SimulatedState::new();

        assert!(catalog.find_by_text(&state, "NOT A REAL CLUE").unwrap().is_none());
        // A lead-in with the wrong riddle behind it is still a miss
        let observed = format!("{LEAD_IN_STANDARD}NOT A REAL CLUE");
        assert!(catalog.find_by_text(&state, &observed).unwrap().is_none());
    }

    #[test]
    fn test_partial_text_does_not_match() {
        let catalog = ClueCatalog::new();
        let state = SimulatedState::new();

        // Prefixes and fragments of a valid sentence must not match
        assert!(catalog.find_by_text(&state, "A BAK").unwrap().is_none());
        assert!(catalog
            .find_by_text(&state, "reveals who to speak to next: A BAKER")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_lead_ins_are_distinct() {
        assert_ne!(LEAD_IN_STANDARD, LEAD_IN_BEGINNER);
    }

    #[test]
    fn test_every_record_round_trips_through_both_lead_ins() {
        let catalog = ClueCatalog::new();

        // Two sessions so both branches of derived texts are covered
        let mut flipped = SimulatedState::new();
        flipped.set_varbit(ids::varbit::GNOME_SLAYER_MASTER, 1);

        for state in [SimulatedState::new(), flipped] {
            for record in catalog.records() {
                let text = record.resolve_text(&state).unwrap();
                for lead_in in [LEAD_IN_STANDARD, LEAD_IN_BEGINNER] {
                    let observed = format!("{lead_in}{text}");
                    let found = catalog.find_by_text(&state, &observed).unwrap().unwrap();
                    // The same record must come back, never an earlier one
                    // resolving to identical text
                    assert!(
                        std::ptr::eq(found, record),
                        "round trip landed on a different record for {text:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_slayer_master_text_follows_varbit() {
        let catalog = ClueCatalog::new();

        let mut state = SimulatedState::new();
        let record = catalog.find_by_text(&state, "I EVEN").unwrap().unwrap();
        assert_eq!(record.resolve_npc(&state), Ok("Nieve"));
        // The replacement text is not live yet
        assert!(catalog.find_by_text(&state, "VESTE").unwrap().is_none());

        state.set_varbit(ids::varbit::GNOME_SLAYER_MASTER, 1);
        let record = catalog.find_by_text(&state, "VESTE").unwrap().unwrap();
        assert_eq!(record.resolve_npc(&state), Ok("Steve"));
        assert!(catalog.find_by_text(&state, "I EVEN").unwrap().is_none());
    }

    #[test]
    fn test_unreadable_session_aborts_the_scan() {
        let catalog = ClueCatalog::new();
        let mut state = SimulatedState::new();
        state.available = false;

        // The scan reaches a state-derived text and must surface the error
        // rather than skip the record
        assert!(catalog.find_by_text(&state, "NOT A REAL CLUE").is_err());
    }
}
