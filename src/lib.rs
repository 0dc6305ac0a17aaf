//! Treasure-trail clue resolution core.
//!
//! Holds the anagram clue catalog and resolves records against live game
//! state: lookup by clue scroll item id or observed text, attribute
//! resolution for state-dependent values, and production of display-ready
//! overlay hints. The host client implements [`state::GameState`] and
//! renders [`overlay::ClueHint`] payloads; no drawing happens here.

pub mod catalog;
pub mod clue;
pub mod matcher;
pub mod overlay;
pub mod session;
pub mod state;

pub use catalog::ClueCatalog;
pub use clue::{Attribute, ClueRecord, StateFn, WorldPoint};
pub use overlay::{build_hint, ClueHint, HintFeed, MarkerDirective, PanelLine};
pub use session::ClueTracker;
pub use state::{GameState, Quest, QuestState, SimulatedState, StateError};
