//! Live game-state access.
//!
//! Clue attributes that depend on quest progress or varbit values resolve
//! against this interface at read time. The host client provides the real
//! implementation; [`SimulatedState`] backs tests and the inspector CLI.

mod simulated;

pub use simulated::{default_state_path, load_state, save_state, SimulatedState, VarbitValue};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when the live game state cannot be read.
///
/// Implementations return this when no session is readable (logged out,
/// loading screen, client shutting down). Callers propagate it unchanged;
/// a failed read never substitutes a default value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// No readable game session right now.
    #[error("game state unavailable: {reason}")]
    Unavailable {
        /// Short description of why the session cannot be read.
        reason: &'static str,
    },
}

/// Progression state of a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestState {
    NotStarted,
    InProgress,
    Finished,
}

/// Quests referenced by state-dependent catalog attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quest {
    EaglesPeak,
}

/// Read-only view of the live game session.
///
/// Implementations answer from one consistent snapshot: a hint build reads
/// several values in sequence and must never see a mix of pre- and
/// post-change state within a single call.
pub trait GameState {
    /// Current progression state of `quest`.
    fn quest_state(&self, quest: Quest) -> Result<QuestState, StateError>;

    /// Current value of the integer flag (varbit) `id`.
    fn varbit(&self, id: i32) -> Result<i32, StateError>;
}
