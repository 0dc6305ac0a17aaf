//! Simulated game sessions.
//!
//! A small TOML-backed stand-in for the live client, used by tests and the
//! inspector CLI so lookups run against a reproducible session.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::{GameState, Quest, QuestState, StateError};

/// A single varbit override in a simulated session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarbitValue {
    /// Varbit id.
    pub id: i32,
    /// Current value.
    pub value: i32,
}

/// In-memory game session with explicit quest and varbit values.
///
/// The simulated world is complete: unlisted quests read as not started and
/// unlisted varbits read as 0. Setting `available` to false makes every
/// query fail, for exercising unavailability handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatedState {
    /// When false every query fails with [`StateError::Unavailable`].
    pub available: bool,
    /// Quest progression states.
    pub quests: HashMap<Quest, QuestState>,
    /// Varbit overrides.
    pub varbits: Vec<VarbitValue>,
}

impl Default for SimulatedState {
    fn default() -> Self {
        Self {
            available: true,
            quests: HashMap::new(),
            varbits: Vec::new(),
        }
    }
}

impl SimulatedState {
    /// Create a session with no quest progress and all varbits at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a quest's progression state, replacing any previous value.
    pub fn set_quest(&mut self, quest: Quest, state: QuestState) -> &mut Self {
        self.quests.insert(quest, state);
        self
    }

    /// Set a varbit value, replacing any previous override for the same id.
    pub fn set_varbit(&mut self, id: i32, value: i32) -> &mut Self {
        match self.varbits.iter_mut().find(|v| v.id == id) {
            Some(entry) => entry.value = value,
            None => self.varbits.push(VarbitValue { id, value }),
        }
        self
    }
}

impl GameState for SimulatedState {
    fn quest_state(&self, quest: Quest) -> Result<QuestState, StateError> {
        if !self.available {
            return Err(StateError::Unavailable {
                reason: "simulated session marked unavailable",
            });
        }
        Ok(self
            .quests
            .get(&quest)
            .copied()
            .unwrap_or(QuestState::NotStarted))
    }

    fn varbit(&self, id: i32) -> Result<i32, StateError> {
        if !self.available {
            return Err(StateError::Unavailable {
                reason: "simulated session marked unavailable",
            });
        }
        Ok(self
            .varbits
            .iter()
            .find(|v| v.id == id)
            .map(|v| v.value)
            .unwrap_or(0))
    }
}

/// Load a simulated session from a TOML file
pub fn load_state(path: &Path) -> Result<SimulatedState> {
    let content = std::fs::read_to_string(path)?;
    let state: SimulatedState = toml::from_str(&content)?;
    Ok(state)
}

/// Save a simulated session to a TOML file
pub fn save_state(state: &SimulatedState, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(state)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Default location of the inspector's session file
pub fn default_state_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "TrailAssist", "TrailAssist")
        .context("Could not determine application directories")?;
    let dir = dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&dir).context("Failed to create config directory")?;
    Ok(dir.join("state.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_session_is_available() {
        let state = SimulatedState::default();

        assert!(state.available);
        assert_eq!(state.quest_state(Quest::EaglesPeak), Ok(QuestState::NotStarted));
        assert_eq!(state.varbit(1234), Ok(0));
    }

    #[test]
    fn test_set_quest_and_varbit() {
        let mut state = SimulatedState::new();
        state
            .set_quest(Quest::EaglesPeak, QuestState::Finished)
            .set_varbit(10, 3);

        assert_eq!(state.quest_state(Quest::EaglesPeak), Ok(QuestState::Finished));
        assert_eq!(state.varbit(10), Ok(3));

        // Overwrite keeps a single entry per id
        state.set_varbit(10, 7);
        assert_eq!(state.varbit(10), Ok(7));
        assert_eq!(state.varbits.len(), 1);
    }

    #[test]
    fn test_unavailable_session_fails_every_query() {
        let mut state = SimulatedState::new();
        state.available = false;

        assert!(state.quest_state(Quest::EaglesPeak).is_err());
        assert!(state.varbit(0).is_err());
    }

    #[test]
    fn test_save_and_load_state() {
        let mut state = SimulatedState::new();
        state
            .set_quest(Quest::EaglesPeak, QuestState::InProgress)
            .set_varbit(5027, 1);

        let temp_file = NamedTempFile::new().unwrap();
        save_state(&state, temp_file.path()).unwrap();
        let loaded = load_state(temp_file.path()).unwrap();

        assert_eq!(loaded.available, state.available);
        assert_eq!(
            loaded.quest_state(Quest::EaglesPeak),
            Ok(QuestState::InProgress)
        );
        assert_eq!(loaded.varbit(5027), Ok(1));
    }

    #[test]
    fn test_state_file_uses_snake_case_enum_names() {
        let mut state = SimulatedState::new();
        state.set_quest(Quest::EaglesPeak, QuestState::Finished);

        let temp_file = NamedTempFile::new().unwrap();
        save_state(&state, temp_file.path()).unwrap();

        // Quest map keys and states land as plain snake_case TOML strings
        let written = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(written.contains("eagles_peak = \"finished\""));

        let loaded = load_state(temp_file.path()).unwrap();
        assert_eq!(
            loaded.quest_state(Quest::EaglesPeak),
            Ok(QuestState::Finished)
        );
    }

    #[test]
    fn test_load_state_file_not_found() {
        let result = load_state(Path::new("/nonexistent/path/state.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_state_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "this is not valid toml {{{{").unwrap();

        let result = load_state(temp_file.path());
        assert!(result.is_err());
    }
}
