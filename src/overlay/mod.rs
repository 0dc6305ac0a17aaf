//! Overlay hint production.
//!
//! Turns a clue record plus live state into display-ready payloads: panel
//! lines for the text overlay and a marker directive for the world overlay.
//! Rendering belongs to the host; this module stops at the payloads and the
//! channel that carries them to the renderer.

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clue::{ClueRecord, WorldPoint};
use crate::state::{GameState, StateError};

/// Panel title shown above every anagram hint.
pub const HINT_TITLE: &str = "Anagram Clue";

/// One line of the hint panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLine {
    /// Left-hand label. The title line carries the title text here.
    pub label: String,
    /// Right-hand value; empty on the title line.
    pub value: String,
    /// Whether the renderer should put the value in the emphasis colour.
    pub emphasize: bool,
}

impl PanelLine {
    /// A title line: label only, no value, no emphasis.
    pub fn title(text: &str) -> Self {
        Self {
            label: text.to_string(),
            value: String::new(),
            emphasize: false,
        }
    }

    /// A labelled value line with the value emphasized.
    pub fn entry(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            emphasize: true,
        }
    }
}

/// What the world marker should anchor to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MarkerDirective {
    /// Highlight the named NPC wherever it stands in the scene.
    NpcAnchor { name: String },
    /// Highlight the scenery object with this id.
    ObjectAnchor { object_id: i32 },
}

/// Display-ready hint for one clue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueHint {
    /// Panel lines in display order, title first.
    pub lines: Vec<PanelLine>,
    /// World-marker anchor.
    pub marker: MarkerDirective,
    /// Resolved world location. The renderer draws the marker only when
    /// this tile is inside the loaded scene; that check happens there.
    pub location: Option<WorldPoint>,
}

/// Produce the hint payload for `record` under the given session.
///
/// Lines come out as title, NPC, location, and the answer when the record
/// has one. Records with an object id anchor the marker to that object;
/// everything else anchors to the resolved NPC name.
pub fn build_hint(record: &ClueRecord, state: &dyn GameState) -> Result<ClueHint, StateError> {
    let npc = record.resolve_npc(state)?;

    let mut lines = vec![
        PanelLine::title(HINT_TITLE),
        PanelLine::entry("NPC:", npc),
        PanelLine::entry("Location:", record.area()),
    ];
    if let Some(answer) = record.resolve_answer(state)? {
        lines.push(PanelLine::entry("Answer:", answer));
    }

    let marker = match record.object_id() {
        Some(object_id) => MarkerDirective::ObjectAnchor { object_id },
        None => MarkerDirective::NpcAnchor {
            name: npc.to_string(),
        },
    };

    Ok(ClueHint {
        lines,
        marker,
        location: record.resolve_location(state)?,
    })
}

/// Channel carrying produced hints to the overlay renderer.
///
/// The resolution side keeps the feed and publishes on it; the renderer
/// clones the receiver and drains it on its own thread.
pub struct HintFeed {
    sender: Sender<ClueHint>,
    receiver: Receiver<ClueHint>,
}

impl HintFeed {
    /// Create an unbounded feed.
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Get a sender for publishing hints from other threads.
    pub fn sender(&self) -> Sender<ClueHint> {
        self.sender.clone()
    }

    /// Get a receiver for the renderer side.
    pub fn receiver(&self) -> Receiver<ClueHint> {
        self.receiver.clone()
    }

    /// Publish a hint to the renderer.
    pub fn publish(&self, hint: ClueHint) {
        debug!("Publishing hint with {} panel lines", hint.lines.len());
        let _ = self.sender.send(hint);
    }
}

impl Default for HintFeed {
    fn default() -> Self {
        Self::new()
    }
}
