//! Clue records and attribute resolution.
//!
//! A [`ClueRecord`] describes one anagram clue: how it is triggered, who to
//! speak to, where, and what the follow-up challenge expects. Attributes
//! whose value depends on quest progress or varbits are stored as
//! [`Attribute::Derived`] and resolved against a [`GameState`] at read time.

use serde::{Deserialize, Serialize};

use crate::state::{GameState, StateError};

/// Resolver for a state-dependent attribute value.
pub type StateFn<T> = fn(&dyn GameState) -> Result<T, StateError>;

/// A record attribute, either fixed at catalog-build time or derived from
/// the live session when read.
#[derive(Debug, Clone, Copy)]
pub enum Attribute<T> {
    /// Fixed value.
    Constant(T),
    /// Value computed from the live session.
    Derived(StateFn<T>),
}

impl<T: Copy> Attribute<T> {
    /// Resolve the attribute against `state`.
    ///
    /// Constants never touch the session and never fail. Derived values
    /// surface [`StateError`] from the underlying queries unchanged.
    pub fn resolve(&self, state: &dyn GameState) -> Result<T, StateError> {
        match self {
            Attribute::Constant(value) => Ok(*value),
            Attribute::Derived(f) => f(state),
        }
    }
}

/// A tile position in the game world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldPoint {
    /// West-east tile coordinate.
    pub x: i32,
    /// South-north tile coordinate.
    pub y: i32,
    /// Vertical level, 0 (ground) through 3.
    pub plane: i32,
}

impl WorldPoint {
    /// Create a point. `plane` must be within 0..=3.
    pub fn new(x: i32, y: i32, plane: i32) -> Self {
        debug_assert!((0..=3).contains(&plane), "plane out of range: {plane}");
        Self { x, y, plane }
    }
}

/// One anagram clue: trigger ids, display attributes, and the follow-up
/// challenge. Built once by the catalog data module and never mutated.
#[derive(Debug, Clone)]
pub struct ClueRecord {
    item_id: Option<i32>,
    object_id: Option<i32>,
    text: Attribute<&'static str>,
    npc: Attribute<&'static str>,
    location: Option<Attribute<WorldPoint>>,
    area: &'static str,
    question: Option<&'static str>,
    answer: Option<Attribute<&'static str>>,
}

impl ClueRecord {
    /// Start building a record.
    pub fn builder() -> ClueRecordBuilder {
        ClueRecordBuilder::default()
    }

    /// Clue scroll item id that triggers this record, if it has one of its
    /// own. Records on shared-tier scroll items carry no id and are found
    /// by text only.
    pub fn item_id(&self) -> Option<i32> {
        self.item_id
    }

    /// Object id the world marker anchors to, for the few records that
    /// point at scenery rather than an NPC.
    pub fn object_id(&self) -> Option<i32> {
        self.object_id
    }

    /// Textual description of where the NPC is found.
    pub fn area(&self) -> &'static str {
        self.area
    }

    /// Challenge question the NPC asks, if any.
    pub fn question(&self) -> Option<&'static str> {
        self.question
    }

    /// Whether the record carries an answer to the challenge.
    pub fn has_answer(&self) -> bool {
        self.answer.is_some()
    }

    /// Resolve the scrambled display text.
    pub fn resolve_text(&self, state: &dyn GameState) -> Result<&'static str, StateError> {
        self.text.resolve(state)
    }

    /// Resolve the name of the NPC to speak to.
    pub fn resolve_npc(&self, state: &dyn GameState) -> Result<&'static str, StateError> {
        self.npc.resolve(state)
    }

    /// Resolve the world location, if the record has one.
    pub fn resolve_location(&self, state: &dyn GameState) -> Result<Option<WorldPoint>, StateError> {
        match &self.location {
            Some(attr) => Ok(Some(attr.resolve(state)?)),
            None => Ok(None),
        }
    }

    /// Resolve the challenge answer, if the record has one.
    pub fn resolve_answer(&self, state: &dyn GameState) -> Result<Option<&'static str>, StateError> {
        match &self.answer {
            Some(attr) => Ok(Some(attr.resolve(state)?)),
            None => Ok(None),
        }
    }
}

/// Builder for [`ClueRecord`].
///
/// Display text, NPC and area are required; everything else is optional.
/// The `*_fn` setters install state-derived values.
#[derive(Default)]
pub struct ClueRecordBuilder {
    item_id: Option<i32>,
    object_id: Option<i32>,
    text: Option<Attribute<&'static str>>,
    npc: Option<Attribute<&'static str>>,
    location: Option<Attribute<WorldPoint>>,
    area: Option<&'static str>,
    question: Option<&'static str>,
    answer: Option<Attribute<&'static str>>,
}

impl ClueRecordBuilder {
    /// Clue scroll item id that triggers this record.
    pub fn item(mut self, id: i32) -> Self {
        self.item_id = Some(id);
        self
    }

    /// Object id to anchor the world marker to instead of the NPC.
    pub fn object(mut self, id: i32) -> Self {
        self.object_id = Some(id);
        self
    }

    /// Fixed scrambled display text.
    pub fn text(mut self, text: &'static str) -> Self {
        self.text = Some(Attribute::Constant(text));
        self
    }

    /// State-derived scrambled display text.
    pub fn text_fn(mut self, f: StateFn<&'static str>) -> Self {
        self.text = Some(Attribute::Derived(f));
        self
    }

    /// Fixed NPC name.
    pub fn npc(mut self, npc: &'static str) -> Self {
        self.npc = Some(Attribute::Constant(npc));
        self
    }

    /// State-derived NPC name.
    pub fn npc_fn(mut self, f: StateFn<&'static str>) -> Self {
        self.npc = Some(Attribute::Derived(f));
        self
    }

    /// Fixed world location.
    pub fn location(mut self, x: i32, y: i32, plane: i32) -> Self {
        self.location = Some(Attribute::Constant(WorldPoint::new(x, y, plane)));
        self
    }

    /// State-derived world location.
    pub fn location_fn(mut self, f: StateFn<WorldPoint>) -> Self {
        self.location = Some(Attribute::Derived(f));
        self
    }

    /// Textual area description shown on the hint panel.
    pub fn area(mut self, area: &'static str) -> Self {
        self.area = Some(area);
        self
    }

    /// Challenge question the NPC asks.
    pub fn question(mut self, question: &'static str) -> Self {
        self.question = Some(question);
        self
    }

    /// Fixed challenge answer.
    pub fn answer(mut self, answer: &'static str) -> Self {
        self.answer = Some(Attribute::Constant(answer));
        self
    }

    /// State-derived challenge answer.
    pub fn answer_fn(mut self, f: StateFn<&'static str>) -> Self {
        self.answer = Some(Attribute::Derived(f));
        self
    }

    /// Finish the record.
    ///
    /// # Panics
    ///
    /// Panics if display text, NPC or area is missing. Records are built
    /// from static catalog data, so a miss here is a defect in that data.
    pub fn build(self) -> ClueRecord {
        ClueRecord {
            item_id: self.item_id,
            object_id: self.object_id,
            text: self.text.expect("clue record missing display text"),
            npc: self.npc.expect("clue record missing npc"),
            location: self.location,
            area: self.area.expect("clue record missing area"),
            question: self.question,
            answer: self.answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Quest, QuestState, SimulatedState};

    fn answer_from_quest(state: &dyn GameState) -> Result<&'static str, StateError> {
        Ok(match state.quest_state(Quest::EaglesPeak)? {
            QuestState::Finished => "yes",
            _ => "no",
        })
    }

    #[test]
    fn test_constant_attribute_ignores_state() {
        // Constants resolve even when the session is unreadable
        let mut state = SimulatedState::new();
        state.available = false;

        let attr = Attribute::Constant("fixed");
        assert_eq!(attr.resolve(&state), Ok("fixed"));
    }

    #[test]
    fn test_derived_attribute_reads_state() {
        let mut state = SimulatedState::new();
        let attr: Attribute<&'static str> = Attribute::Derived(answer_from_quest);

        assert_eq!(attr.resolve(&state), Ok("no"));

        state.set_quest(Quest::EaglesPeak, QuestState::Finished);
        assert_eq!(attr.resolve(&state), Ok("yes"));
    }

    #[test]
    fn test_derived_attribute_propagates_unavailable() {
        let mut state = SimulatedState::new();
        state.available = false;

        let attr: Attribute<&'static str> = Attribute::Derived(answer_from_quest);
        assert!(attr.resolve(&state).is_err());
    }

    #[test]
    fn test_record_with_optional_fields_absent() {
        let state = SimulatedState::new();
        let record = ClueRecord::builder()
            .text("A BAKER")
            .npc("Baraek")
            .area("Varrock square")
            .build();

        assert_eq!(record.item_id(), None);
        assert_eq!(record.object_id(), None);
        assert_eq!(record.resolve_location(&state), Ok(None));
        assert_eq!(record.resolve_answer(&state), Ok(None));
        assert_eq!(record.question(), None);
        assert!(!record.has_answer());
    }

    #[test]
    fn test_record_question_without_answer() {
        let record = ClueRecord::builder()
            .text("QUE SIR")
            .npc("Squire")
            .area("Falador Castle Courtyard")
            .question("How many knights are there?")
            .build();

        assert_eq!(record.question(), Some("How many knights are there?"));
        assert!(!record.has_answer());
    }

    #[test]
    fn test_record_resolves_all_attributes() {
        let state = SimulatedState::new();
        let record = ClueRecord::builder()
            .item(2801)
            .text("A BAKER")
            .npc("Baraek")
            .location(3217, 3434, 0)
            .area("Varrock square")
            .question("How many stalls are there?")
            .answer("5")
            .build();

        assert_eq!(record.resolve_text(&state), Ok("A BAKER"));
        assert_eq!(record.resolve_npc(&state), Ok("Baraek"));
        assert_eq!(
            record.resolve_location(&state),
            Ok(Some(WorldPoint::new(3217, 3434, 0)))
        );
        assert_eq!(record.resolve_answer(&state), Ok(Some("5")));
    }

    #[test]
    #[should_panic(expected = "missing display text")]
    fn test_builder_rejects_missing_text() {
        let _ = ClueRecord::builder().npc("Baraek").area("Varrock square").build();
    }
}
