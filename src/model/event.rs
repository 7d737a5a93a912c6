// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use smallvec::SmallVec;

use super::ids::{CharacterId, EventId};
use super::world::World;

/// Cross-reference tags attached to one event; almost always zero, one or two.
pub type CrossRefTags = SmallVec<[CrossRefTag; 2]>;

/// One chronological event of the narrative.
///
/// Events are created once at the ingestion boundary and never mutated afterwards. The
/// participant set always contains the primary character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    date: NaiveDate,
    primary: CharacterId,
    participants: BTreeSet<CharacterId>,
    description: String,
    full_description: Option<String>,
    characters_text: Option<String>,
    is_death: bool,
    is_important: bool,
    cross_ref_tags: CrossRefTags,
    world: Option<World>,
}

impl Event {
    pub fn new(
        id: EventId,
        date: NaiveDate,
        primary: CharacterId,
        description: impl Into<String>,
    ) -> Self {
        let mut participants = BTreeSet::new();
        participants.insert(primary.clone());
        Self {
            id,
            date,
            primary,
            participants,
            description: description.into(),
            full_description: None,
            characters_text: None,
            is_death: false,
            is_important: false,
            cross_ref_tags: CrossRefTags::new(),
            world: None,
        }
    }

    pub fn with_participants(mut self, participants: impl IntoIterator<Item = CharacterId>) -> Self {
        self.participants.extend(participants);
        self
    }

    pub fn with_full_description(mut self, text: Option<String>) -> Self {
        self.full_description = text;
        self
    }

    pub fn with_characters_text(mut self, text: Option<String>) -> Self {
        self.characters_text = text;
        self
    }

    pub fn with_death(mut self, is_death: bool) -> Self {
        self.is_death = is_death;
        self
    }

    pub fn with_important(mut self, is_important: bool) -> Self {
        self.is_important = is_important;
        self
    }

    pub fn with_cross_ref_tags(mut self, tags: impl IntoIterator<Item = CrossRefTag>) -> Self {
        self.cross_ref_tags.extend(tags);
        self
    }

    pub fn with_world(mut self, world: Option<World>) -> Self {
        self.world = world;
        self
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn primary(&self) -> &CharacterId {
        &self.primary
    }

    pub fn participants(&self) -> &BTreeSet<CharacterId> {
        &self.participants
    }

    pub fn involves(&self, character: &CharacterId) -> bool {
        self.participants.contains(character)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Long-form text for hover panels, falling back to the cell description.
    pub fn hover_description(&self) -> &str {
        self.full_description.as_deref().unwrap_or(&self.description)
    }

    pub fn characters_text(&self) -> Option<&str> {
        self.characters_text.as_deref()
    }

    pub fn is_death(&self) -> bool {
        self.is_death
    }

    pub fn is_important(&self) -> bool {
        self.is_important
    }

    pub fn cross_ref_tags(&self) -> &[CrossRefTag] {
        &self.cross_ref_tags
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CrossRefKind {
    TimeTravel,
    WorldSwap,
}

impl CrossRefKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::TimeTravel => "Successful Time Travel",
            Self::WorldSwap => "World Swap",
        }
    }
}

impl fmt::Display for CrossRefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A `(kind, number)` pair linking narrative counterparts, e.g. a jump and its arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CrossRefTag {
    kind: CrossRefKind,
    number: u32,
}

impl CrossRefTag {
    pub fn new(kind: CrossRefKind, number: u32) -> Self {
        Self { kind, number }
    }

    pub fn kind(&self) -> CrossRefKind {
        self.kind
    }

    pub fn number(&self) -> u32 {
        self.number
    }
}

impl fmt::Display for CrossRefTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.number)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{CrossRefKind, CrossRefTag, Event};
    use crate::model::ids::{CharacterId, EventId};

    fn cid(name: &str) -> CharacterId {
        CharacterId::new(name).expect("character id")
    }

    #[test]
    fn primary_is_always_a_participant() {
        let date = NaiveDate::from_ymd_opt(2019, 11, 4).expect("date");
        let event = Event::new(EventId::new(0), date, cid("Jonas"), "Jonas wakes up")
            .with_participants([cid("Martha")]);

        assert!(event.involves(&cid("Jonas")));
        assert!(event.involves(&cid("Martha")));
        assert_eq!(event.participants().len(), 2);
    }

    #[test]
    fn hover_description_falls_back_to_cell_text() {
        let date = NaiveDate::from_ymd_opt(1986, 6, 21).expect("date");
        let short = Event::new(EventId::new(1), date, cid("Claudia"), "short");
        assert_eq!(short.hover_description(), "short");

        let long = short.clone().with_full_description(Some("long text".to_owned()));
        assert_eq!(long.hover_description(), "long text");
    }

    #[test]
    fn cross_ref_tag_displays_like_source_marker() {
        let tag = CrossRefTag::new(CrossRefKind::TimeTravel, 3);
        assert_eq!(tag.to_string(), "Successful Time Travel (3)");
    }
}
