// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use super::grouping::EventGroup;
use super::wrap::is_overflowing;
use crate::config::TextLayout;
use crate::model::{CharacterId, Event, EventId, Roster};

/// Number of participation markers a cell can carry.
pub const MAX_PARTICIPATION_SLOTS: usize = 6;

pub type ParticipationSlots = SmallVec<[usize; MAX_PARTICIPATION_SLOTS]>;

/// Description text assigned to a character's cell in one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignedDescription<'a> {
    event: &'a Event,
    overflowing: bool,
}

impl<'a> AssignedDescription<'a> {
    pub fn event(&self) -> &'a Event {
        self.event
    }

    pub fn event_id(&self) -> EventId {
        self.event.id()
    }

    pub fn text(&self) -> &'a str {
        self.event.description()
    }

    /// The text does not fit a nominal cell and asks for an expansion.
    pub fn is_overflowing(&self) -> bool {
        self.overflowing
    }
}

/// Death and importance markings of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellFlags {
    pub death: bool,
    pub important: bool,
}

/// Per-column facts the expansion resolver and the shape builder both read.
#[derive(Debug, Clone)]
pub struct ColumnContext<'a> {
    events: Vec<&'a Event>,
    active: BTreeMap<CharacterId, ParticipationSlots>,
    descriptions: BTreeMap<CharacterId, AssignedDescription<'a>>,
}

impl<'a> ColumnContext<'a> {
    /// Collects active characters, participation slots and assigned descriptions of `group`.
    ///
    /// Characters outside `roster` are ignored. The first event of a primary character with a
    /// non-empty description wins that character's cell text.
    pub fn new(group: &EventGroup<'a>, roster: &Roster, text: &TextLayout) -> Self {
        let mut active = BTreeMap::<CharacterId, ParticipationSlots>::new();
        let mut descriptions = BTreeMap::<CharacterId, AssignedDescription<'a>>::new();

        for (slot, &event) in group.events().iter().enumerate() {
            for character in event.participants() {
                if !roster.contains(character) {
                    continue;
                }
                let slots = active.entry(character.clone()).or_default();
                if slot < MAX_PARTICIPATION_SLOTS {
                    slots.push(slot);
                }
            }

            let primary = event.primary();
            if event.description().is_empty()
                || !roster.contains(primary)
                || descriptions.contains_key(primary)
            {
                continue;
            }
            let overflowing = is_overflowing(event.description(), text.probe_width, text.probe_lines);
            descriptions.insert(primary.clone(), AssignedDescription { event, overflowing });
        }

        Self { events: group.events().to_vec(), active, descriptions }
    }

    pub fn events(&self) -> &[&'a Event] {
        &self.events
    }

    pub fn is_merged(&self) -> bool {
        self.events.len() > 1
    }

    pub fn is_active(&self, character: &CharacterId) -> bool {
        self.active.contains_key(character)
    }

    pub fn active_characters(&self) -> impl Iterator<Item = &CharacterId> {
        self.active.keys()
    }

    /// Indices (within the column) of the first six events `character` takes part in.
    pub fn participation_slots(&self, character: &CharacterId) -> &[usize] {
        self.active.get(character).map_or(&[], |slots| slots.as_slice())
    }

    pub fn description(&self, character: &CharacterId) -> Option<&AssignedDescription<'a>> {
        self.descriptions.get(character)
    }

    pub fn has_text(&self, character: &CharacterId) -> bool {
        self.descriptions.contains_key(character)
    }

    pub fn descriptions(&self) -> impl Iterator<Item = (&CharacterId, &AssignedDescription<'a>)> {
        self.descriptions.iter()
    }

    /// Event whose details a hover over `character`'s cell shows.
    ///
    /// The first event `character` is primary of, otherwise the first event it takes part in.
    /// Empty descriptions still count.
    pub fn hover_event(&self, character: &CharacterId) -> Option<&'a Event> {
        if let Some(event) = self.events.iter().copied().find(|event| event.primary() == character) {
            return Some(event);
        }
        self.events.iter().copied().find(|event| event.involves(character))
    }

    /// In a single-event column the event's markings apply to everyone in it. In a merged
    /// column they only apply to the marked event's primary character; death wins.
    pub fn flags_for(&self, character: &CharacterId) -> CellFlags {
        if let [event] = self.events.as_slice() {
            return CellFlags { death: event.is_death(), important: event.is_important() };
        }

        let mut flags = CellFlags::default();
        for event in self.events.iter().filter(|event| event.primary() == character) {
            if event.is_death() {
                return CellFlags { death: true, important: false };
            }
            flags.important |= event.is_important();
        }
        flags
    }
}
