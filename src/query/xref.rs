// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::model::{CrossRefTag, Event, EventId};

/// Reverse index from cross-reference tags to the events carrying them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossReferenceIndex {
    members: BTreeMap<CrossRefTag, BTreeSet<EventId>>,
    dates: BTreeMap<EventId, NaiveDate>,
}

impl CrossReferenceIndex {
    pub fn index(events: &[Event]) -> Self {
        let mut index = Self::default();
        for event in events {
            if event.cross_ref_tags().is_empty() {
                continue;
            }
            index.dates.insert(event.id(), event.date());
            for tag in event.cross_ref_tags() {
                index.members.entry(*tag).or_default().insert(event.id());
            }
        }
        index
    }

    pub fn tags(&self) -> impl Iterator<Item = (&CrossRefTag, &BTreeSet<EventId>)> {
        self.members.iter()
    }

    pub fn members(&self, tag: &CrossRefTag) -> Option<&BTreeSet<EventId>> {
        self.members.get(tag)
    }

    /// Other events sharing `tag` with `event`, in id order.
    pub fn partners_of(&self, event: EventId, tag: &CrossRefTag) -> Vec<EventId> {
        self.members
            .get(tag)
            .map(|members| members.iter().copied().filter(|id| *id != event).collect())
            .unwrap_or_default()
    }

    /// A marker is only worth drawing when the tag links at least two events.
    pub fn has_partner(&self, event: EventId, tag: &CrossRefTag) -> bool {
        self.members
            .get(tag)
            .is_some_and(|members| members.len() >= 2 && members.contains(&event))
    }

    /// Date of the lowest-id partner of `event` under `tag`.
    ///
    /// When more than two events share a tag, the other partners are not considered.
    pub fn destination_of(&self, event: EventId, tag: &CrossRefTag) -> Option<(EventId, NaiveDate)> {
        let partner = self.partners_of(event, tag).into_iter().next()?;
        self.dates.get(&partner).map(|date| (partner, *date))
    }
}
