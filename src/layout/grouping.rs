// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;

use crate::model::Event;

/// Events that share one output column, in chronological order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventGroup<'a> {
    events: Vec<&'a Event>,
}

impl<'a> EventGroup<'a> {
    pub fn new(events: Vec<&'a Event>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[&'a Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<&'a Event> {
        self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// A column holding more than one event.
    pub fn is_merged(&self) -> bool {
        self.events.len() > 1
    }

    pub fn first(&self) -> Option<&'a Event> {
        self.events.first().copied()
    }

    /// Date of the first event; this is the date the column is labelled with.
    pub fn date(&self) -> Option<NaiveDate> {
        self.first().map(Event::date)
    }
}

/// Splits date-ordered events into same-date runs of at most `max_group_size` events.
///
/// Grouping is a partition: concatenating the output reproduces the input order. A
/// `max_group_size` of zero behaves like one.
pub fn group_events(events: &[Event], max_group_size: usize) -> Vec<EventGroup<'_>> {
    let max_group_size = max_group_size.max(1);
    let mut groups = Vec::<EventGroup<'_>>::new();
    let mut current = Vec::<&Event>::new();

    for event in events {
        let same_date = current.first().is_some_and(|first| first.date() == event.date());
        if same_date && current.len() < max_group_size {
            current.push(event);
            continue;
        }

        if !current.is_empty() {
            groups.push(EventGroup::new(std::mem::take(&mut current)));
        }
        current.push(event);
    }

    if !current.is_empty() {
        groups.push(EventGroup::new(current));
    }

    groups
}
