// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use tracing::debug;

use super::grouping::EventGroup;
use crate::model::{CharacterId, Event};

/// Result of partitioning one group by primary character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub placed: Vec<&'a Event>,
    pub deferred: Vec<&'a Event>,
}

/// Keeps the first event of every distinct primary character and defers the rest.
///
/// Placed events follow the order in which their primary character first appears. Deferred
/// events are listed per character in that same order (all of the first character's extras,
/// then all of the second's, and so on). Groups of size one or zero are returned unchanged.
pub fn assign_descriptions<'a>(events: Vec<&'a Event>) -> Assignment<'a> {
    if events.len() <= 1 {
        return Assignment { placed: events, deferred: Vec::new() };
    }

    let mut order = Vec::<&CharacterId>::new();
    let mut by_character = BTreeMap::<&CharacterId, Vec<&'a Event>>::new();
    for &event in &events {
        let bucket = by_character.entry(event.primary()).or_default();
        if bucket.is_empty() {
            order.push(event.primary());
        }
        bucket.push(event);
    }

    let mut placed = Vec::with_capacity(order.len());
    let mut deferred = Vec::new();
    for character in order {
        let Some(bucket) = by_character.remove(character) else {
            continue;
        };
        let mut bucket = bucket.into_iter();
        if let Some(first) = bucket.next() {
            placed.push(first);
        }
        deferred.extend(bucket);
    }

    Assignment { placed, deferred }
}

/// Runs [`assign_descriptions`] over every group, carrying deferred events forward.
///
/// Deferred events are prepended to the next group before it is partitioned. Whatever is
/// still deferred after the last group is partitioned again into trailing groups until no
/// primary character repeats, so no event is ever dropped.
pub fn redistribute_descriptions<'a>(groups: Vec<EventGroup<'a>>) -> Vec<EventGroup<'a>> {
    let mut out = Vec::<EventGroup<'a>>::with_capacity(groups.len());
    let mut carry = Vec::<&'a Event>::new();

    for group in groups {
        let mut events = std::mem::take(&mut carry);
        events.extend(group.into_events());

        let Assignment { placed, deferred } = assign_descriptions(events);
        if !deferred.is_empty() {
            debug!(
                placed = placed.len(),
                deferred = deferred.len(),
                "deferring events with repeated primary character"
            );
        }
        out.push(EventGroup::new(placed));
        carry = deferred;
    }

    while !carry.is_empty() {
        let Assignment { placed, deferred } = assign_descriptions(std::mem::take(&mut carry));
        out.push(EventGroup::new(placed));
        carry = deferred;
    }

    out
}
