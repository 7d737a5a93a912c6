// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Single forward pass from date-ordered events to a [`LayoutPlan`].

use std::fmt;

use tracing::info;

use crate::config::{ConfigError, TimelineConfig};
use crate::layout::{group_events, redistribute_descriptions};
use crate::model::{Event, EventId, Roster};
use crate::query::CrossReferenceIndex;
use crate::render::{build_layout, DateBackgrounds, LayoutPlan, ResolvedColumn};

#[derive(Debug)]
pub enum TimelineError {
    Config(ConfigError),
    /// The event dated before its predecessor.
    EventsOutOfOrder { event_id: EventId },
}

impl fmt::Display for TimelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid layout config: {err}"),
            Self::EventsOutOfOrder { event_id } => {
                write!(f, "event {event_id} is dated before the event preceding it")
            }
        }
    }
}

impl std::error::Error for TimelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::EventsOutOfOrder { .. } => None,
        }
    }
}

impl From<ConfigError> for TimelineError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Groups, assigns, resolves and emits the plan for `events`.
///
/// `events` must be sorted by date; ties keep their input order.
pub fn build_timeline(
    events: &[Event],
    roster: &Roster,
    config: &TimelineConfig,
) -> Result<LayoutPlan, TimelineError> {
    config.validate()?;
    if let Some(pair) = events.windows(2).find(|pair| pair[1].date() < pair[0].date()) {
        return Err(TimelineError::EventsOutOfOrder { event_id: pair[1].id() });
    }

    let groups = redistribute_descriptions(group_events(events, config.max_group_size));
    let columns = groups
        .iter()
        .enumerate()
        .map(|(position, group)| ResolvedColumn::resolve(position, group, roster, config))
        .collect::<Vec<_>>();

    let index = CrossReferenceIndex::index(events);
    let backgrounds = DateBackgrounds::new(events.iter().map(Event::date), &config.theme);
    let plan = build_layout(&columns, roster, &index, &backgrounds, config);

    info!(
        events = events.len(),
        columns = plan.columns.len(),
        shapes = plan.shapes.len(),
        markers = plan.markers.len(),
        "built timeline layout"
    );
    Ok(plan)
}
