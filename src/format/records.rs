// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Ingestion boundary: loosely-typed event records in, ordered [`Event`]s out.
//!
//! Source rows come from hand-edited spreadsheets, so flags may be booleans or strings and
//! descriptions may be missing or numeric. Everything is normalized here; the layout core
//! never looks at raw values.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::tags::parse_cross_ref_tags;
use crate::layout::text_value;
use crate::model::{normalize_character_name, CharacterId, Event, EventId, Roster, World};

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y"];

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRecord {
    #[serde(alias = "Date")]
    pub date: String,
    #[serde(alias = "FirstMainCharacter")]
    pub primary: Option<String>,
    #[serde(alias = "SecondMainCharacter")]
    pub second: Option<String>,
    #[serde(alias = "ThirdMainCharacter")]
    pub third: Option<String>,
    #[serde(alias = "FourthMainCharacter")]
    pub fourth: Option<String>,
    /// Further named character slots, in source order.
    #[serde(alias = "SecondaryCharacters")]
    pub secondary: Vec<String>,
    /// Free-form comma list of everyone present.
    #[serde(alias = "Characters")]
    pub characters: Option<String>,
    #[serde(alias = "FormattedDescription")]
    pub description: Value,
    #[serde(alias = "Full_Description", alias = "FullDescription")]
    pub full_description: Option<String>,
    #[serde(alias = "Death")]
    pub death: Value,
    #[serde(alias = "Important Trigger")]
    pub important: Value,
    #[serde(rename = "type", alias = "Type")]
    pub tags: Option<String>,
    #[serde(alias = "World")]
    pub world: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    MissingPrimaryCharacter { record: usize },
    InvalidDate { record: usize, value: String },
    Json(String),
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPrimaryCharacter { record } => {
                write!(f, "event record {record} has no primary character")
            }
            Self::InvalidDate { record, value } => {
                write!(f, "event record {record} has an unrecognized date: {value:?}")
            }
            Self::Json(message) => write!(f, "invalid event records: {message}"),
        }
    }
}

impl std::error::Error for IngestError {}

/// Parses a JSON array of [`EventRecord`]s.
pub fn parse_event_records(raw: &str) -> Result<Vec<EventRecord>, IngestError> {
    serde_json::from_str(raw).map_err(|err| IngestError::Json(err.to_string()))
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}

/// Loose truthiness: `true`, `"True"`, `"yes"`, `"1"` and non-zero numbers.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(text) => {
            let text = text.trim();
            text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("yes") || text == "1"
        }
        Value::Number(number) => number.as_f64().is_some_and(|number| number != 0.0),
        _ => false,
    }
}

struct Draft {
    record: usize,
    date: NaiveDate,
    primary: CharacterId,
    participants: BTreeSet<CharacterId>,
}

/// Converts records into date-ordered events with sequential ids.
///
/// Ties keep record order. Names resolve against `roster` (exact, then loose); names that
/// match nobody are dropped from the participant set. A primary outside the roster is kept
/// under its normalized name so the event still takes part in grouping.
pub fn ingest_events(records: &[EventRecord], roster: &Roster) -> Result<Vec<Event>, IngestError> {
    let mut drafts = Vec::with_capacity(records.len());
    for (idx, record) in records.iter().enumerate() {
        let date = parse_date(&record.date)
            .ok_or_else(|| IngestError::InvalidDate { record: idx, value: record.date.clone() })?;

        let raw_primary = record.primary.as_deref().unwrap_or_default();
        let primary = match roster.find_loose(raw_primary) {
            Some(character) => character.id().clone(),
            None => {
                let name = normalize_character_name(raw_primary);
                let primary = CharacterId::new(name)
                    .map_err(|_| IngestError::MissingPrimaryCharacter { record: idx })?;
                debug!(record = idx, name, "primary character is not in the roster");
                primary
            }
        };

        let listed = record
            .characters
            .as_deref()
            .into_iter()
            .flat_map(|list| list.split(','))
            .map(str::to_owned);
        let slots = [&record.second, &record.third, &record.fourth]
            .into_iter()
            .flatten()
            .chain(&record.secondary)
            .cloned();
        let mut participants = BTreeSet::new();
        for name in slots.chain(listed) {
            if normalize_character_name(&name).is_empty() {
                continue;
            }
            match roster.find_loose(&name) {
                Some(character) => {
                    participants.insert(character.id().clone());
                }
                None => debug!(record = idx, name = name.trim(), "ignoring unknown character"),
            }
        }

        drafts.push(Draft { record: idx, date, primary, participants });
    }

    drafts.sort_by_key(|draft| draft.date);

    let events = drafts
        .into_iter()
        .enumerate()
        .map(|(position, draft)| {
            let record = &records[draft.record];
            let description = text_value(&record.description);
            Event::new(EventId::new(position as u32), draft.date, draft.primary, description)
                .with_participants(draft.participants)
                .with_full_description(non_blank(record.full_description.as_deref()))
                .with_characters_text(non_blank(record.characters.as_deref()))
                .with_death(is_truthy(&record.death))
                .with_important(is_truthy(&record.important))
                .with_cross_ref_tags(parse_cross_ref_tags(record.tags.as_deref().unwrap_or_default()))
                .with_world(record.world.as_deref().and_then(World::parse))
        })
        .collect::<Vec<_>>();

    Ok(events)
}

fn non_blank(text: Option<&str>) -> Option<String> {
    text.map(str::trim).filter(|text| !text.is_empty()).map(str::to_owned)
}
