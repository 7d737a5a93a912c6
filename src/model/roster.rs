// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::{CharacterId, IdError};

const DEFAULT_CHARACTER_COLOR: &str = "#FFFFFF";

/// On-disk description of one roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    id: CharacterId,
    color: String,
    text_color: Option<String>,
    aliases: Vec<String>,
}

impl Character {
    pub fn new(id: CharacterId, color: impl Into<String>) -> Self {
        Self { id, color: color.into(), text_color: None, aliases: Vec::new() }
    }

    pub fn with_text_color(mut self, text_color: impl Into<String>) -> Self {
        self.text_color = Some(text_color.into());
        self
    }

    pub fn with_aliases(mut self, aliases: impl IntoIterator<Item = String>) -> Self {
        self.aliases.extend(aliases);
        self
    }

    pub fn id(&self) -> &CharacterId {
        &self.id
    }

    pub fn name(&self) -> &str {
        self.id.as_str()
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Row label text color; the theme's label color applies when unset.
    pub fn text_color(&self) -> Option<&str> {
        self.text_color.as_deref()
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Name before the first `/` (`"Jonas Kahnwald / Adam"` → `"Jonas Kahnwald"`).
    pub fn base_name(&self) -> &str {
        self.name().split('/').next().unwrap_or_default().trim()
    }
}

/// Fixed, ordered list of characters. The position of a character is its row index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    characters: Vec<Character>,
    rows: BTreeMap<CharacterId, usize>,
}

impl Roster {
    /// Builds a roster. Duplicate ids keep their first row.
    pub fn new(characters: impl IntoIterator<Item = Character>) -> Self {
        let mut roster = Self::default();
        for character in characters {
            if roster.rows.contains_key(character.id()) {
                continue;
            }
            roster.rows.insert(character.id().clone(), roster.characters.len());
            roster.characters.push(character);
        }
        roster
    }

    pub fn from_records(records: &[CharacterRecord]) -> Result<Self, IdError> {
        let characters = records
            .iter()
            .map(|record| {
                let id = CharacterId::new(&record.name)?;
                let color = record.color.clone().unwrap_or_else(|| DEFAULT_CHARACTER_COLOR.to_owned());
                let mut character = Character::new(id, color).with_aliases(record.aliases.clone());
                if let Some(text_color) = &record.text_color {
                    character = character.with_text_color(text_color.clone());
                }
                Ok(character)
            })
            .collect::<Result<Vec<_>, IdError>>()?;
        Ok(Self::new(characters))
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn get(&self, row: usize) -> Option<&Character> {
        self.characters.get(row)
    }

    pub fn row_of(&self, id: &CharacterId) -> Option<usize> {
        self.rows.get(id).copied()
    }

    pub fn contains(&self, id: &CharacterId) -> bool {
        self.rows.contains_key(id)
    }

    pub fn character(&self, id: &CharacterId) -> Option<&Character> {
        self.row_of(id).and_then(|row| self.get(row))
    }

    /// Immediate upper and lower neighbors of `row` in roster order.
    pub fn neighbors(&self, row: usize) -> (Option<&Character>, Option<&Character>) {
        let above = row.checked_sub(1).and_then(|row| self.get(row));
        let below = self.get(row + 1);
        (above, below)
    }

    /// Resolves a name by full name, base name, or alias after stripping world markers.
    pub fn find_exact(&self, raw: &str) -> Option<&Character> {
        let name = normalize_character_name(raw);
        if name.is_empty() {
            return None;
        }
        self.characters.iter().find(|character| {
            character.name() == name
                || character.base_name() == name
                || character.aliases.iter().any(|alias| alias.trim() == name)
        })
    }

    /// Like [`Roster::find_exact`], falling back to substring containment in either direction.
    pub fn find_loose(&self, raw: &str) -> Option<&Character> {
        if let Some(found) = self.find_exact(raw) {
            return Some(found);
        }

        let name = normalize_character_name(raw);
        if name.is_empty() {
            return None;
        }
        self.characters.iter().find(|character| {
            let full = normalize_character_name(character.name());
            !full.is_empty() && (full.contains(name) || name.contains(full))
        })
    }
}

/// Strips a trailing world marker such as `"(J)"` and surrounding whitespace.
pub fn normalize_character_name(raw: &str) -> &str {
    raw.split('(').next().unwrap_or_default().trim()
}
