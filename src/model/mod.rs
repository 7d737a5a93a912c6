// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Events are immutable records ordered by date; the roster is static configuration that
//! binds every character to a row and a color.

pub mod event;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod roster;
pub mod world;

pub use event::{CrossRefKind, CrossRefTag, CrossRefTags, Event};
pub use ids::{CharacterId, EventId, Id, IdError, WorldId};
pub use roster::{normalize_character_name, Character, CharacterRecord, Roster};
pub use world::World;
