// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Column layout for the timeline grid.
//!
//! Events are grouped into columns, descriptions are moved so no column repeats a primary
//! character, and each column resolves the vertical span of every active cell.

pub mod assign;
pub mod column;
pub mod expansion;
pub mod grouping;
pub mod wrap;

pub use assign::{assign_descriptions, redistribute_descriptions, Assignment};
pub use column::{
    AssignedDescription, CellFlags, ColumnContext, ParticipationSlots, MAX_PARTICIPATION_SLOTS,
};
pub use expansion::{
    decide_expansion, resolve_column, Cell, CellState, Contraction, Decision, ExpandDirection,
    Expansion, NeighborState,
};
pub use grouping::{group_events, EventGroup};
pub use wrap::{is_overflowing, text_value, wrap_lines, wrap_text, ELLIPSIS, LINE_BREAK};
