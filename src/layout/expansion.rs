// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Cell expansion and neighbor contraction.
//!
//! A row whose description overflows its nominal cell grows toward whatever free space its
//! immediate roster neighbors leave. When a neighbor is busy in the same column but has no
//! text of its own, that neighbor shrinks on the touching side to make room. Rows are laid
//! out top to bottom: "above" means the previous roster row (smaller y).

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Serialize;
use tracing::trace;

use super::column::ColumnContext;
use crate::config::{ExpansionRatios, TimelineConfig};
use crate::model::{Character, CharacterId, EventId, Roster};

/// Which way an expanded cell grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExpandDirection {
    /// Grows evenly into both free neighbors.
    Both,
    /// Grows a little into both busy neighbors.
    Squeezed,
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct Expansion {
    direction: ExpandDirection,
    /// A one-sided expansion also reaches past its midline on the side it does not grow
    /// toward, into the contracted neighbor there.
    intrudes: bool,
    height_ratio: f64,
}

impl Expansion {
    pub fn direction(&self) -> ExpandDirection {
        self.direction
    }

    pub fn intrudes(&self) -> bool {
        self.intrudes
    }

    pub fn height_ratio(&self) -> f64 {
        self.height_ratio
    }

    pub fn is_two_sided(&self) -> bool {
        matches!(self.direction, ExpandDirection::Both | ExpandDirection::Squeezed)
    }

    /// Vertical span around `center` for nominal height `h`.
    pub fn span(&self, center: f64, h: f64, ratios: &ExpansionRatios) -> (f64, f64) {
        let half = h / 2.0;
        let reach = (ratios.one_sided - 0.5) * h;
        let intrusion = if self.intrudes { ratios.intrusion * h } else { 0.0 };
        match self.direction {
            ExpandDirection::Both => {
                let half_extent = ratios.symmetric / 2.0 * h;
                (center - half_extent, center + half_extent)
            }
            ExpandDirection::Squeezed => {
                let half_extent = ratios.squeezed_reach * h;
                (center - half_extent, center + half_extent)
            }
            ExpandDirection::Above => (center - reach, center + half + intrusion),
            ExpandDirection::Below => (center - half - intrusion, center + reach),
        }
    }
}

/// Sides on which a cell gives up room to an expanding neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct Contraction {
    above: bool,
    below: bool,
    height_ratio: f64,
}

impl Contraction {
    fn new(side: Side, height_ratio: f64) -> Self {
        Self { above: side == Side::Above, below: side == Side::Below, height_ratio }
    }

    /// Keeps both touched sides and the stronger shrink when two neighbors expand into one row.
    fn merge(self, other: Self) -> Self {
        Self {
            above: self.above || other.above,
            below: self.below || other.below,
            height_ratio: self.height_ratio.min(other.height_ratio),
        }
    }

    pub fn above(&self) -> bool {
        self.above
    }

    pub fn below(&self) -> bool {
        self.below
    }

    pub fn height_ratio(&self) -> f64 {
        self.height_ratio
    }

    pub fn span(&self, center: f64, h: f64, ratios: &ExpansionRatios) -> (f64, f64) {
        let half = h / 2.0;
        let shrunk = ratios.contracted_reach * h;
        let y0 = if self.above { center - shrunk } else { center - half };
        let y1 = if self.below { center + shrunk } else { center + half };
        (y0, y1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CellState {
    Normal,
    Expanded(Expansion),
    Contracted(Contraction),
}

impl CellState {
    /// Height relative to the nominal cell height, as named by the decision table.
    pub fn height_multiplier(&self) -> f64 {
        match self {
            Self::Normal => 1.0,
            Self::Expanded(expansion) => expansion.height_ratio,
            Self::Contracted(contraction) => contraction.height_ratio,
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, Self::Expanded(_))
    }
}

/// What a column knows about one neighbor of an overflowing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborState {
    pub active: bool,
    pub has_text: bool,
}

/// Outcome of the decision table for one overflowing row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub expansion: Expansion,
    /// Height ratio imposed on the row above, contracted on its lower side.
    pub contract_above: Option<f64>,
    /// Height ratio imposed on the row below, contracted on its upper side.
    pub contract_below: Option<f64>,
}

/// Picks the expansion of the overflowing row `row` from the state of its two neighbors.
pub fn decide_expansion(
    row: usize,
    above: NeighborState,
    below: NeighborState,
    asymmetric: bool,
    ratios: &ExpansionRatios,
) -> Decision {
    let expand = |direction, intrudes, height_ratio| Expansion { direction, intrudes, height_ratio };

    match (above.active, below.active) {
        (false, false) => Decision {
            expansion: expand(ExpandDirection::Both, false, ratios.symmetric),
            contract_above: None,
            contract_below: None,
        },
        (false, true) => {
            if asymmetric && below.has_text {
                Decision {
                    expansion: expand(ExpandDirection::Above, false, ratios.one_sided),
                    contract_above: None,
                    contract_below: None,
                }
            } else {
                Decision {
                    expansion: expand(ExpandDirection::Above, true, ratios.one_sided),
                    contract_above: None,
                    contract_below: (!below.has_text).then_some(ratios.contract_one),
                }
            }
        }
        (true, false) => {
            if asymmetric && above.has_text {
                Decision {
                    expansion: expand(ExpandDirection::Below, false, ratios.one_sided),
                    contract_above: None,
                    contract_below: None,
                }
            } else {
                Decision {
                    expansion: expand(ExpandDirection::Below, true, ratios.one_sided),
                    contract_above: (!above.has_text).then_some(ratios.contract_one),
                    contract_below: None,
                }
            }
        }
        (true, true) if asymmetric && (above.has_text || below.has_text) => {
            match (above.has_text, below.has_text) {
                (true, true) => {
                    let direction =
                        if row % 2 == 0 { ExpandDirection::Above } else { ExpandDirection::Below };
                    Decision {
                        expansion: expand(direction, false, ratios.one_sided),
                        contract_above: None,
                        contract_below: None,
                    }
                }
                (true, false) => Decision {
                    expansion: expand(ExpandDirection::Below, false, ratios.one_sided),
                    contract_above: None,
                    contract_below: Some(ratios.contract_both),
                },
                _ => Decision {
                    expansion: expand(ExpandDirection::Above, false, ratios.one_sided),
                    contract_above: Some(ratios.contract_both),
                    contract_below: None,
                },
            }
        }
        (true, true) => Decision {
            expansion: expand(ExpandDirection::Squeezed, true, ratios.squeezed),
            contract_above: (!above.has_text).then_some(ratios.contract_both),
            contract_below: (!below.has_text).then_some(ratios.contract_both),
        },
    }
}

/// Resolved geometry of one active character's cell in a column.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    character: CharacterId,
    row: usize,
    y0: f64,
    y1: f64,
    state: CellState,
    description: Option<EventId>,
    line_cap: usize,
}

impl Cell {
    pub fn character(&self) -> &CharacterId {
        &self.character
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn y0(&self) -> f64 {
        self.y0
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn center(&self) -> f64 {
        (self.y0 + self.y1) / 2.0
    }

    pub fn state(&self) -> &CellState {
        &self.state
    }

    /// Event whose description is drawn in this cell.
    pub fn description(&self) -> Option<EventId> {
        self.description
    }

    /// Maximum number of description lines the cell can show.
    pub fn line_cap(&self) -> usize {
        self.line_cap
    }
}

/// Resolves the cells of every active roster row in one column, ordered by row.
pub fn resolve_column(context: &ColumnContext<'_>, roster: &Roster, config: &TimelineConfig) -> Vec<Cell> {
    let ratios = &config.ratios;
    let neighbor = |character: Option<&Character>| -> NeighborState {
        let Some(character) = character else {
            return NeighborState::default();
        };
        NeighborState { active: context.is_active(character.id()), has_text: context.has_text(character.id()) }
    };

    let mut expansions = BTreeMap::<usize, Expansion>::new();
    let mut contractions = BTreeMap::<usize, Contraction>::new();
    let mut contract = |row: usize, contraction: Contraction| {
        contractions
            .entry(row)
            .and_modify(|existing| *existing = existing.merge(contraction))
            .or_insert(contraction);
    };

    for (character, assigned) in context.descriptions() {
        if !assigned.is_overflowing() {
            continue;
        }
        let Some(row) = roster.row_of(character) else {
            continue;
        };

        let (above, below) = roster.neighbors(row);
        let (above, below) = (neighbor(above), neighbor(below));
        let decision = decide_expansion(row, above, below, config.asymmetric_expansion, ratios);
        trace!(row, ?decision, "expanding cell");

        expansions.insert(row, decision.expansion);
        if let (Some(ratio), Some(above_row)) = (decision.contract_above, row.checked_sub(1)) {
            contract(above_row, Contraction::new(Side::Below, ratio));
        }
        if let Some(ratio) = decision.contract_below {
            contract(row + 1, Contraction::new(Side::Above, ratio));
        }
    }

    let h = config.cell_height;
    let text = &config.text;
    let mut cells = Vec::new();
    for (row, character) in roster.characters().iter().enumerate() {
        if !context.is_active(character.id()) {
            continue;
        }

        let center = row as f64 * config.character_spacing;
        let state = match (expansions.get(&row), contractions.get(&row)) {
            (Some(expansion), _) => CellState::Expanded(*expansion),
            (None, Some(contraction)) => CellState::Contracted(*contraction),
            (None, None) => CellState::Normal,
        };
        let (y0, y1) = match &state {
            CellState::Normal => (center - h / 2.0, center + h / 2.0),
            CellState::Expanded(expansion) => expansion.span(center, h, ratios),
            CellState::Contracted(contraction) => contraction.span(center, h, ratios),
        };
        let line_cap = match &state {
            CellState::Expanded(expansion) if expansion.is_two_sided() => text.two_sided_lines,
            CellState::Expanded(_) => text.one_sided_lines,
            _ => text.plain_lines,
        };

        cells.push(Cell {
            character: character.id().clone(),
            row,
            y0,
            y1,
            state,
            description: context.description(character.id()).map(|assigned| assigned.event_id()),
            line_cap,
        });
    }

    cells
}
