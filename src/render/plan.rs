// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The layout plan: positioned shapes, texts and metadata handed to a renderer.
//!
//! Coordinates are plot units. Rows grow downward from row 0 at `y = 0`; columns grow to the
//! right from `x = 0`. The plan is plain data and serializes to JSON as is.

use schemars::JsonSchema;
use serde::Serialize;

use super::path::IndicatorKind;
use crate::layout::CellState;

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct LayoutPlan {
    pub columns: Vec<ColumnSummary>,
    /// Draw order: non-expanded shapes, then expanded cells, then row labels.
    pub shapes: Vec<PlanShape>,
    pub texts: Vec<TextPlacement>,
    pub hovers: Vec<HoverInfo>,
    pub markers: Vec<CrossRefMarker>,
    pub ticks: Vec<AxisTick>,
    pub row_ticks: Vec<RowTick>,
    pub viewport: Viewport,
}

impl LayoutPlan {
    /// JSON schema of the serialized plan.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(LayoutPlan)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ColumnSummary {
    pub position: usize,
    pub x: f64,
    /// ISO date of the column's first event.
    pub date: String,
    pub events: Vec<u32>,
    pub cells: Vec<CellSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CellSummary {
    pub character: String,
    pub row: usize,
    pub y0: f64,
    pub y1: f64,
    pub state: CellState,
    pub height_multiplier: f64,
    pub description_event: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct PlanShape {
    pub shape: Shape,
    pub style: ShapeStyle,
    pub role: ShapeRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Rect { x0: f64, y0: f64, x1: f64, y1: f64 },
    RoundedRect { x0: f64, y0: f64, x1: f64, y1: f64, radius: f64, path: String },
    SplitHalf { side: HalfSide, x0: f64, y0: f64, x1: f64, y1: f64, radius: f64, path: String },
    Indicator { indicator: IndicatorKind, x: f64, y: f64, path: String },
}

impl Shape {
    /// Vertical extent of the shape, for shapes that have one.
    pub fn y_span(&self) -> Option<(f64, f64)> {
        match self {
            Self::Rect { y0, y1, .. }
            | Self::RoundedRect { y0, y1, .. }
            | Self::SplitHalf { y0, y1, .. } => Some((*y0, *y1)),
            Self::Indicator { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum HalfSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Below,
    Between,
    Above,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Outline {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ShapeStyle {
    pub fill: String,
    pub layer: Layer,
    pub outline: Option<Outline>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum ShapeRole {
    Filler { column: usize, row: usize },
    Cell { column: usize, row: usize },
    Indicator { column: usize, row: usize, slot: usize },
    World { column: usize },
    RowLabel { row: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    Description,
    RowLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct TextPlacement {
    pub id: String,
    pub kind: TextKind,
    pub x: f64,
    pub y: f64,
    /// Line-break-joined text.
    pub text: String,
    pub color: String,
    pub font_size: u32,
    pub character: String,
    pub event: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Star,
    Skull,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct HoverInfo {
    pub column: usize,
    pub x: f64,
    pub y: f64,
    /// Row the hover belongs to.
    pub character: String,
    pub event: u32,
    /// Primary character of the shown event.
    pub title: String,
    pub date: String,
    pub description: String,
    pub characters: String,
    pub background: String,
    pub text_color: String,
    pub badge: Badge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MarkerIcon {
    Clock,
    Globe,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CrossRefMarker {
    pub id: String,
    pub kind: String,
    pub number: u32,
    pub event: u32,
    pub slot: usize,
    pub column: usize,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
    pub icon: MarkerIcon,
    /// Partner date as `DD/MM/YYYY`.
    pub destination: Option<String>,
    pub partners: Vec<u32>,
    pub hover_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct AxisTick {
    pub column: usize,
    pub x: f64,
    pub label: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct RowTick {
    pub row: usize,
    pub y: f64,
    pub character: String,
}

/// Visible plot range. `y_range` runs from the bottom edge to the top edge, so it is
/// decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct Viewport {
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}
