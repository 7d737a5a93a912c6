// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout plan construction.
//!
//! The builder turns resolved columns into positioned shapes, texts, hover records and
//! cross-reference markers. Nothing here draws; a renderer consumes the serialized
//! [`LayoutPlan`].

pub mod builder;
pub mod color;
pub mod path;
pub mod plan;
pub mod theme;

pub use builder::{build_layout, ResolvedColumn};
pub use color::{contrast_text, dim, parse_hex, DateBackgrounds};
pub use path::{fmt_coord, IndicatorKind};
pub use plan::{
    AxisTick, Badge, CellSummary, ColumnSummary, CrossRefMarker, HalfSide, HoverInfo, Layer,
    LayoutPlan, MarkerIcon, Outline, PlanShape, RowTick, Shape, ShapeRole, ShapeStyle, TextKind,
    TextPlacement, Viewport,
};
pub use theme::{ParityBoundary, Theme, WorldFill};
