// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! SVG path data for plan shapes, in plot coordinates (y grows downward).

use std::fmt::Write as _;

use schemars::JsonSchema;
use serde::Serialize;

/// Base unit of the participation indicator dimensions.
pub const INDICATOR_BORDER_WIDTH: f64 = 0.12;
/// Length of the arms of a corner indicator, past the corner radius.
pub const INDICATOR_ARM_LENGTH: f64 = INDICATOR_BORDER_WIDTH * 1.8;
pub const INDICATOR_THICKNESS: f64 = INDICATOR_BORDER_WIDTH * 0.6;
/// Side-line indicator length relative to the nominal cell height.
pub const SIDE_LINE_RATIO: f64 = 0.35;

/// Where on a cell a participation indicator sits; slot `n` of a merged column maps to the
/// `n`-th variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    LeftEdge,
    RightEdge,
}

impl IndicatorKind {
    pub const ALL: [Self; 6] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::LeftEdge,
        Self::RightEdge,
    ];

    pub fn from_slot(slot: usize) -> Option<Self> {
        Self::ALL.get(slot).copied()
    }

    /// Anchor point on the cell rectangle `[x0, x1] x [y0, y1]`.
    pub fn anchor(self, x0: f64, y0: f64, x1: f64, y1: f64) -> (f64, f64) {
        let mid = (y0 + y1) / 2.0;
        match self {
            Self::TopLeft => (x0, y0),
            Self::TopRight => (x1, y0),
            Self::BottomLeft => (x0, y1),
            Self::BottomRight => (x1, y1),
            Self::LeftEdge => (x0, mid),
            Self::RightEdge => (x1, mid),
        }
    }
}

/// Formats a coordinate with at most six decimals and no trailing zeros.
pub fn fmt_coord(value: f64) -> String {
    let mut out = format!("{value:.6}");
    if out.contains('.') {
        let trimmed = out.trim_end_matches('0').trim_end_matches('.').len();
        out.truncate(trimmed);
    }
    if out == "-0" {
        out = "0".to_owned();
    }
    out
}

struct PathBuilder {
    out: String,
}

impl PathBuilder {
    fn new() -> Self {
        Self { out: String::new() }
    }

    fn op(&mut self, op: char, points: &[(f64, f64)]) -> &mut Self {
        if !self.out.is_empty() {
            self.out.push(' ');
        }
        self.out.push(op);
        for (x, y) in points {
            let _ = write!(self.out, " {} {}", fmt_coord(*x), fmt_coord(*y));
        }
        self
    }

    fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.op('M', &[(x, y)])
    }

    fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.op('L', &[(x, y)])
    }

    fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> &mut Self {
        self.op('Q', &[(cx, cy), (x, y)])
    }

    fn close(&mut self) -> String {
        self.op('Z', &[]);
        std::mem::take(&mut self.out)
    }
}

pub fn rounded_rect(x0: f64, y0: f64, x1: f64, y1: f64, r: f64) -> String {
    PathBuilder::new()
        .move_to(x0 + r, y0)
        .line_to(x1 - r, y0)
        .quad_to(x1, y0, x1, y0 + r)
        .line_to(x1, y1 - r)
        .quad_to(x1, y1, x1 - r, y1)
        .line_to(x0 + r, y1)
        .quad_to(x0, y1, x0, y1 - r)
        .line_to(x0, y0 + r)
        .quad_to(x0, y0, x0 + r, y0)
        .close()
}

/// Left half of a rounded rectangle, square on its right edge at `x_mid`.
pub fn left_half(x0: f64, y0: f64, x_mid: f64, y1: f64, r: f64) -> String {
    PathBuilder::new()
        .move_to(x0 + r, y0)
        .line_to(x_mid, y0)
        .line_to(x_mid, y1)
        .line_to(x0 + r, y1)
        .quad_to(x0, y1, x0, y1 - r)
        .line_to(x0, y0 + r)
        .quad_to(x0, y0, x0 + r, y0)
        .close()
}

/// Right half of a rounded rectangle, square on its left edge at `x_mid`.
pub fn right_half(x_mid: f64, y0: f64, x1: f64, y1: f64, r: f64) -> String {
    PathBuilder::new()
        .move_to(x_mid, y0)
        .line_to(x1 - r, y0)
        .quad_to(x1, y0, x1, y0 + r)
        .line_to(x1, y1 - r)
        .quad_to(x1, y1, x1 - r, y1)
        .line_to(x_mid, y1)
        .line_to(x_mid, y0)
        .close()
}

/// Indicator outline anchored at `(x, y)`: an L-shaped bracket hugging the rounded corner, or
/// a thin bar along a side edge for the edge kinds.
pub fn indicator(kind: IndicatorKind, x: f64, y: f64, r: f64, cell_height: f64) -> String {
    let arm = INDICATOR_ARM_LENGTH;
    let t = INDICATOR_THICKNESS;
    let mut path = PathBuilder::new();
    match kind {
        IndicatorKind::TopLeft => path
            .move_to(x, y + r + arm)
            .line_to(x, y + r)
            .quad_to(x, y, x + r, y)
            .line_to(x + r + arm, y)
            .line_to(x + r + arm, y + t)
            .line_to(x + r, y + t)
            .quad_to(x + t, y + t, x + t, y + r)
            .line_to(x + t, y + r + arm)
            .close(),
        IndicatorKind::TopRight => path
            .move_to(x - r - arm, y)
            .line_to(x - r, y)
            .quad_to(x, y, x, y + r)
            .line_to(x, y + r + arm)
            .line_to(x - t, y + r + arm)
            .line_to(x - t, y + r)
            .quad_to(x - t, y + t, x - r, y + t)
            .line_to(x - r - arm, y + t)
            .close(),
        IndicatorKind::BottomLeft => path
            .move_to(x + r + arm, y)
            .line_to(x + r, y)
            .quad_to(x, y, x, y - r)
            .line_to(x, y - r - arm)
            .line_to(x + t, y - r - arm)
            .line_to(x + t, y - r)
            .quad_to(x + t, y - t, x + r, y - t)
            .line_to(x + r + arm, y - t)
            .close(),
        IndicatorKind::BottomRight => path
            .move_to(x, y - r - arm)
            .line_to(x, y - r)
            .quad_to(x, y, x - r, y)
            .line_to(x - r - arm, y)
            .line_to(x - r - arm, y - t)
            .line_to(x - r, y - t)
            .quad_to(x - t, y - t, x - t, y - r)
            .line_to(x - t, y - r - arm)
            .close(),
        IndicatorKind::LeftEdge | IndicatorKind::RightEdge => {
            let half = cell_height * SIDE_LINE_RATIO / 2.0;
            let (top, bottom) = (y - half, y + half);
            // Side bars are half as thick as the corner brackets.
            let (left, right) = match kind {
                IndicatorKind::LeftEdge => (x, x + t / 2.0),
                _ => (x - t / 2.0, x),
            };
            path.move_to(left, top)
                .line_to(right, top)
                .line_to(right, bottom)
                .line_to(left, bottom)
                .close()
        }
    }
}
