// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::World;

/// Colors of the chart. One theme covers every output variant; only the values differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Theme {
    pub background: String,
    /// Non-participant fill, alternating per unique date.
    pub date_colors: [String; 2],
    pub parity_boundaries: Vec<ParityBoundary>,
    pub death_fill: String,
    /// Per-channel factor applied to a character color for important events.
    pub important_dim: f64,
    pub description_text: String,
    pub death_description_text: String,
    pub indicator_fill: String,
    pub indicator_outline: String,
    pub indicator_outline_width: f64,
    pub label_border: String,
    pub label_border_width: f64,
    pub label_text: String,
    pub world_colors: BTreeMap<String, String>,
    pub world_fallback: String,
    pub time_travel_marker: String,
    pub world_swap_marker: String,
}

/// A date that pins the background color and switches the alternation pattern after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ParityBoundary {
    /// Any date format accepted for event records.
    pub date: String,
    /// Index into [`Theme::date_colors`].
    pub color: usize,
    /// Whether dates after the boundary use the swapped pattern.
    pub alternate: bool,
}

impl Default for Theme {
    fn default() -> Self {
        let world_colors = [
            ("Jonas", "#f9b405"),
            ("Martha", "#9803f6"),
            ("Origin", "#032ff6"),
            ("Origin (End)", "#032ff6"),
        ]
        .into_iter()
        .map(|(world, color)| (world.to_owned(), color.to_owned()))
        .collect();

        Self {
            background: "#000000".to_owned(),
            date_colors: ["#151B23".to_owned(), "#152323".to_owned()],
            parity_boundaries: vec![
                ParityBoundary { date: "21-06-1921".to_owned(), color: 0, alternate: true },
                ParityBoundary { date: "01-01-2021".to_owned(), color: 1, alternate: false },
            ],
            death_fill: "#868686".to_owned(),
            important_dim: 0.7,
            description_text: "#FFFFFF".to_owned(),
            death_description_text: "#000000".to_owned(),
            indicator_fill: "rgba(192, 192, 192, 0.9)".to_owned(),
            indicator_outline: "#111111".to_owned(),
            indicator_outline_width: 0.5,
            label_border: "black".to_owned(),
            label_border_width: 2.0,
            label_text: "white".to_owned(),
            world_colors,
            world_fallback: "#FFFFFF".to_owned(),
            time_travel_marker: "#4CAF50".to_owned(),
            world_swap_marker: "#2196F3".to_owned(),
        }
    }
}

impl Theme {
    pub fn world_color(&self, world: &str) -> &str {
        self.world_colors.get(world.trim()).map_or(self.world_fallback.as_str(), String::as_str)
    }

    /// Strip colors for a column's world: one color, or two for a dual world.
    pub fn world_fill(&self, world: Option<&World>) -> WorldFill<'_> {
        match world {
            None => WorldFill::Solid(&self.world_fallback),
            Some(World::Single(world)) | Some(World::Other(world)) => {
                WorldFill::Solid(self.world_color(world.as_str()))
            }
            Some(World::Dual(first, second)) => {
                WorldFill::Split(self.world_color(first.as_str()), self.world_color(second.as_str()))
            }
        }
    }

    pub fn date_color(&self, index: usize) -> &str {
        &self.date_colors[index % self.date_colors.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldFill<'a> {
    Solid(&'a str),
    Split(&'a str, &'a str),
}
