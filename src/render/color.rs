// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::warn;

use super::theme::Theme;
use crate::format::parse_date;

/// Parses `#rrggbb`.
pub fn parse_hex(color: &str) -> Option<[u8; 3]> {
    let hex = color.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |idx: usize| u8::from_str_radix(&hex[idx..idx + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Scales every channel by `factor`, truncating. Colors that are not `#rrggbb` are returned as is.
pub fn dim(color: &str, factor: f64) -> String {
    let Some(rgb) = parse_hex(color) else {
        return color.to_owned();
    };
    let scale = |channel: u8| (f64::from(channel) * factor).clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", scale(rgb[0]), scale(rgb[1]), scale(rgb[2]))
}

pub fn mean_brightness(color: &str) -> Option<f64> {
    let [r, g, b] = parse_hex(color)?;
    Some((f64::from(r) + f64::from(g) + f64::from(b)) / 3.0)
}

/// Black on bright backgrounds, white otherwise.
pub fn contrast_text(background: &str) -> &'static str {
    match mean_brightness(background) {
        Some(brightness) if brightness > 128.0 => "black",
        _ => "white",
    }
}

/// Background color of every unique date, for non-participant cells.
///
/// Unique dates alternate between the two theme colors by their 1-based rank. A parity
/// boundary pins its own date to a configured color and selects the pattern for the dates
/// that follow it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateBackgrounds {
    colors: BTreeMap<NaiveDate, String>,
}

impl DateBackgrounds {
    pub fn new(dates: impl IntoIterator<Item = NaiveDate>, theme: &Theme) -> Self {
        let mut boundaries = BTreeMap::new();
        for boundary in &theme.parity_boundaries {
            match parse_date(&boundary.date) {
                Some(date) => {
                    boundaries.insert(date, boundary);
                }
                None => warn!(date = %boundary.date, "ignoring unparseable parity boundary"),
            }
        }

        let mut colors = BTreeMap::new();
        let mut alternate = false;
        for date in dates {
            if colors.contains_key(&date) {
                continue;
            }
            let rank = colors.len() + 1;
            let color = match boundaries.get(&date) {
                Some(boundary) => {
                    alternate = boundary.alternate;
                    theme.date_color(boundary.color)
                }
                None if alternate => theme.date_color(if rank % 2 == 1 { 1 } else { 0 }),
                None => theme.date_color(if rank % 2 == 1 { 0 } else { 1 }),
            };
            colors.insert(date, color.to_owned());
        }

        Self { colors }
    }

    pub fn color_for<'a>(&'a self, date: NaiveDate, theme: &'a Theme) -> &'a str {
        self.colors.get(&date).map_or(theme.date_color(0), String::as_str)
    }
}
