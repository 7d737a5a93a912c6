// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout configuration.
//!
//! Every option has a default so partial config files are valid. Files are TOML or JSON,
//! chosen by extension.

use std::fmt;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{CharacterRecord, IdError, Roster};
use crate::render::theme::Theme;

pub const DEFAULT_MAX_GROUP_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TimelineConfig {
    /// Vertical pitch between roster rows.
    pub character_spacing: f64,
    /// Horizontal pitch between columns.
    pub column_spacing: f64,
    /// Half-width of a cell around the column center.
    pub cell_width: f64,
    /// Nominal cell height.
    pub cell_height: f64,
    pub show_non_participants: bool,
    pub asymmetric_expansion: bool,
    pub max_group_size: usize,
    pub corner_radius: f64,
    /// Space above the first row kept free in the viewport.
    pub top_margin: f64,
    pub ratios: ExpansionRatios,
    pub text: TextLayout,
    pub theme: Theme,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            character_spacing: 1.0,
            column_spacing: 1.0,
            cell_width: 0.8,
            cell_height: 0.4,
            show_non_participants: true,
            asymmetric_expansion: false,
            max_group_size: DEFAULT_MAX_GROUP_SIZE,
            corner_radius: 0.15,
            top_margin: 6.0,
            ratios: ExpansionRatios::default(),
            text: TextLayout::default(),
            theme: Theme::default(),
        }
    }
}

impl TimelineConfig {
    /// Poster parameters: wide row pitch, tall cells, asymmetric expansion.
    pub fn showcase() -> Self {
        Self {
            character_spacing: 2.5,
            column_spacing: 1.5,
            cell_width: 0.7,
            cell_height: 2.4,
            show_non_participants: true,
            asymmetric_expansion: true,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("character_spacing", self.character_spacing),
            ("column_spacing", self.column_spacing),
            ("cell_width", self.cell_width),
            ("cell_height", self.cell_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("corner_radius", self.corner_radius),
            ("top_margin", self.top_margin),
            ("ratios.intrusion", self.ratios.intrusion),
            ("ratios.squeezed_reach", self.ratios.squeezed_reach),
            ("ratios.contracted_reach", self.ratios.contracted_reach),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.max_group_size == 0 {
            return Err(ConfigError::ZeroGroupSize);
        }
        if self.text.probe_lines == 0 || self.text.probe_width == 0 || self.text.cell_width == 0 {
            return Err(ConfigError::ZeroTextWidth);
        }
        Ok(())
    }
}

/// Size classes of the expansion decision table, relative to the nominal cell height.
///
/// `symmetric` and `one_sided` drive the expanded geometry directly. `squeezed`,
/// `contract_one` and `contract_both` label the crowded cases; their geometry comes from
/// `squeezed_reach` and `contracted_reach` (half-extents in nominal heights) and `intrusion`
/// (how far a one-sided expansion reaches past its midline into a contracted neighbor).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ExpansionRatios {
    pub symmetric: f64,
    pub one_sided: f64,
    pub squeezed: f64,
    pub contract_one: f64,
    pub contract_both: f64,
    pub intrusion: f64,
    pub squeezed_reach: f64,
    pub contracted_reach: f64,
}

impl Default for ExpansionRatios {
    fn default() -> Self {
        Self {
            symmetric: 2.0,
            one_sided: 1.5,
            squeezed: 0.9,
            contract_one: 0.4,
            contract_both: 0.3,
            intrusion: 1.0 / 3.0,
            squeezed_reach: 0.85,
            contracted_reach: 0.125,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TextLayout {
    /// Width used when probing whether a description overflows its nominal cell.
    pub probe_width: usize,
    pub probe_lines: usize,
    /// Width of description text drawn inside cells.
    pub cell_width: usize,
    pub plain_lines: usize,
    pub one_sided_lines: usize,
    pub two_sided_lines: usize,
    pub hover_width: usize,
    pub characters_width: usize,
    pub description_font_size: u32,
    pub label_font_size: u32,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            probe_width: 16,
            probe_lines: 3,
            cell_width: 18,
            plain_lines: 4,
            one_sided_lines: 8,
            two_sided_lines: 13,
            hover_width: 50,
            characters_width: 40,
            description_font_size: 14,
            label_font_size: 8,
        }
    }
}

/// On-disk chart configuration: layout options plus the roster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub layout: TimelineConfig,
    pub roster: Vec<CharacterRecord>,
}

impl ChartConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        Self::parse(path, &raw)
    }

    /// Parses `raw` in the format implied by `path`'s extension.
    pub fn parse(path: &Path, raw: &str) -> Result<Self, ConfigError> {
        let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
        let config: Self = match extension.to_ascii_lowercase().as_str() {
            "toml" => toml::from_str(raw).map_err(|err| ConfigError::Parse {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?,
            "json" => serde_json::from_str(raw).map_err(|err| ConfigError::Parse {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?,
            _ => return Err(ConfigError::UnsupportedFormat { path: path.to_path_buf() }),
        };
        config.layout.validate()?;
        Ok(config)
    }

    pub fn roster(&self) -> Result<Roster, ConfigError> {
        Roster::from_records(&self.roster).map_err(ConfigError::Roster)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    NotPositive { field: &'static str, value: f64 },
    Negative { field: &'static str, value: f64 },
    ZeroGroupSize,
    ZeroTextWidth,
    Read { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, message: String },
    UnsupportedFormat { path: PathBuf },
    Roster(IdError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive { field, value } => write!(f, "{field} must be positive (got {value})"),
            Self::Negative { field, value } => write!(f, "{field} must not be negative (got {value})"),
            Self::ZeroGroupSize => f.write_str("max_group_size must be at least 1"),
            Self::ZeroTextWidth => f.write_str("text widths and probe line count must be at least 1"),
            Self::Read { path, source } => write!(f, "failed to read {}: {source}", path.display()),
            Self::Parse { path, message } => write!(f, "failed to parse {}: {message}", path.display()),
            Self::UnsupportedFormat { path } => {
                write!(f, "unsupported config format for {} (expected .toml or .json)", path.display())
            }
            Self::Roster(err) => write!(f, "invalid roster entry: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Roster(err) => Some(err),
            _ => None,
        }
    }
}
