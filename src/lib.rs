// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Chronogrid: deterministic layout engine for character-by-date timeline charts.
//!
//! Events are grouped into columns, each column resolves which character rows expand to fit
//! their description, and the result is emitted as a [`render::LayoutPlan`] of positioned
//! shapes, texts and hover metadata. Drawing the plan is left to the consumer.

pub mod config;
pub mod format;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod query;
pub mod render;

pub use config::{ChartConfig, ConfigError, TimelineConfig};
pub use pipeline::{build_timeline, TimelineError};
pub use render::LayoutPlan;
