// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Source record parsing.

pub mod records;
pub mod tags;

pub use records::{
    ingest_events, is_truthy, parse_date, parse_event_records, EventRecord, IngestError,
};
pub use tags::parse_cross_ref_tags;
