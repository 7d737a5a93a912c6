// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use chrono::{Duration, NaiveDate};

use chronogrid::model::{
    Character, CharacterId, CrossRefKind, CrossRefTag, Event, EventId, Roster, World,
};
use chronogrid::render::LayoutPlan;

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    if prefix.len() >= target_len {
        return prefix[..target_len].to_owned();
    }

    let mut out = String::with_capacity(target_len);
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(fill);
        if out.len() % 7 == 0 {
            out.push(' ');
        }
    }
    out.truncate(target_len);
    out
}

pub fn checksum_plan(plan: &LayoutPlan) -> u64 {
    let mut acc = 0u64;
    acc = acc.wrapping_mul(131).wrapping_add(plan.columns.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(plan.shapes.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(plan.texts.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(plan.markers.len() as u64);

    for column in &plan.columns {
        for cell in &column.cells {
            acc = acc.wrapping_mul(131).wrapping_add(cell.row as u64);
            acc = acc.wrapping_mul(131).wrapping_add(cell.y0.to_bits());
            acc = acc.wrapping_mul(131).wrapping_add(cell.y1.to_bits());
        }
    }
    for text in &plan.texts {
        acc = acc.wrapping_mul(131).wrapping_add(text.text.len() as u64);
    }
    acc
}

pub mod timeline {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub characters: usize,
        pub events: usize,
        /// Events sharing one date before the calendar advances.
        pub events_per_date: usize,
        pub long_text: bool,
    }

    impl Params {
        pub const fn new(
            characters: usize,
            events: usize,
            events_per_date: usize,
            long_text: bool,
        ) -> Self {
            Self { characters, events, events_per_date, long_text }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        Medium,
        DenseLongText,
        Large,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::Medium => "medium",
                Self::DenseLongText => "dense_long_text",
                Self::Large => "large",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(8, 60, 2, false),
                Self::Medium => Params::new(16, 400, 3, false),
                Self::DenseLongText => Params::new(16, 400, 6, true),
                Self::Large => Params::new(32, 4000, 4, true),
            }
        }
    }

    fn character_name(idx: usize) -> String {
        format!("Character {idx:03}")
    }

    fn character_id(idx: usize) -> CharacterId {
        CharacterId::new(character_name(idx)).expect("valid character id")
    }

    pub fn roster(params: Params) -> Roster {
        Roster::new((0..params.characters).map(|idx| {
            let shade = (idx * 37 % 200) as u8;
            Character::new(character_id(idx), format!("#{shade:02x}{:02x}40", 255 - shade))
        }))
    }

    fn description(idx: usize, long_text: bool) -> String {
        // Every third event overflows its nominal cell when long text is on.
        if long_text && idx % 3 == 0 {
            ascii_repeat_to_len(&format!("event {idx:06} "), 'x', 120)
        } else {
            format!("event {idx:06}")
        }
    }

    pub fn events(params: Params) -> Vec<Event> {
        assert!(params.characters >= 2, "characters must be >= 2");
        let start = NaiveDate::from_ymd_opt(1888, 6, 21).expect("valid start date");
        let per_date = params.events_per_date.max(1);

        (0..params.events)
            .map(|idx| {
                let date = start + Duration::days((idx / per_date) as i64 * 11);
                let primary = idx * 7 % params.characters;
                let partner = (primary + 1 + idx % 3) % params.characters;
                let mut event = Event::new(
                    EventId::new(idx as u32),
                    date,
                    character_id(primary),
                    description(idx, params.long_text),
                )
                .with_participants([character_id(partner)])
                .with_death(idx % 97 == 0)
                .with_important(idx % 13 == 0);

                if idx % 10 < 2 {
                    let kind = if idx % 20 < 10 {
                        CrossRefKind::TimeTravel
                    } else {
                        CrossRefKind::WorldSwap
                    };
                    event = event.with_cross_ref_tags([CrossRefTag::new(kind, (idx / 20) as u32)]);
                }
                if idx % 5 == 0 {
                    event = event.with_world(World::parse("Jonas/Martha"));
                }
                event
            })
            .collect()
    }
}
