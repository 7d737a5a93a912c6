// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{CrossRefKind, CrossRefTag, CrossRefTags};

/// Spellings that mark a time-travel tag. The second one occurs in hand-tagged sources.
const TIME_TRAVEL_MARKERS: [&str; 2] = ["Successful Time Travel", "Succesfull Time Travel"];
const WORLD_SWAP_MARKER: &str = "World Swap";

fn number_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\((\d+)\)").ok()).as_ref()
}

/// Parses a free-form, comma-separated type string such as
/// `"Successful Time Travel (3), World Swap (1)"`.
///
/// Parts without a recognized kind or without a `(N)` number are skipped.
pub fn parse_cross_ref_tags(raw: &str) -> CrossRefTags {
    let mut tags = CrossRefTags::new();
    let Some(pattern) = number_pattern() else {
        return tags;
    };

    for part in raw.split(',') {
        let kind = if TIME_TRAVEL_MARKERS.iter().any(|marker| part.contains(marker)) {
            CrossRefKind::TimeTravel
        } else if part.contains(WORLD_SWAP_MARKER) {
            CrossRefKind::WorldSwap
        } else {
            continue;
        };

        let number = pattern
            .captures(part)
            .and_then(|captures| captures.get(1))
            .and_then(|number| number.as_str().parse::<u32>().ok());
        if let Some(number) = number {
            let tag = CrossRefTag::new(kind, number);
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::parse_cross_ref_tags;
    use crate::model::{CrossRefKind, CrossRefTag};

    #[rstest]
    #[case("Successful Time Travel (3)", CrossRefKind::TimeTravel, 3)]
    #[case("Succesfull Time Travel (12)", CrossRefKind::TimeTravel, 12)]
    #[case("  World Swap (1) ", CrossRefKind::WorldSwap, 1)]
    fn parses_single_tags(#[case] raw: &str, #[case] kind: CrossRefKind, #[case] number: u32) {
        assert_eq!(parse_cross_ref_tags(raw).as_slice(), &[CrossRefTag::new(kind, number)]);
    }

    #[test]
    fn parses_lists_in_order_and_skips_noise() {
        let tags = parse_cross_ref_tags("Death, Successful Time Travel (3), World Swap (2), Death (4)");
        assert_eq!(
            tags.as_slice(),
            &[
                CrossRefTag::new(CrossRefKind::TimeTravel, 3),
                CrossRefTag::new(CrossRefKind::WorldSwap, 2)
            ]
        );
    }

    #[test]
    fn tags_without_number_are_ignored() {
        assert!(parse_cross_ref_tags("Successful Time Travel").is_empty());
        assert!(parse_cross_ref_tags("World Swap (x)").is_empty());
        assert!(parse_cross_ref_tags("").is_empty());
    }

    #[test]
    fn repeated_tags_are_kept_once() {
        let tags = parse_cross_ref_tags("World Swap (2), World Swap (2)");
        assert_eq!(tags.len(), 1);
    }
}
