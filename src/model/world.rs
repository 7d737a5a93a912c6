// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::ids::WorldId;

/// Narrative-universe tag of an event, rendered as the colored strip under each column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum World {
    Single(WorldId),
    /// `"A/B"`: the event straddles two worlds (left half `A`, right half `B`).
    Dual(WorldId, WorldId),
    /// Any other slash-separated value; kept verbatim so the palette lookup falls back.
    Other(WorldId),
}

impl World {
    /// Parses a raw world tag. Blank values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if !raw.contains('/') {
            return WorldId::new(raw).ok().map(Self::Single);
        }

        let parts = raw.split('/').map(str::trim).collect::<Vec<_>>();
        match parts.as_slice() {
            [first, second] => match (WorldId::new(first), WorldId::new(second)) {
                (Ok(first), Ok(second)) => Some(Self::Dual(first, second)),
                _ => WorldId::new(raw).ok().map(Self::Other),
            },
            _ => WorldId::new(raw).ok().map(Self::Other),
        }
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(world) | Self::Other(world) => write!(f, "{world}"),
            Self::Dual(first, second) => write!(f, "{first}/{second}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::World;

    #[test]
    fn parses_single_dual_and_other_tags() {
        assert_eq!(World::parse("  "), None);
        assert!(matches!(World::parse("Jonas"), Some(World::Single(w)) if w.as_str() == "Jonas"));
        assert!(matches!(
            World::parse("Jonas / Martha"),
            Some(World::Dual(a, b)) if a.as_str() == "Jonas" && b.as_str() == "Martha"
        ));
        assert!(matches!(World::parse("A/B/C"), Some(World::Other(w)) if w.as_str() == "A/B/C"));
        assert!(matches!(World::parse("A/"), Some(World::Other(_))));
    }

    #[test]
    fn display_restores_the_tag() {
        let world = World::parse("Martha/Jonas").expect("world");
        assert_eq!(world.to_string(), "Martha/Jonas");
    }
}
