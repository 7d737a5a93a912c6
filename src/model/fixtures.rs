// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::NaiveDate;

use super::event::Event;
use super::ids::{CharacterId, EventId};
use super::roster::{Character, Roster};

pub(crate) fn cid(name: &str) -> CharacterId {
    CharacterId::new(name).expect("character id")
}

pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub(crate) fn event(id: u32, day: NaiveDate, primary: &str, participants: &[&str], text: &str) -> Event {
    Event::new(EventId::new(id), day, cid(primary), text)
        .with_participants(participants.iter().map(|name| cid(name)))
}

/// Five-row roster `A`..`E` used by the layout tests.
pub(crate) fn letters_roster() -> Roster {
    Roster::new(
        [("A", "#92782d"), ("B", "#8c0048"), ("C", "#7a0014"), ("D", "#46606c"), ("E", "#cb3608")]
            .into_iter()
            .map(|(name, color)| Character::new(cid(name), color)),
    )
}

/// The sixteen-character roster of the reference chart, in row order.
pub(crate) fn dark_roster() -> Roster {
    let rows = [
        ("Jonas Kahnwald / Adam", "#92782d", &["Adam"][..]),
        ("Helge Doppler", "#2b5860", &[][..]),
        ("Claudia Tiedemann", "#7a0014", &[][..]),
        ("Ulrich Nielsen", "#46606c", &[][..]),
        ("Martha Nielsen / Eve", "#8c0048", &["Eve"][..]),
        ("Elisabeth Doppler", "#cb3608", &[][..]),
        ("Unknown", "#10313c", &[][..]),
        ("Katharina Nielsen", "#53344d", &[][..]),
        ("Charlotte Doppler", "#422418", &[][..]),
        ("Mikkel Nielsen / Michael Kahnwald", "#802124", &[][..]),
        ("Noah / Hanno Tauber", "#232930", &[][..]),
        ("Aleksander Tiedemann / Boris Niewald", "#0a5563", &[][..]),
        ("H.G. Tannhaus", "#500c01", &[][..]),
        ("Egon Tiedemann", "#615c46", &[][..]),
        ("Bartosz Tiedemann", "#7d5639", &[][..]),
        ("Hannah Kahnwald / Hannah Nielsen", "#640d00", &[][..]),
    ];

    Roster::new(rows.into_iter().map(|(name, color, aliases)| {
        Character::new(cid(name), color).with_aliases(aliases.iter().map(|alias| (*alias).to_owned()))
    }))
}

/// A description long enough to overflow the three-line probe at width 16.
pub(crate) const LONG_TEXT: &str =
    "Jonas follows the trail into the caves and finds the passage that leads back thirty-three years";

#[cfg(test)]
mod tests {
    use super::{dark_roster, letters_roster};

    #[test]
    fn fixture_rosters_have_expected_sizes() {
        assert_eq!(letters_roster().len(), 5);
        assert_eq!(dark_roster().len(), 16);
    }
}
