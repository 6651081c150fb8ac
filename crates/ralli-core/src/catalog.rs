//! Sports known to the admin console

use serde::Serialize;

/// A sport and its five-digit code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sport {
    /// Display name, also used as the sport key on records
    pub name: &'static str,
    /// Five-digit sport code, the first half of a stat type's numeric id
    pub code: &'static str,
    /// Emoji shown next to the sport
    pub icon: &'static str,
}

/// The fixed sport catalog
pub const SPORTS: [Sport; 4] = [
    Sport {
        name: "NBA",
        code: "00001",
        icon: "🏀",
    },
    Sport {
        name: "NFL",
        code: "00002",
        icon: "🏈",
    },
    Sport {
        name: "Soccer",
        code: "00003",
        icon: "⚽",
    },
    Sport {
        name: "Baseball",
        code: "00004",
        icon: "⚾",
    },
];

/// Look up a sport by its name
#[must_use]
pub fn find_sport(name: &str) -> Option<&'static Sport> {
    SPORTS.iter().find(|sport| sport.name == name)
}
