//! Faction identity for territory ownership.
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five armies contesting the map.
///
/// Ownership is tag equality on this enum; there is no string comparison
/// anywhere in the conquest logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Faction {
    Green,
    Red,
    Yellow,
    Blue,
    Pink,
}

impl Faction {
    /// Number of factions in the palette.
    pub const COUNT: usize = 5;

    /// Every faction, in palette order.
    pub const ALL: [Self; Self::COUNT] =
        [Self::Green, Self::Red, Self::Yellow, Self::Blue, Self::Pink];

    /// Stable position of this faction within [`Self::ALL`].
    #[must_use]
    pub const fn palette_index(self) -> usize {
        match self {
            Self::Green => 0,
            Self::Red => 1,
            Self::Yellow => 2,
            Self::Blue => 3,
            Self::Pink => 4,
        }
    }

    /// Display name used by the terminal front end.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Blue => "Blue",
            Self::Pink => "Pink",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
