//! Entry color palette

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed palette of color tags an entry can carry.
///
/// Stored entries keep their color as a plain string so that tags written by
/// other versions survive a load; this enum is the set the CLI accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryColor {
    #[default]
    Default,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

impl EntryColor {
    /// Every palette color, in swatch order
    pub const ALL: [EntryColor; 8] = [
        EntryColor::Default,
        EntryColor::Red,
        EntryColor::Orange,
        EntryColor::Yellow,
        EntryColor::Green,
        EntryColor::Blue,
        EntryColor::Purple,
        EntryColor::Pink,
    ];

    /// Tag name as persisted in the entry collection
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryColor::Default => "default",
            EntryColor::Red => "red",
            EntryColor::Orange => "orange",
            EntryColor::Yellow => "yellow",
            EntryColor::Green => "green",
            EntryColor::Blue => "blue",
            EntryColor::Purple => "purple",
            EntryColor::Pink => "pink",
        }
    }

    /// Single-character marker used by the list view
    pub fn marker(&self) -> char {
        match self {
            EntryColor::Default => '·',
            _ => '●',
        }
    }
}

impl fmt::Display for EntryColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        EntryColor::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid color: '{}'. Valid colors are: {}",
                    s,
                    EntryColor::ALL.map(|c| c.as_str()).join(", ")
                )
            })
    }
}
