//! Century Value Object
//!
//! The separator character at position 6 of a hetu selects the century of
//! the two-digit birth year.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Birth century encoded by the hetu separator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Century {
    /// `+`: born 1800–1899
    #[serde(rename = "1800s")]
    EighteenHundreds,
    /// `-`: born 1900–1999
    #[serde(rename = "1900s")]
    NineteenHundreds,
    /// `A`: born 2000–2099
    #[serde(rename = "2000s")]
    TwoThousands,
}

impl Century {
    /// All accepted markers in century order
    pub const MARKERS: [char; 3] = ['+', '-', 'A'];

    /// Resolve a separator character. Case-sensitive.
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '+' => Some(Self::EighteenHundreds),
            '-' => Some(Self::NineteenHundreds),
            'A' => Some(Self::TwoThousands),
            _ => None,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Self::EighteenHundreds => '+',
            Self::NineteenHundreds => '-',
            Self::TwoThousands => 'A',
        }
    }

    /// Year added to the two-digit birth year
    pub fn base_year(self) -> i32 {
        match self {
            Self::EighteenHundreds => 1800,
            Self::NineteenHundreds => 1900,
            Self::TwoThousands => 2000,
        }
    }
}

impl fmt::Display for Century {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.base_year())
    }
}
