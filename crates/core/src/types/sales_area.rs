//! Sales areas (pricing regions) and their currency symbols.

use serde::{Deserialize, Serialize};

/// A sales area: the pricing/currency jurisdiction a part is sold under.
///
/// Exactly one area is active at a time in a client; switching it invalidates
/// any cart built under the previous area's pricing. On the wire this is a
/// plain integer; unrecognized values fall back to the default area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "i32", into = "i32")]
pub enum SalesArea {
    #[default]
    Us,
    Eu,
    Uk,
    Jp,
    Cn,
}

impl SalesArea {
    /// Currency symbol used for display in this sales area.
    #[must_use]
    pub const fn currency_symbol(self) -> &'static str {
        match self {
            Self::Us => "$",
            Self::Eu => "€",
            Self::Uk => "£",
            Self::Jp | Self::Cn => "¥",
        }
    }

    /// Wire representation.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Us => 1,
            Self::Eu => 2,
            Self::Uk => 3,
            Self::Jp => 4,
            Self::Cn => 5,
        }
    }
}

impl From<i32> for SalesArea {
    fn from(value: i32) -> Self {
        match value {
            2 => Self::Eu,
            3 => Self::Uk,
            4 => Self::Jp,
            5 => Self::Cn,
            // 1 and anything unrecognized
            _ => Self::Us,
        }
    }
}

impl From<SalesArea> for i32 {
    fn from(area: SalesArea) -> Self {
        area.as_i32()
    }
}
