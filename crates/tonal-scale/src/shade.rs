//! Shade steps — the 13 fixed positions of a ramp.
//!
//! A ramp runs from shade 0 (white) to shade 1000 (black). The eleven
//! shades in between are the ones a design system actually uses; 0 and
//! 1000 are "edge" shades that anchor the curve.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

/// One step of a shade ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shade {
    S0,
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
    S1000,
}

impl Shade {
    /// Every shade, lightest first.
    pub const ALL: [Self; 13] = [
        Self::S0, Self::S50, Self::S100, Self::S200,
        Self::S300, Self::S400, Self::S500, Self::S600,
        Self::S700, Self::S800, Self::S900, Self::S950,
        Self::S1000,
    ];

    /// Number of shades in a ramp.
    pub const COUNT: usize = Self::ALL.len();

    /// The numeric shade value, e.g. 500.
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::S0 => 0,
            Self::S50 => 50,
            Self::S100 => 100,
            Self::S200 => 200,
            Self::S300 => 300,
            Self::S400 => 400,
            Self::S500 => 500,
            Self::S600 => 600,
            Self::S700 => 700,
            Self::S800 => 800,
            Self::S900 => 900,
            Self::S950 => 950,
            Self::S1000 => 1000,
        }
    }

    /// Position in [`Shade::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a shade by its numeric value.
    #[must_use]
    pub fn from_value(value: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }

    /// Shade 0 or 1000.
    #[must_use]
    pub const fn is_edge(self) -> bool {
        matches!(self, Self::S0 | Self::S1000)
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for Shade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.value())
    }
}

/// The reference lightness and chroma of one shade within a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ShadeDefinition {
    pub lightness: Decimal,
    pub chroma: Decimal,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
