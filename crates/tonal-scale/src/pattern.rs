//! Reference patterns — one lightness/chroma curve per hue family.
//!
//! Each pattern is a complete 13-step table. Shade 0 is always white
//! (L 1, C 0) and shade 1000 always black (L 0, C 0); the eleven shades
//! between them are hand-tuned so that shade 500 sits at the family's
//! characteristic lightness with close to its peak chroma.
//!
//! The tables are process-wide constants. Nothing mutates them.

use rust_decimal_macros::dec;
use serde::Serialize;

use crate::shade::{Shade, ShadeDefinition};

/// A hue family, each with its own reference pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternFamily {
    /// Reds through red-oranges.
    WarmRed,
    /// Oranges and ambers.
    Orange,
    /// Yellows through yellow-greens.
    Yellow,
    Green,
    /// Teals and cyans.
    Cyan,
    Sky,
    /// Blues through violets.
    Blue,
    /// Purples, magentas and pinks.
    Pink,
    /// Grays, for colors without meaningful chroma.
    Neutral,
}

impl PatternFamily {
    /// Human-readable name of this family.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WarmRed => "warm-red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Sky => "sky",
            Self::Blue => "blue",
            Self::Pink => "pink",
            Self::Neutral => "neutral",
        }
    }

    /// Parse a family from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::all().iter().find(|p| p.name() == lower).copied()
    }

    /// All families, chromatic ones in hue order, neutral last.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::WarmRed, Self::Orange, Self::Yellow,
            Self::Green, Self::Cyan, Self::Sky,
            Self::Blue, Self::Pink, Self::Neutral,
        ]
    }

    /// The reference pattern for this family.
    #[must_use]
    pub const fn pattern(self) -> &'static Pattern {
        match self {
            Self::WarmRed => &WARM_RED,
            Self::Orange => &ORANGE,
            Self::Yellow => &YELLOW,
            Self::Green => &GREEN,
            Self::Cyan => &CYAN,
            Self::Sky => &SKY,
            Self::Blue => &BLUE,
            Self::Pink => &PINK,
            Self::Neutral => &NEUTRAL,
        }
    }
}

impl std::fmt::Display for PatternFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Pattern
// ---------------------------------------------------------------------------

/// A complete shade-to-definition table for one family.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    family: PatternFamily,
    shades: [ShadeDefinition; Shade::COUNT],
}

impl Pattern {
    #[must_use]
    pub const fn family(&self) -> PatternFamily {
        self.family
    }

    /// The reference definition for `shade`.
    #[must_use]
    pub const fn get(&self, shade: Shade) -> ShadeDefinition {
        self.shades[shade.index()]
    }

    /// Every shade with its definition, lightest first.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, ShadeDefinition)> + '_ {
        Shade::ALL.into_iter().zip(self.shades.iter().copied())
    }
}

macro_rules! shade {
    ($l:tt, $c:tt) => {
        ShadeDefinition { lightness: dec!($l), chroma: dec!($c) }
    };
}

/// White, the eleven listed shades (50 through 950), black.
macro_rules! ramp {
    ($(($l:tt, $c:tt)),* $(,)?) => {
        [shade!(1, 0), $(shade!($l, $c),)* shade!(0, 0)]
    };
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

static WARM_RED: Pattern = Pattern {
    family: PatternFamily::WarmRed,
    shades: ramp![
        (0.971, 0.013), (0.936, 0.032), (0.885, 0.062), (0.808, 0.114),
        (0.704, 0.191), (0.637, 0.237), (0.577, 0.245), (0.505, 0.213),
        (0.444, 0.177), (0.396, 0.141), (0.258, 0.092),
    ],
};

// 400 and 500 sit close together so light ambers can be pulled to 500.
static ORANGE: Pattern = Pattern {
    family: PatternFamily::Orange,
    shades: ramp![
        (0.982, 0.018), (0.956, 0.045), (0.908, 0.090), (0.851, 0.142),
        (0.789, 0.185), (0.767, 0.198), (0.686, 0.200), (0.555, 0.178),
        (0.472, 0.147), (0.411, 0.118), (0.273, 0.078),
    ],
};

static YELLOW: Pattern = Pattern {
    family: PatternFamily::Yellow,
    shades: ramp![
        (0.987, 0.026), (0.973, 0.071), (0.945, 0.129), (0.905, 0.182),
        (0.852, 0.199), (0.795, 0.184), (0.681, 0.162), (0.554, 0.135),
        (0.476, 0.114), (0.421, 0.095), (0.286, 0.066),
    ],
};

static GREEN: Pattern = Pattern {
    family: PatternFamily::Green,
    shades: ramp![
        (0.982, 0.018), (0.962, 0.044), (0.925, 0.084), (0.871, 0.150),
        (0.792, 0.209), (0.723, 0.219), (0.627, 0.194), (0.527, 0.154),
        (0.448, 0.119), (0.393, 0.095), (0.266, 0.065),
    ],
};

static CYAN: Pattern = Pattern {
    family: PatternFamily::Cyan,
    shades: ramp![
        (0.984, 0.019), (0.956, 0.045), (0.917, 0.080), (0.865, 0.127),
        (0.789, 0.154), (0.715, 0.143), (0.609, 0.126), (0.520, 0.105),
        (0.450, 0.085), (0.398, 0.070), (0.302, 0.056),
    ],
};

static SKY: Pattern = Pattern {
    family: PatternFamily::Sky,
    shades: ramp![
        (0.977, 0.013), (0.951, 0.026), (0.901, 0.058), (0.828, 0.111),
        (0.746, 0.160), (0.685, 0.169), (0.588, 0.158), (0.500, 0.134),
        (0.443, 0.110), (0.391, 0.090), (0.293, 0.066),
    ],
};

static BLUE: Pattern = Pattern {
    family: PatternFamily::Blue,
    shades: ramp![
        (0.970, 0.014), (0.932, 0.032), (0.882, 0.059), (0.809, 0.105),
        (0.707, 0.165), (0.623, 0.214), (0.546, 0.245), (0.488, 0.243),
        (0.424, 0.199), (0.379, 0.146), (0.282, 0.091),
    ],
};

static PINK: Pattern = Pattern {
    family: PatternFamily::Pink,
    shades: ramp![
        (0.971, 0.014), (0.948, 0.028), (0.899, 0.061), (0.823, 0.120),
        (0.718, 0.202), (0.656, 0.241), (0.592, 0.249), (0.525, 0.223),
        (0.459, 0.187), (0.408, 0.153), (0.284, 0.109),
    ],
};

static NEUTRAL: Pattern = Pattern {
    family: PatternFamily::Neutral,
    shades: ramp![
        (0.985, 0.002), (0.968, 0.003), (0.923, 0.007), (0.871, 0.011),
        (0.707, 0.024), (0.554, 0.026), (0.444, 0.025), (0.373, 0.025),
        (0.278, 0.022), (0.212, 0.022), (0.139, 0.019),
    ],
};

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
