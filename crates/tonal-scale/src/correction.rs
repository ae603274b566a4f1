//! Strong-correction detection.
//!
//! Flags a mid-ramp match that the scale represents poorly: either the
//! input sits far from every reference lightness, or it sits almost
//! halfway between two of them. The flag is advisory. It never changes
//! the generated shades.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tonal_color::OklchColor;

use crate::matcher::rank;
use crate::pattern::Pattern;
use crate::shade::Shade;

/// Distance from the nearest shade beyond which the match is weak.
pub const LIGHTNESS_DISTANCE: Decimal = dec!(0.05);

/// Gap between the two nearest distances below which the match is ambiguous.
pub const LIGHTNESS_AMBIGUITY: Decimal = dec!(0.02);

/// Whether matching `color` to `closest` in `pattern` deserves a warning.
///
/// Only shades 300 through 700 are ever flagged.
#[must_use]
pub fn needs_strong_correction(color: &OklchColor, pattern: &Pattern, closest: Shade) -> bool {
    if closest < Shade::S300 || closest > Shade::S700 {
        return false;
    }

    let ranked = rank(pattern, color.lightness);
    let Some(first) = ranked.first() else {
        return false;
    };
    if first.diff > LIGHTNESS_DISTANCE {
        return true;
    }
    ranked
        .get(1)
        .is_some_and(|second| (first.diff - second.diff).abs() < LIGHTNESS_AMBIGUITY)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
