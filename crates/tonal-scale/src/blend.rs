//! Chroma blending across the ramp.
//!
//! The matched shade keeps the input color exactly. Moving away from it,
//! each shade takes the pattern's lightness and a chroma that slides
//! linearly from the input's chroma toward the pattern's own chroma
//! (rescaled to the input's saturation). The slide completes at shade 50
//! on the light side and shade 950 on the dark side; shades 0 and 1000
//! always take the pattern chroma outright.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tonal_color::OklchColor;

use crate::shade::{Shade, ShadeDefinition};

/// Chroma ceiling for generated shades (roughly the Display P3 limit).
pub const MAX_CHROMA: Decimal = dec!(0.37);

/// Reference chroma at or below which no rescaling is attempted.
const MIN_SCALE_CHROMA: Decimal = dec!(0.001);

/// The blendable shades (50 through 950) on each side of the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadesAround {
    /// Darker than the match, in ramp order.
    pub above: Vec<Shade>,
    /// Lighter than the match, in ramp order.
    pub below: Vec<Shade>,
}

impl ShadesAround {
    #[must_use]
    pub fn around(closest: Shade) -> Self {
        let inner = Shade::ALL.into_iter().filter(|s| !s.is_edge());
        let (above, below): (Vec<_>, Vec<_>) =
            inner.filter(|&s| s != closest).partition(|&s| s > closest);
        Self { above, below }
    }
}

/// How far `shade` has moved from the input chroma toward the pattern's.
///
/// 0 means pure input chroma, 1 pure pattern chroma.
#[must_use]
pub fn blend_ratio(shade: Shade, closest: Shade, around: &ShadesAround) -> Decimal {
    if shade.is_edge() {
        return Decimal::ONE;
    }

    let (side, step) = if shade > closest {
        (&around.above, around.above.iter().position(|&s| s == shade))
    } else if shade < closest {
        (&around.below, around.below.iter().rev().position(|&s| s == shade))
    } else {
        return Decimal::ONE;
    };

    match step {
        Some(i) if !side.is_empty() => Decimal::from(i + 1) / Decimal::from(side.len()),
        _ => Decimal::ONE,
    }
}

/// Ratio of the input chroma to the pattern chroma at the matched shade.
#[must_use]
pub fn chroma_scale(color: &OklchColor, reference: ShadeDefinition) -> Decimal {
    if reference.chroma > MIN_SCALE_CHROMA {
        color.chroma.checked_div(reference.chroma).unwrap_or(Decimal::MAX)
    } else {
        Decimal::ONE
    }
}

/// The color for `shade` in a ramp anchored at `closest`.
#[must_use]
pub fn blend_color(
    shade: Shade,
    closest: Shade,
    color: &OklchColor,
    definition: ShadeDefinition,
    scale: Decimal,
    around: &ShadesAround,
) -> OklchColor {
    if shade == closest {
        return *color;
    }

    let ratio = blend_ratio(shade, closest, around);
    // Overflow only happens far past the ceiling, so it clamps like any other.
    let chroma = definition
        .chroma
        .checked_mul(scale)
        .and_then(|target| target.checked_mul(ratio))
        .zip(color.chroma.checked_mul(Decimal::ONE - ratio))
        .and_then(|(pattern, input)| pattern.checked_add(input))
        .map_or(MAX_CHROMA, |c| c.min(MAX_CHROMA));

    tracing::trace!(%shade, %ratio, %chroma, "blended shade");

    OklchColor::new(definition.lightness, chroma.normalize(), color.hue)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
