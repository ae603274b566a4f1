//! Closest-shade matching by lightness.
//!
//! Only lightness counts here. Chroma and hue are carried through the ramp
//! by the blend step, not used to pick the anchor shade.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tonal_color::OklchColor;

use crate::pattern::{Pattern, PatternFamily};
use crate::shade::Shade;

/// Hue above which a light orange counts as amber.
const AMBER_HUE: Decimal = dec!(65);

/// Lightness above which the amber tie-break applies.
const AMBER_LIGHTNESS: Decimal = dec!(0.75);

/// Largest 400/500 distance gap the amber tie-break overrides.
const AMBER_MARGIN: Decimal = dec!(0.015);

/// A shade and its lightness distance from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub shade: Shade,
    pub diff: Decimal,
}

/// Every shade of `pattern`, nearest lightness first.
///
/// Equal distances keep ramp order, so the lighter shade wins a tie.
#[must_use]
pub fn rank(pattern: &Pattern, lightness: Decimal) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = pattern
        .iter()
        .map(|(shade, def)| Candidate { shade, diff: (lightness - def.lightness).abs() })
        .collect();
    candidates.sort_by_key(|c| c.diff);
    candidates
}

/// The two nearest shades for a color, after the amber tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadeMatch {
    pub closest: Candidate,
    pub second: Option<Candidate>,
}

impl ShadeMatch {
    /// Match `color` against `pattern`.
    #[must_use]
    pub fn compute(pattern: &Pattern, color: &OklchColor) -> Self {
        let ranked = rank(pattern, color.lightness);
        let mut found = Self { closest: ranked[0], second: ranked.get(1).copied() };

        if is_amber_boundary(pattern, color) && found.has_competing_mid_shades() {
            if let Some(second) = found.second {
                tracing::debug!(
                    lightness = %color.lightness,
                    "amber tie-break: preferring 500 over 400"
                );
                found = Self { closest: second, second: Some(found.closest) };
            }
        }
        found
    }

    /// 400 and 500 are the top two and nearly equidistant.
    fn has_competing_mid_shades(&self) -> bool {
        self.second.is_some_and(|second| {
            self.closest.shade == Shade::S400
                && second.shade == Shade::S500
                && (self.closest.diff - second.diff).abs() < AMBER_MARGIN
        })
    }
}

/// Light oranges near the yellow boundary.
fn is_amber_boundary(pattern: &Pattern, color: &OklchColor) -> bool {
    pattern.family() == PatternFamily::Orange
        && color.normalized_hue().unwrap_or(Decimal::ZERO) > AMBER_HUE
        && color.lightness > AMBER_LIGHTNESS
}

/// The shade `color` anchors to within `pattern`.
#[must_use]
pub fn closest_shade(pattern: &Pattern, color: &OklchColor) -> Shade {
    ShadeMatch::compute(pattern, color).closest.shade
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
