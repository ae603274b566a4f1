//! Pattern selection — which reference curve a color belongs to.
//!
//! Two chroma tiers decide neutrality. Below [`GRAY_CHROMA`] a color is gray
//! whatever its lightness. Between that and [`PALE_CHROMA`] it is gray only
//! when it is also near white, since a pale blue at L 0.9 is still clearly
//! blue. Everything else is routed by hue.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tonal_color::OklchColor;

use crate::pattern::{Pattern, PatternFamily};

/// Chroma below which a color is gray at any lightness.
pub const GRAY_CHROMA: Decimal = dec!(0.01);

/// Chroma below which a near-white color is gray.
pub const PALE_CHROMA: Decimal = dec!(0.015);

/// Lightness at which the pale tier applies.
pub const NEAR_WHITE: Decimal = dec!(0.98);

/// Upper hue bounds (exclusive) in ascending order. Hues at or past the
/// last bound wrap back to warm red.
const HUE_BOUNDS: [(Decimal, PatternFamily); 8] = [
    (dec!(38), PatternFamily::WarmRed),
    (dec!(70.4), PatternFamily::Orange),
    (dec!(135), PatternFamily::Yellow),
    (dec!(215), PatternFamily::Green),
    (dec!(230), PatternFamily::Cyan),
    (dec!(250), PatternFamily::Sky),
    (dec!(318), PatternFamily::Blue),
    (dec!(360), PatternFamily::Pink),
];

/// The reference pattern for `color`.
#[must_use]
pub fn select_pattern(color: &OklchColor) -> &'static Pattern {
    select_family(color).pattern()
}

/// The family whose pattern applies to `color`.
#[must_use]
pub fn select_family(color: &OklchColor) -> PatternFamily {
    if is_neutral(color) {
        return PatternFamily::Neutral;
    }
    color.normalized_hue().map_or(PatternFamily::Neutral, family_for_hue)
}

/// Whether `color` reads as gray.
#[must_use]
pub fn is_neutral(color: &OklchColor) -> bool {
    color.hue.is_none()
        || color.chroma < GRAY_CHROMA
        || (color.lightness >= NEAR_WHITE && color.chroma < PALE_CHROMA)
}

/// The chromatic family for a hue in `[0, 360)`.
#[must_use]
pub fn family_for_hue(hue: Decimal) -> PatternFamily {
    HUE_BOUNDS
        .iter()
        .find(|(bound, _)| hue < *bound)
        .map_or(PatternFamily::WarmRed, |&(_, family)| family)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn color(l: Decimal, c: Decimal, h: Decimal) -> OklchColor {
        OklchColor::new(l, c, Some(h))
    }

    #[test]
    fn hue_bands() {
        let cases = [
            (dec!(0), PatternFamily::WarmRed),
            (dec!(29.2), PatternFamily::WarmRed),
            (dec!(38), PatternFamily::Orange),
            (dec!(70.39), PatternFamily::Orange),
            (dec!(70.4), PatternFamily::Yellow),
            (dec!(134.99), PatternFamily::Yellow),
            (dec!(135), PatternFamily::Green),
            (dec!(215), PatternFamily::Cyan),
            (dec!(230), PatternFamily::Sky),
            (dec!(250), PatternFamily::Blue),
            (dec!(317.9), PatternFamily::Blue),
            (dec!(318), PatternFamily::Pink),
            (dec!(359.99), PatternFamily::Pink),
        ];
        for (hue, family) in cases {
            assert_eq!(family_for_hue(hue), family, "hue {hue}");
        }
    }

    #[test]
    fn hue_wraps_before_lookup() {
        let red = color(dec!(0.6), dec!(0.2), dec!(360));
        assert_eq!(select_family(&red), PatternFamily::WarmRed);
        let pink = color(dec!(0.6), dec!(0.2), dec!(-20));
        assert_eq!(select_family(&pink), PatternFamily::Pink);
    }

    #[test]
    fn low_chroma_is_gray() {
        let gray = color(dec!(0.5), dec!(0.009), dec!(260));
        assert_eq!(select_family(&gray), PatternFamily::Neutral);
    }

    #[test]
    fn missing_hue_is_gray() {
        let gray = OklchColor::new(dec!(0.5), dec!(0.1), None);
        assert_eq!(select_family(&gray), PatternFamily::Neutral);
    }

    #[test]
    fn pale_colors_keep_their_hue() {
        // Same chroma, only lightness differs.
        let pale_blue = color(dec!(0.95), dec!(0.012), dec!(260));
        assert_eq!(select_family(&pale_blue), PatternFamily::Blue);

        let near_white = color(dec!(0.985), dec!(0.012), dec!(260));
        assert_eq!(select_family(&near_white), PatternFamily::Neutral);
    }

    #[test]
    fn near_white_with_real_chroma_is_chromatic() {
        let cream = color(dec!(0.99), dec!(0.02), dec!(95));
        assert_eq!(select_family(&cream), PatternFamily::Yellow);
    }

    #[test]
    fn deterministic() {
        let c = color(dec!(0.7), dec!(0.15), dec!(140));
        assert_eq!(select_family(&c), select_family(&c));
        assert_eq!(select_pattern(&c).family(), PatternFamily::Green);
    }
}
