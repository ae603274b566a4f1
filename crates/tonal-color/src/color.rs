// SPDX-License-Identifier: MIT
//
// Float OKLCH color — the conversion layer between perceptual values and
// the sRGB hex strings a palette is finally displayed with.
//
// Single-character variable names (r, g, b, l, c, h, a, s, m) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against reference implementations.
#![allow(clippy::many_single_char_names)]
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB ↔ #rrggbb
//
// Everything here is f64. The palette engine keeps its own values as exact
// decimals and only drops into this module to talk to the sRGB world: hex
// input is decoded here, and every generated shade is encoded here.
// Gamut mapping reduces chroma (keeping lightness and hue) until the color
// fits inside sRGB.

/// Tolerance for treating a channel as inside `[0, 1]`.
///
/// Colors decoded from 8-bit sRGB land a few ULPs outside the unit range
/// after a full OKLCH roundtrip. Without the slack, `to_gamut` would shave
/// chroma off colors that are in fact displayable.
const GAMUT_EPSILON: f64 = 1e-6;

/// Chroma below this is treated as achromatic (hue undefined).
pub const ACHROMATIC_CHROMA: f64 = 1e-5;

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque color stored in OKLCH space.
///
/// OKLCH is the cylindrical form of Björn Ottosson's Oklab. Lightness and
/// chroma are perceptually uniform, which is what lets a shade ramp move
/// in equal visual steps.
///
/// # Examples
///
/// ```
/// use tonal_color::color::Color;
///
/// let blue = Color::hex("#3b82f6").unwrap();
/// assert!((blue.l - 0.623).abs() < 0.001);
///
/// let vivid = Color::oklch(0.5, 0.4, 180.0).to_gamut();
/// assert!(vivid.in_srgb_gamut());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f64,

    /// Chroma: 0.0 (gray) upward; sRGB tops out near 0.32, P3 near 0.37.
    pub c: f64,

    /// Hue angle in degrees, 0.0 to 360.0. Meaningless when achromatic.
    pub h: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from OKLCH values.
    #[inline]
    #[must_use]
    pub const fn oklch(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Create a color from sRGB values (0.0 to 1.0 range).
    #[must_use]
    pub fn srgb(r: f64, g: f64, b: f64) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self { l, c, h }
    }

    /// Create a color from 8-bit sRGB values (0 to 255).
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Create a color from a hex string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the `#`, in any case.
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s).map(|(r, g, b)| Self::rgb8(r, g, b))
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    /// Whether this color has no visible chroma.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < ACHROMATIC_CHROMA
    }

    // ─── Conversions to sRGB ─────────────────────────────────────────────

    /// Convert to sRGB, clamping each channel to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f64, f64, f64) {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Convert to a `#rrggbb` hex string.
    ///
    /// Channels are clamped, not gamut mapped. Call [`to_gamut`](Self::to_gamut)
    /// first when the color may lie outside sRGB.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Whether this color is within the sRGB gamut.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        let range = -GAMUT_EPSILON..=1.0 + GAMUT_EPSILON;
        range.contains(&r) && range.contains(&g) && range.contains(&b)
    }

    /// Reduce chroma until this color fits within the sRGB gamut.
    ///
    /// Binary search on chroma; lightness and hue are untouched, so the
    /// shade keeps its place on the ramp and its hue family.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }

        let mut lo: f64 = 0.0;
        let mut hi: f64 = self.c;

        for _ in 0..24 {
            let mid = (lo + hi) * 0.5;
            let candidate = Self { c: mid, ..self };
            if candidate.in_srgb_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self { c: lo, ..self }
    }
}

// ─── Color Space Conversion Functions ────────────────────────────────────────
//
// Oklab math by Björn Ottosson.
// Reference: https://bottosson.github.io/posts/oklab/

// ─── OKLCH ↔ Oklab ──────────────────────────────────────────────────────────

/// Convert OKLCH chroma and hue to Oklab a, b components.
#[inline]
fn oklch_to_oklab_ab(c: f64, h: f64) -> (f64, f64) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

/// Convert Oklab a, b components to OKLCH chroma and hue.
#[inline]
fn oklab_ab_to_oklch(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    let h = if c < 1e-12 {
        0.0
    } else {
        let h = b.atan2(a).to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    };
    (c, h)
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// Both directions pass through LMS cone space. Matrices are the published
// Oklab ones at full precision.

/// Convert Oklab (L, a, b) to linear sRGB.
#[inline]
fn oklab_to_linear_srgb(l_ok: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let l_ = 0.215_803_757_3f64.mul_add(b, 0.396_337_777_4f64.mul_add(a, l_ok));
    let m_ = 0.063_854_172_8f64.mul_add(-b, 0.105_561_345_8f64.mul_add(-a, l_ok));
    let s_ = 1.291_485_548_0f64.mul_add(-b, 0.089_484_177_5f64.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_929_2f64.mul_add(s, 4.076_741_662_1f64.mul_add(l, -(3.307_711_591_3 * m)));
    let g = 0.341_319_396_5f64.mul_add(-s, (-1.268_438_004_6f64).mul_add(l, 2.609_757_401_1 * m));
    let bl = 1.707_614_701_0f64.mul_add(s, (-0.004_196_086_3f64).mul_add(l, -(0.703_418_614_7 * m)));

    (r, g, bl)
}

/// Convert linear sRGB to Oklab (L, a, b).
#[inline]
fn linear_srgb_to_oklab(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let l = 0.051_445_992_9f64.mul_add(b, 0.412_221_470_8f64.mul_add(r, 0.536_332_536_3 * g));
    let m = 0.107_396_956_6f64.mul_add(b, 0.211_903_498_2f64.mul_add(r, 0.680_699_545_1 * g));
    let s = 0.629_978_700_5f64.mul_add(b, 0.088_302_461_9f64.mul_add(r, 0.281_718_837_6 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_046_8f64.mul_add(-s_, 0.210_454_255_3f64.mul_add(l_, 0.793_617_785_0 * m_));
    let a = 0.450_593_709_9f64.mul_add(s_, 1.977_998_495_1f64.mul_add(l_, -(2.428_592_205_0 * m_)));
    let b_ok = 0.808_675_766_0f64.mul_add(-s_, 0.025_904_037_1f64.mul_add(l_, 0.782_771_766_2 * m_));

    (l_ok, a, b_ok)
}

// ─── Linear sRGB ↔ sRGB (Gamma) ─────────────────────────────────────────────

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Composite Conversions ───────────────────────────────────────────────────

/// Convert sRGB (0.0–1.0) → OKLCH.
fn srgb_to_oklch(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let (l, a, b_ok) = linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let (c, h) = oklab_ab_to_oklch(a, b_ok);
    (l, c, h)
}

/// Convert OKLCH → sRGB (0.0–1.0, may be out of gamut).
fn oklch_to_srgb(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Whether `s` is a 3- or 6-digit hex color, with or without a leading `#`.
#[must_use]
pub fn is_hex(s: &str) -> bool {
    parse_hex(s).is_some()
}

/// Parse a hex color string into 8-bit sRGB channels.
fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some((r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some((r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Roundtrip Tests ──────────────────────────────────────────────────

    #[test]
    fn srgb_to_oklch_roundtrip() {
        let test_colors: [(f64, f64, f64); 8] = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (1.0, 1.0, 0.0),
            (0.0, 1.0, 1.0),
            (1.0, 0.0, 1.0),
            (1.0, 1.0, 1.0),
            (0.0, 0.0, 0.0),
        ];

        for (r, g, b) in test_colors {
            let color = Color::srgb(r, g, b);
            let (rr, rg, rb) = color.to_srgb();
            assert!(
                approx_eq(r, rr, 1e-6) && approx_eq(g, rg, 1e-6) && approx_eq(b, rb, 1e-6),
                "Roundtrip failed for ({r}, {g}, {b}): got ({rr:.6}, {rg:.6}, {rb:.6})"
            );
        }
    }

    #[test]
    fn every_gray_level_roundtrips_through_hex() {
        for v in 0..=255u8 {
            let hex = format!("#{v:02x}{v:02x}{v:02x}");
            let color = Color::hex(&hex).unwrap();
            assert!(color.is_achromatic(), "{hex} has chroma {}", color.c);
            assert_eq!(color.to_gamut().to_hex(), hex);
        }
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::hex("#ff8000").unwrap();
        assert_eq!(color.to_rgb8(), (255, 128, 0));
    }

    #[test]
    fn hex_parsing_short() {
        let color = Color::hex("#f80").unwrap();
        assert_eq!(color.to_rgb8(), (255, 136, 0));
    }

    #[test]
    fn hex_parsing_no_hash_and_uppercase() {
        let color = Color::hex("3B82F6").unwrap();
        assert_eq!(color.to_rgb8(), (0x3b, 0x82, 0xf6));
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(Color::hex("xyz").is_none());
        assert!(Color::hex("#12345").is_none());
        assert!(Color::hex("#ff000080").is_none());
        assert!(Color::hex("").is_none());
        assert!(Color::hex("#").is_none());
        assert!(!is_hex("#ggg"));
        assert!(is_hex("abc"));
    }

    #[test]
    fn hex_roundtrip() {
        for original in ["#c86432", "#3b82f6", "#0000ff", "#ffffff", "#000000", "#ff0000"] {
            let color = Color::hex(original).unwrap();
            assert_eq!(color.to_gamut().to_hex(), original);
        }
    }

    // ── Known Values ─────────────────────────────────────────────────────

    #[test]
    fn tailwind_blue_500_known_oklch() {
        let blue = Color::hex("#3b82f6").unwrap();
        assert!(approx_eq(blue.l, 0.6231, 0.001), "L was {}", blue.l);
        assert!(approx_eq(blue.c, 0.188, 0.001), "C was {}", blue.c);
        assert!(approx_eq(blue.h, 259.8, 0.2), "H was {}", blue.h);
    }

    #[test]
    fn white_is_full_lightness() {
        let white = Color::srgb(1.0, 1.0, 1.0);
        assert!(approx_eq(white.l, 1.0, 1e-6));
        assert!(white.is_achromatic());
    }

    #[test]
    fn red_has_hue_near_30() {
        let red = Color::srgb(1.0, 0.0, 0.0);
        assert!(red.h > 20.0 && red.h < 35.0, "Red hue was {}", red.h);
        assert!(red.c > 0.2, "Red chroma was {}", red.c);
    }

    // ── Gamut Mapping ────────────────────────────────────────────────────

    #[test]
    fn in_gamut_colors_unchanged() {
        let color = Color::srgb(0.4, 0.6, 0.5);
        assert!(color.in_srgb_gamut());
        let mapped = color.to_gamut();
        assert!(approx_eq(color.c, mapped.c, 1e-12));
    }

    #[test]
    fn out_of_gamut_reduced_to_fit() {
        let color = Color::oklch(0.5, 0.4, 180.0);
        assert!(!color.in_srgb_gamut());
        let mapped = color.to_gamut();
        assert!(mapped.in_srgb_gamut());
        assert!(mapped.c < color.c);
        assert!(approx_eq(mapped.l, color.l, 1e-12));
        assert!(approx_eq(mapped.h, color.h, 1e-12));
    }
}
