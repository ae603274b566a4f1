// SPDX-License-Identifier: MIT
//
// OklchColor — an OKLCH value held in exact decimals.
//
// This is the type the palette engine computes with. Lightness, chroma, hue
// and alpha are `Decimal`s so that `oklch(68.1% 0.162 75.834)` stays 0.681,
// 0.162, 75.834 all the way through, and two machines produce identical
// ramps. Hue and alpha are optional: an achromatic color has no hue at all
// (which is not the same as hue 0), and an opaque color has no alpha.
//
// Display form is the CSS one, `oklch(68.1% 0.162 75.834)`, with lightness
// as a percentage and `none` for a missing hue. Parsing that string back
// through `precise::parse_oklch` yields an equal value.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::color::Color;

const FULL_TURN: Decimal = dec!(360);

/// An OKLCH color with exact decimal channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OklchColor {
    /// Lightness, 0 to 1.
    pub lightness: Decimal,
    /// Chroma, 0 upward.
    pub chroma: Decimal,
    /// Hue in degrees. `None` for achromatic colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<Decimal>,
    /// Alpha, 0 to 1. `None` when opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<Decimal>,
}

impl OklchColor {
    /// Create an opaque color.
    #[must_use]
    pub const fn new(lightness: Decimal, chroma: Decimal, hue: Option<Decimal>) -> Self {
        Self { lightness, chroma, hue, alpha: None }
    }

    /// Return a copy with an explicit alpha.
    #[must_use]
    pub const fn with_alpha(self, alpha: Decimal) -> Self {
        Self { alpha: Some(alpha), ..self }
    }

    /// Build from a float color, e.g. one decoded from hex.
    ///
    /// Achromatic colors lose their hue.
    #[must_use]
    pub fn from_color(color: Color) -> Self {
        let hue = (!color.is_achromatic()).then(|| to_decimal(color.h));
        Self::new(to_decimal(color.l), to_decimal(color.c), hue)
    }

    /// Hue normalized into `[0, 360)`, or `None` when achromatic.
    #[must_use]
    pub fn normalized_hue(&self) -> Option<Decimal> {
        self.hue.map(normalize_hue)
    }

    /// Convert to a float color for sRGB conversion.
    ///
    /// A missing hue becomes 0, which is harmless for achromatic colors.
    /// Alpha has no float counterpart and is dropped.
    #[must_use]
    pub fn to_color(&self) -> Color {
        Color::oklch(
            to_f64(self.lightness),
            to_f64(self.chroma),
            self.hue.map_or(0.0, to_f64),
        )
    }

    /// Opaque `#rrggbb`, gamut mapped into sRGB by chroma reduction.
    ///
    /// Alpha is ignored.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_color().to_gamut().to_hex()
    }
}

impl fmt::Display for OklchColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = (self.lightness * dec!(100)).normalize();
        let c = self.chroma.normalize();
        write!(f, "oklch({l}% {c} ")?;
        match self.hue {
            Some(h) => write!(f, "{}", h.normalize())?,
            None => f.write_str("none")?,
        }
        if let Some(alpha) = self.alpha {
            write!(f, " / {}", alpha.normalize())?;
        }
        f.write_str(")")
    }
}

/// Normalize a hue angle into `[0, 360)`.
#[must_use]
pub fn normalize_hue(h: Decimal) -> Decimal {
    let h = h % FULL_TURN;
    if h.is_sign_negative() && !h.is_zero() { h + FULL_TURN } else { h.abs() }
}

fn to_decimal(v: f64) -> Decimal {
    Decimal::from_f64(v).unwrap_or_default()
}

fn to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or_default()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
