// SPDX-License-Identifier: MIT
//
// tonal-color — OKLCH color values for the tonal palette engine.
//
// Two representations live here. `Color` is a plain f64 OKLCH color that
// knows how to get to and from sRGB hex, including gamut mapping by chroma
// reduction. `OklchColor` holds the same channels as exact decimals and is
// what the palette engine computes with, so a lightness typed as 68.1%
// stays 0.681 and never becomes 0.6809999.
//
// Parsing is layered: `css` validates CSS color syntax and produces floats,
// and `precise` re-reads the literal digits from the source text.

pub mod color;
pub mod css;
pub mod error;
pub mod oklch;
pub mod precise;

pub use color::Color;
pub use error::{ParseError, Result};
pub use oklch::OklchColor;
pub use precise::{parse_hex, parse_oklch};
