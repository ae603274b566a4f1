//! Palette assembly — from one input color to a 13-step ramp.
//!
//! ```text
//! OklchColor
//!     │
//!     ▼
//! select.rs:     pick the hue family's reference pattern
//!     │
//!     ▼
//! matcher.rs:    anchor the input at the nearest shade by lightness
//!     │
//!     ▼
//! correction.rs: flag weak or ambiguous anchors
//!     │
//!     ▼
//! blend.rs:      lightness from the pattern, chroma blended per shade
//!     │
//!     ▼
//! Palette (13 × PaletteStep, hex via gamut mapping)
//! ```
//!
//! Every call builds a fresh palette. Nothing is cached or shared except the
//! constant pattern tables.

use serde::Serialize;
use tonal_color::{OklchColor, ParseError, Result, parse_hex, parse_oklch};

use crate::blend::{ShadesAround, blend_color, chroma_scale};
use crate::correction::needs_strong_correction;
use crate::matcher::ShadeMatch;
use crate::pattern::PatternFamily;
use crate::select::select_pattern;
use crate::shade::Shade;

/// One shade of a generated palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteStep {
    pub shade: Shade,
    /// Opaque `#rrggbb`, gamut mapped into sRGB.
    pub hex: String,
    pub oklch: OklchColor,
    /// This shade is the input color itself.
    pub is_closest: bool,
    /// Set only on the closest step, when the match is weak or ambiguous.
    pub needs_strong_correction: bool,
}

/// A complete 13-step ramp, lightest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    family: PatternFamily,
    closest: Shade,
    steps: [PaletteStep; Shade::COUNT],
}

impl Palette {
    /// The hue family whose pattern shaped this ramp.
    #[must_use]
    pub const fn family(&self) -> PatternFamily {
        self.family
    }

    /// The step holding the input color.
    #[must_use]
    pub const fn closest_step(&self) -> &PaletteStep {
        &self.steps[self.closest.index()]
    }

    /// Whether the input was a poor fit for the ramp.
    #[must_use]
    pub const fn needs_strong_correction(&self) -> bool {
        self.closest_step().needs_strong_correction
    }

    #[must_use]
    pub const fn get(&self, shade: Shade) -> &PaletteStep {
        &self.steps[shade.index()]
    }

    #[must_use]
    pub const fn steps(&self) -> &[PaletteStep; Shade::COUNT] {
        &self.steps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaletteStep> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteStep;
    type IntoIter = std::slice::Iter<'a, PaletteStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Build the ramp for an already-parsed color.
#[must_use]
pub fn generate_palette(color: &OklchColor) -> Palette {
    let pattern = select_pattern(color);
    let closest = ShadeMatch::compute(pattern, color).closest.shade;
    let scale = chroma_scale(color, pattern.get(closest));
    let around = ShadesAround::around(closest);
    let ambiguous = needs_strong_correction(color, pattern, closest);

    tracing::debug!(
        family = %pattern.family(),
        %closest,
        %scale,
        ambiguous,
        "generating palette"
    );

    let steps = Shade::ALL.map(|shade| {
        let oklch = blend_color(shade, closest, color, pattern.get(shade), scale, &around);
        let is_closest = shade == closest;
        PaletteStep {
            shade,
            hex: oklch.to_hex(),
            oklch,
            is_closest,
            needs_strong_correction: is_closest && ambiguous,
        }
    });

    Palette { family: pattern.family(), closest, steps }
}

/// Build the ramp for a `#rgb` / `#rrggbb` string.
///
/// # Errors
///
/// Returns a [`ParseError`] if `input` is not a hex color.
pub fn palette_from_hex(input: &str) -> Result<Palette> {
    parse_hex(input).map(|color| generate_palette(&color))
}

/// Build the ramp for an `oklch()` string, keeping its exact digits.
///
/// # Errors
///
/// Returns a [`ParseError`] if `input` is not a valid `oklch()` color.
pub fn palette_from_oklch(input: &str) -> Result<Palette> {
    parse_oklch(input).map(|color| generate_palette(&color))
}

/// Build the ramp for any accepted input: hex with or without `#`, or
/// `oklch()`.
///
/// # Errors
///
/// Returns a [`ParseError`] describing why `input` was rejected.
pub fn parse_palette(input: &str) -> Result<Palette> {
    let s = input.trim();
    if tonal_color::color::is_hex(s) {
        palette_from_hex(s)
    } else {
        palette_from_oklch(s)
    }
}

// ---------------------------------------------------------------------------
// NamedPalette
// ---------------------------------------------------------------------------

/// A palette with the name and input it was created from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedPalette {
    pub name: String,
    pub input: String,
    pub palette: Palette,
}

impl NamedPalette {
    /// Rebuild a stored `{name, input}` pair.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `input` is not an accepted color.
    pub fn parse(name: impl Into<String>, input: impl Into<String>) -> Result<Self> {
        let input = input.into();
        let palette = parse_palette(&input)?;
        Ok(Self { name: name.into(), input, palette })
    }

    /// The trimmed name, or the input when no name was given.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.trim() {
            "" => &self.input,
            name => name,
        }
    }
}

/// Split a `name=input` argument. A bare input has an empty name.
///
/// # Errors
///
/// Returns [`ParseError::Empty`] when the input part is blank.
pub fn split_named(arg: &str) -> Result<(&str, &str)> {
    let (name, input) = match arg.split_once('=') {
        Some((name, input)) if !name.contains('(') => (name.trim(), input.trim()),
        _ => ("", arg.trim()),
    };
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok((name, input))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
