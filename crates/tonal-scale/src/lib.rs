//! # tonal-scale — OKLCH shade-ramp engine
//!
//! Turns a single color into a 13-step ramp (0, 50, 100 … 900, 950, 1000)
//! whose matched step is the input color itself, unchanged to the last
//! decimal digit.
//!
//! # Architecture
//!
//! ```text
//! "#3b82f6" / "oklch(62.3% 0.214 259.8)"
//!     │
//!     ▼
//! tonal-color:   parse into an exact-decimal OklchColor
//!     │
//!     ▼
//! pattern.rs:    reference lightness/chroma curves, one per hue family
//! select.rs:     choose the family (two-tier neutral check, hue bands)
//! matcher.rs:    nearest shade by lightness, amber tie-break
//! correction.rs: flag weak or ambiguous matches
//! blend.rs:      per-shade chroma blend toward the pattern
//!     │
//!     ▼
//! palette.rs:    13 PaletteSteps with gamut-mapped hex
//! export.rs:     CSS custom properties
//! ```
//!
//! # Exactness
//!
//! Lightness, chroma and hue are `rust_decimal::Decimal` throughout. Only the
//! final hex encoding drops into f64, so two runs on any machine produce
//! identical ramps.

// Pattern tables are long by nature, one row per shade.
#![allow(clippy::too_many_lines)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod blend;
pub mod correction;
pub mod export;
pub mod matcher;
pub mod palette;
pub mod pattern;
pub mod select;
pub mod shade;

pub use export::{ColorFormat, ExportOptions, css_variables};
pub use palette::{
    NamedPalette, Palette, PaletteStep, generate_palette, palette_from_hex, palette_from_oklch,
    parse_palette,
};
pub use pattern::{Pattern, PatternFamily};
pub use shade::{Shade, ShadeDefinition};
pub use tonal_color::{OklchColor, ParseError};
