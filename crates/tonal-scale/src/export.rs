//! CSS custom-property export.
//!
//! Each named palette becomes a block of `--color-<name>-<shade>: <value>;`
//! declarations, blocks separated by a blank line. Shades 0 and 1000 are
//! pure white and black and are left out unless asked for.

use std::fmt;
use std::str::FromStr;

use crate::palette::{NamedPalette, PaletteStep};

/// How a color value is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    #[default]
    Hex,
    Oklch,
}

impl ColorFormat {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Oklch => "oklch",
        }
    }

    /// Format one palette step's color.
    #[must_use]
    pub fn format(self, step: &PaletteStep) -> String {
        match self {
            Self::Hex => step.hex.clone(),
            Self::Oklch => step.oklch.to_string(),
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "oklch" => Ok(Self::Oklch),
            other => Err(format!("unknown color format {other:?} (expected hex or oklch)")),
        }
    }
}

/// Output options shared by every exporter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ColorFormat,
    /// Include shades 0 and 1000.
    pub edge_shades: bool,
}

impl ExportOptions {
    /// Whether `step` should appear in the output.
    #[must_use]
    pub const fn includes(&self, step: &PaletteStep) -> bool {
        self.edge_shades || !step.shade.is_edge()
    }
}

/// The identifier used in variable names: the display name without `#`.
#[must_use]
pub fn variable_name(palette: &NamedPalette) -> String {
    palette.display_name().replacen('#', "", 1)
}

/// Render CSS custom properties for every palette.
#[must_use]
pub fn css_variables(palettes: &[NamedPalette], options: ExportOptions) -> String {
    palettes
        .iter()
        .map(|named| {
            let name = variable_name(named);
            named
                .palette
                .iter()
                .filter(|step| options.includes(step))
                .map(|step| format!("--color-{name}-{}: {};", step.shade, options.format.format(step)))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn named(name: &str, input: &str) -> NamedPalette {
        NamedPalette::parse(name, input).unwrap()
    }

    #[test]
    fn one_line_per_inner_shade() {
        let css = css_variables(&[named("brand", "#3b82f6")], ExportOptions::default());
        let lines: Vec<&str> = css.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("--color-brand-50: #"));
        assert!(lines[10].starts_with("--color-brand-950: #"));
        assert!(lines.iter().all(|l| l.ends_with(';')));
    }

    #[test]
    fn matched_shade_keeps_input_hex() {
        let css = css_variables(&[named("brand", "#3b82f6")], ExportOptions::default());
        assert!(css.contains("--color-brand-500: #3b82f6;"), "{css}");
    }

    #[test]
    fn edge_shades_on_request() {
        let options = ExportOptions { edge_shades: true, ..ExportOptions::default() };
        let css = css_variables(&[named("x", "#3b82f6")], options);
        assert_eq!(css.lines().count(), 13);
        assert!(css.starts_with("--color-x-0: #ffffff;"));
        assert!(css.ends_with("--color-x-1000: #000000;"));
    }

    #[test]
    fn blocks_are_separated_by_a_blank_line() {
        let css = css_variables(
            &[named("a", "#3b82f6"), named("b", "#ef4444")],
            ExportOptions::default(),
        );
        let blocks: Vec<&str> = css.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("--color-a-50:"));
        assert!(blocks[1].starts_with("--color-b-50:"));
    }

    #[test]
    fn unnamed_palette_uses_input_without_hash() {
        let palette = named("", "#3b82f6");
        assert_eq!(variable_name(&palette), "3b82f6");
        let css = css_variables(&[palette], ExportOptions::default());
        assert!(css.starts_with("--color-3b82f6-50:"));
    }

    #[test]
    fn oklch_values() {
        let options = ExportOptions { format: ColorFormat::Oklch, ..ExportOptions::default() };
        let css = css_variables(&[named("amber", "oklch(68.1% 0.162 75.834)")], options);
        assert!(css.contains(": oklch(68.1% 0.162 75.834);"), "{css}");
    }

    #[test]
    fn empty_list_is_empty_output() {
        assert_eq!(css_variables(&[], ExportOptions::default()), "");
    }

    #[test]
    fn format_names() {
        assert_eq!(ColorFormat::default(), ColorFormat::Hex);
        assert_eq!("OKLCH".parse::<ColorFormat>(), Ok(ColorFormat::Oklch));
        assert_eq!(ColorFormat::Hex.to_string(), "hex");
        assert!("rgb".parse::<ColorFormat>().is_err());
    }
}
