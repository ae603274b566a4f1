// SPDX-License-Identifier: MIT
//
// Output rendering for the three --output modes.
//
//   table → one aligned block per palette, optional truecolor swatches
//   css   → --color-<name>-<shade> custom properties
//   json  → the full palettes, every field, all 13 shades
//
// Everything writes to an `impl Write` so the same code serves stdout and
// the tests.

use std::io::{self, Write};

use anyhow::Result;
use tonal_scale::{ExportOptions, NamedPalette, PaletteStep, css_variables};

/// Width of a color swatch in cells.
const SWATCH: &str = "      ";

// ─── Table ──────────────────────────────────────────────────────────────────

/// Write one table per palette.
///
/// With `swatches`, each row starts with a 24-bit background-colored block.
pub fn table(
    w: &mut impl Write,
    palettes: &[NamedPalette],
    options: ExportOptions,
    swatches: bool,
) -> io::Result<()> {
    for (i, named) in palettes.iter().enumerate() {
        if i > 0 {
            writeln!(w)?;
        }
        writeln!(
            w,
            "{}  {}  {}",
            named.display_name(),
            named.palette.family(),
            named.input.trim()
        )?;
        for step in named.palette.iter().filter(|step| options.includes(step)) {
            row(w, step, options, swatches)?;
        }
    }
    Ok(())
}

fn row(
    w: &mut impl Write,
    step: &PaletteStep,
    options: ExportOptions,
    swatches: bool,
) -> io::Result<()> {
    write!(w, "  {:>4}  ", step.shade.value())?;
    if swatches {
        swatch(w, step)?;
        w.write_all(b"  ")?;
    }
    w.write_all(options.format.format(step).as_bytes())?;
    if step.is_closest {
        write!(w, "  ◀ input")?;
        if step.needs_strong_correction {
            write!(w, " (strong correction)")?;
        }
    }
    writeln!(w)
}

/// A block of background color: `ESC[48;2;R;G;Bm` … `ESC[0m`.
fn swatch(w: &mut impl Write, step: &PaletteStep) -> io::Result<()> {
    let (r, g, b) = step.oklch.to_color().to_gamut().to_rgb8();
    write!(w, "\x1b[48;2;{r};{g};{b}m{SWATCH}\x1b[0m")
}

// ─── CSS ────────────────────────────────────────────────────────────────────

pub fn css(
    w: &mut impl Write,
    palettes: &[NamedPalette],
    options: ExportOptions,
) -> io::Result<()> {
    let out = css_variables(palettes, options);
    if out.is_empty() {
        return Ok(());
    }
    writeln!(w, "{out}")
}

// ─── JSON ───────────────────────────────────────────────────────────────────

pub fn json(w: &mut impl Write, palettes: &[NamedPalette]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, palettes)?;
    writeln!(w)?;
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tonal_scale::ColorFormat;

    use super::*;

    fn palettes() -> Vec<NamedPalette> {
        vec![
            NamedPalette::parse("brand", "#3b82f6").unwrap(),
            NamedPalette::parse("", "oklch(63.7% 0.237 25.331)").unwrap(),
        ]
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    // ── Table ───────────────────────────────────────────────────────────

    #[test]
    fn table_marks_the_input() {
        let out = render(|w| table(w, &palettes(), ExportOptions::default(), false));
        assert!(out.starts_with("brand  blue  #3b82f6\n"), "{out}");
        assert!(out.contains("   500  #3b82f6  ◀ input\n"), "{out}");
        assert_eq!(out.matches("◀ input").count(), 2);
    }

    #[test]
    fn table_rows_follow_options() {
        let options = ExportOptions { format: ColorFormat::Oklch, edge_shades: true };
        let out = render(|w| table(w, &palettes()[1..], options, false));
        // Header plus 13 rows.
        assert_eq!(out.lines().count(), 14);
        assert!(out.contains("   500  oklch(63.7% 0.237 25.331)  ◀ input"), "{out}");
    }

    #[test]
    fn swatches_use_truecolor_background() {
        let out = render(|w| table(w, &palettes()[..1], ExportOptions::default(), true));
        assert!(out.contains("\x1b[48;2;59;130;246m"), "{out:?}");
        assert!(out.contains("\x1b[0m"));
    }

    #[test]
    fn no_swatches_no_escapes() {
        let out = render(|w| table(w, &palettes(), ExportOptions::default(), false));
        assert!(!out.contains('\x1b'));
    }

    // ── CSS / JSON ──────────────────────────────────────────────────────

    #[test]
    fn css_ends_with_newline() {
        let out = render(|w| css(w, &palettes()[..1], ExportOptions::default()));
        assert_eq!(out.lines().count(), 11);
        assert!(out.ends_with(";\n"));
    }

    #[test]
    fn json_is_an_array_of_palettes() {
        let mut out = Vec::new();
        json(&mut out, &palettes()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["name"], "brand");
        assert_eq!(value[0]["palette"]["family"], "blue");
        assert_eq!(value[1]["palette"]["steps"][6]["oklch"]["lightness"], "0.637");
    }
}
