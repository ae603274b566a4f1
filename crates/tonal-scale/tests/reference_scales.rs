//! End-to-end scenarios against well-known design-token colors.
//!
//! Each reference color sits exactly on one of its family's shades, so the
//! generated ramp must anchor there and reproduce the input untouched.

use pretty_assertions::assert_eq;
use tonal_scale::{ParseError, PatternFamily, Shade, parse_palette};

fn anchor(input: &str) -> (PatternFamily, Shade) {
    let palette = parse_palette(input).unwrap_or_else(|e| panic!("{input}: {e}"));
    (palette.family(), palette.closest_step().shade)
}

// ── Reference colors ────────────────────────────────────────────────────

#[test]
fn mid_shades() {
    let cases = [
        ("oklch(63.7% 0.237 25.331)", PatternFamily::WarmRed, Shade::S500),
        ("oklch(76.9% 0.188 70.08)", PatternFamily::Orange, Shade::S500),
        ("oklch(79.5% 0.184 86.047)", PatternFamily::Yellow, Shade::S500),
        ("oklch(72.3% 0.219 149.579)", PatternFamily::Green, Shade::S500),
        ("oklch(71.5% 0.143 215.221)", PatternFamily::Cyan, Shade::S500),
        ("oklch(68.5% 0.169 237.323)", PatternFamily::Sky, Shade::S500),
        ("oklch(62.3% 0.214 259.815)", PatternFamily::Blue, Shade::S500),
        ("oklch(65.6% 0.241 354.308)", PatternFamily::Pink, Shade::S500),
        ("oklch(55.6% 0 0)", PatternFamily::Neutral, Shade::S500),
    ];
    for (input, family, shade) in cases {
        assert_eq!(anchor(input), (family, shade), "{input}");
    }
}

#[test]
fn outer_shades() {
    let cases = [
        ("oklch(96.2% 0.044 156.743)", PatternFamily::Green, Shade::S100),
        ("oklch(80.8% 0.114 19.571)", PatternFamily::WarmRed, Shade::S300),
        ("oklch(48.8% 0.243 264.376)", PatternFamily::Blue, Shade::S700),
        ("oklch(29.3% 0.066 243.157)", PatternFamily::Sky, Shade::S950),
    ];
    for (input, family, shade) in cases {
        assert_eq!(anchor(input), (family, shade), "{input}");
    }
}

// ── Scenarios ───────────────────────────────────────────────────────────

#[test]
fn hex_blue_lands_on_500() {
    let palette = parse_palette("#3b82f6").unwrap();
    assert_eq!(palette.family(), PatternFamily::Blue);

    let step = palette.closest_step();
    assert_eq!(step.shade, Shade::S500);
    assert!(step.is_closest);
    assert_eq!(step.hex, "#3b82f6");
}

#[test]
fn amber_boundary_prefers_500() {
    assert_eq!(anchor("oklch(78% 0.18 70)"), (PatternFamily::Orange, Shade::S500));
}

#[test]
fn amber_boundary_holds_for_equivalent_angles() {
    for input in ["oklch(78% 0.18 430)", "oklch(78% 0.18 -290)", "oklch(78% 0.18 -290deg)"] {
        assert_eq!(anchor(input), (PatternFamily::Orange, Shade::S500), "{input}");
    }
}

#[test]
fn exact_digits_survive_generation() {
    let palette = parse_palette("oklch(68.1% 0.162 75.834)").unwrap();
    let input = &palette.closest_step().oklch;
    assert_eq!(input.lightness.to_string(), "0.681");
    assert_eq!(input.chroma.to_string(), "0.162");
    assert_eq!(input.hue.map(|h| h.to_string()), Some("75.834".to_owned()));
}

#[test]
fn missing_hue_stays_missing() {
    let palette = parse_palette("oklch(50% 0 none)").unwrap();
    assert_eq!(palette.family(), PatternFamily::Neutral);
    assert!(palette.iter().all(|step| step.oklch.hue.is_none()));
}

#[test]
fn hue_carries_across_the_ramp() {
    let palette = parse_palette("oklch(62.3% 0.214 259.815)").unwrap();
    let hues: Vec<_> = palette.iter().map(|step| step.oklch.hue).collect();
    assert!(hues.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn ramp_gets_darker() {
    let palette = parse_palette("#ef4444").unwrap();
    let lightness: Vec<_> = palette.iter().map(|step| step.oklch.lightness).collect();
    assert!(lightness.windows(2).all(|w| w[0] > w[1]), "{lightness:?}");
}

#[test]
fn invalid_input_is_a_parse_error() {
    assert!(matches!(parse_palette("not a color"), Err(ParseError::Syntax(_))));
    assert!(parse_palette("oklch(50% 0)").is_err());
    assert!(parse_palette("#ggg").is_err());
}
