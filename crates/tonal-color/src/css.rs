// SPDX-License-Identifier: MIT
//
// Baseline CSS color parser.
//
// Validates CSS color syntax and produces f64 channel values in canonical
// units: lightness 0–1, chroma in OKLCH units, hue in degrees, alpha 0–1.
// It knows hex colors and `oklch()`; other CSS color functions are
// recognised by name so callers get a model error instead of a syntax error.
//
// Floats are good enough for validation and for the hex path. Callers that
// need the user's literal digits go through `precise`, which re-reads the
// numbers from the source text.
//
// Accepted oklch() grammar (space separated, case-insensitive name):
//
//   oklch( L C H )
//   oklch( L C H / A )
//
//   L = number | percentage            (100% = 1.0)
//   C = number | percentage            (100% = 0.4)
//   H = number | angle | none          (deg, rad, grad, turn)
//   A = number | percentage | none    (none = no alpha, same as omitting it)

use crate::color::Color;
use crate::error::{ParseError, Result};

/// Chroma that `100%` stands for in `oklch()`.
const CHROMA_PERCENT_REFERENCE: f64 = 0.4;

/// CSS color functions we recognise but do not accept.
const OTHER_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "color",
];

/// A color as understood by the baseline parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssColor {
    /// A `#rgb` / `#rrggbb` color.
    Hex(Color),
    /// An `oklch()` color. `h` is `None` for `none`; `alpha` is `None`
    /// when no `/ A` part was written.
    Oklch {
        l: f64,
        c: f64,
        h: Option<f64>,
        alpha: Option<f64>,
    },
}

impl CssColor {
    /// The color model name, as it would appear in CSS.
    #[must_use]
    pub const fn model(&self) -> &'static str {
        match self {
            Self::Hex(_) => "rgb",
            Self::Oklch { .. } => "oklch",
        }
    }
}

/// Parse a CSS color string.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem found.
pub fn parse(input: &str) -> Result<CssColor> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }

    if s.starts_with('#') {
        return Color::hex(s)
            .map(CssColor::Hex)
            .ok_or_else(|| ParseError::InvalidHex(s.to_owned()));
    }

    let Some(open) = s.find('(') else {
        return Err(ParseError::Syntax(format!("unrecognized color {s:?}")));
    };
    let name = s[..open].trim_end().to_ascii_lowercase();
    let Some(args) = s[open + 1..].strip_suffix(')') else {
        return Err(ParseError::Syntax(format!("missing closing parenthesis in {s:?}")));
    };

    match name.as_str() {
        "oklch" => parse_oklch_args(args),
        other if OTHER_FUNCTIONS.contains(&other) => {
            Err(ParseError::UnsupportedModel(other.to_owned()))
        }
        other => Err(ParseError::Syntax(format!("unknown color function {other:?}"))),
    }
}

fn parse_oklch_args(args: &str) -> Result<CssColor> {
    if args.contains(',') {
        return Err(ParseError::Syntax("oklch() takes space-separated values".into()));
    }

    let mut parts = args.split('/');
    let channels = parts.next().unwrap_or_default();
    let alpha_part = parts.next();
    if parts.next().is_some() {
        return Err(ParseError::Syntax("more than one '/' in oklch()".into()));
    }

    let channels: Vec<&str> = channels.split_whitespace().collect();
    let [l, c, h] = channels.as_slice() else {
        return Err(ParseError::Syntax(format!(
            "oklch() needs 3 channel values, got {}",
            channels.len()
        )));
    };

    let l = match parse_component(l)? {
        (v, Unit::Percent) => v / 100.0,
        (v, Unit::Number) => v,
        (_, unit) => return Err(unexpected_unit("lightness", unit)),
    };
    if !(0.0..=1.0).contains(&l) {
        return Err(out_of_range("lightness", l));
    }

    let c = match parse_component(c)? {
        (v, Unit::Percent) => v / 100.0 * CHROMA_PERCENT_REFERENCE,
        (v, Unit::Number) => v,
        (_, unit) => return Err(unexpected_unit("chroma", unit)),
    };
    if c < 0.0 {
        return Err(out_of_range("chroma", c));
    }

    let h = if h.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(match parse_component(h)? {
            (v, Unit::Number | Unit::Deg) => v,
            (v, Unit::Rad) => v.to_degrees(),
            (v, Unit::Grad) => v * 0.9,
            (v, Unit::Turn) => v * 360.0,
            (_, unit) => return Err(unexpected_unit("hue", unit)),
        })
    };

    let alpha = match alpha_part {
        None => None,
        Some(part) => {
            let tokens: Vec<&str> = part.split_whitespace().collect();
            let [a] = tokens.as_slice() else {
                return Err(ParseError::Syntax("expected one alpha value after '/'".into()));
            };
            if a.eq_ignore_ascii_case("none") {
                return Ok(CssColor::Oklch { l, c, h, alpha: None });
            }
            let a = match parse_component(a)? {
                (v, Unit::Percent) => v / 100.0,
                (v, Unit::Number) => v,
                (_, unit) => return Err(unexpected_unit("alpha", unit)),
            };
            if !(0.0..=1.0).contains(&a) {
                return Err(out_of_range("alpha", a));
            }
            Some(a)
        }
    };

    Ok(CssColor::Oklch { l, c, h, alpha })
}

// ─── Components ──────────────────────────────────────────────────────────────

/// Unit suffix on a numeric component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Number,
    Percent,
    Deg,
    Rad,
    Grad,
    Turn,
}

impl Unit {
    /// Split a unit suffix off a token. `grad` is tried before `rad`.
    #[must_use]
    pub fn split(token: &str) -> (&str, Self) {
        const SUFFIXES: [(&str, Unit); 5] = [
            ("%", Unit::Percent),
            ("deg", Unit::Deg),
            ("grad", Unit::Grad),
            ("rad", Unit::Rad),
            ("turn", Unit::Turn),
        ];
        let lower = token.to_ascii_lowercase();
        for (suffix, unit) in SUFFIXES {
            if lower.ends_with(suffix) {
                return (&token[..token.len() - suffix.len()], unit);
            }
        }
        (token, Self::Number)
    }

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Number => "",
            Self::Percent => "%",
            Self::Deg => "deg",
            Self::Rad => "rad",
            Self::Grad => "grad",
            Self::Turn => "turn",
        }
    }
}

fn parse_component(token: &str) -> Result<(f64, Unit)> {
    let (number, unit) = Unit::split(token);
    let starts_numeric = number
        .chars()
        .next()
        .is_some_and(|ch| ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.'));
    let value = number
        .parse::<f64>()
        .ok()
        .filter(|v| starts_numeric && v.is_finite())
        .ok_or_else(|| ParseError::Syntax(format!("invalid number {token:?}")))?;
    Ok((value, unit))
}

fn unexpected_unit(channel: &str, unit: Unit) -> ParseError {
    ParseError::Syntax(format!("{channel} does not accept '{}'", unit.suffix()))
}

fn out_of_range(channel: &'static str, value: f64) -> ParseError {
    ParseError::OutOfRange { channel, value: value.to_string() }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
