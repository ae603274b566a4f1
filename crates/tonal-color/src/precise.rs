// SPDX-License-Identifier: MIT
//
// Exact-decimal color parsing.
//
// `css::parse` validates the syntax and hands back f64 channels. Floats
// cannot hold 0.681 exactly, so for `oklch()` input we go back to the
// source text and rebuild each channel from the literal the user typed.
//
// Every numeric literal in the string is tokenized (with its unit suffix).
// Channels are then claimed in order (lightness, chroma, hue, alpha): each
// takes the first unclaimed token whose canonical value has the same
// integer part as the float the baseline parser produced. Claiming in order
// keeps `oklch(0.681 0.162 75.834)` from handing the lightness literal to
// chroma just because both start with `0.`.
//
// When no literal matches (one too long for a 96-bit decimal), or the match
// is in radians and has no exact degree form, the float is converted
// instead. That loses nothing the float had not already lost, so it is
// logged and not treated as an error.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal_macros::dec;

use crate::color::Color;
use crate::css::{self, CssColor, Unit};
use crate::error::{ParseError, Result};
use crate::oklch::OklchColor;

/// A numeric literal with an optional unit suffix.
static NUMBER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:e[+-]?\d+)?)(%|deg|grad|rad|turn)?")
        .expect("number token regex")
});

/// Chroma per percent in `oklch()` (100% = 0.4).
const CHROMA_PER_PERCENT: Decimal = dec!(0.004);

/// Parse an `oklch()` string, keeping the literal decimal digits.
///
/// Hue is `None` for `none`; alpha is `None` unless a numeric `/ A` part is
/// present.
///
/// # Errors
///
/// Returns [`ParseError::NotOklch`] for valid colors in another notation,
/// and the baseline parser's error for anything it rejects.
///
/// # Examples
///
/// ```
/// use tonal_color::precise::parse_oklch;
///
/// let color = parse_oklch("oklch(68.1% 0.162 75.834)").unwrap();
/// assert_eq!(color.lightness.to_string(), "0.681");
/// assert_eq!(color.chroma.to_string(), "0.162");
/// ```
pub fn parse_oklch(input: &str) -> Result<OklchColor> {
    let parsed = css::parse(input)?;
    let CssColor::Oklch { l, c, h, alpha } = parsed else {
        return Err(ParseError::NotOklch(parsed.model()));
    };

    let tokens = tokenize(input);
    let mut cursor = 0;
    let mut claim = |channel: Channel, baseline: f64| {
        claim_token(&tokens, &mut cursor, channel, baseline)
    };

    let lightness = claim(Channel::Lightness, l)?;
    let chroma = claim(Channel::Chroma, c)?;
    let hue = h.map(|h| claim(Channel::Hue, h)).transpose()?;
    let alpha = alpha.map(|a| claim(Channel::Alpha, a)).transpose()?;

    Ok(OklchColor { lightness, chroma, hue, alpha })
}

/// Parse a `#rgb` / `#rrggbb` string (the `#` is optional).
///
/// # Errors
///
/// Returns [`ParseError::Empty`] for blank input and
/// [`ParseError::InvalidHex`] for anything else that is not 3 or 6 hex
/// digits.
pub fn parse_hex(input: &str) -> Result<OklchColor> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    Color::hex(s)
        .map(OklchColor::from_color)
        .ok_or_else(|| ParseError::InvalidHex(s.to_owned()))
}

// ─── Tokens ──────────────────────────────────────────────────────────────────

struct Token<'a> {
    number: &'a str,
    unit: Unit,
}

fn tokenize(input: &str) -> Vec<Token<'_>> {
    NUMBER_TOKEN
        .captures_iter(input)
        .filter_map(|caps| {
            let number = caps.get(1)?.as_str();
            let unit = caps.get(2).map_or(Unit::Number, |m| Unit::split(m.as_str()).1);
            Some(Token { number, unit })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    Lightness,
    Chroma,
    Hue,
    Alpha,
}

impl Channel {
    const fn name(self) -> &'static str {
        match self {
            Self::Lightness => "lightness",
            Self::Chroma => "chroma",
            Self::Hue => "hue",
            Self::Alpha => "alpha",
        }
    }

    /// Convert a literal into this channel's canonical unit.
    ///
    /// The flag is false when the value had to pass through f64 (radian
    /// hues); such a value is good for matching but not for keeping.
    fn canonical(self, value: Decimal, unit: Unit) -> Option<(Decimal, bool)> {
        let v = match (self, unit) {
            (Self::Lightness | Self::Alpha, Unit::Percent) => value.checked_div(dec!(100))?,
            (Self::Chroma, Unit::Percent) => value.checked_mul(CHROMA_PER_PERCENT)?,
            (Self::Hue, Unit::Deg) | (_, Unit::Number) => value,
            (Self::Hue, Unit::Grad) => value.checked_mul(dec!(0.9))?,
            (Self::Hue, Unit::Turn) => value.checked_mul(dec!(360))?,
            (Self::Hue, Unit::Rad) => {
                let degrees = value.to_f64()?.to_degrees();
                return Decimal::from_f64(degrees).map(|d| (d, false));
            }
            _ => return None,
        };
        Some((v.normalize(), true))
    }
}

fn claim_token(
    tokens: &[Token<'_>],
    cursor: &mut usize,
    channel: Channel,
    baseline: f64,
) -> Result<Decimal> {
    let whole = Decimal::from_f64(baseline.trunc());
    let found = whole.and_then(|whole| {
        tokens.iter().enumerate().skip(*cursor).find_map(|(i, token)| {
            let (value, exact) = channel.canonical(decimal_literal(token.number)?, token.unit)?;
            (value.trunc() == whole).then_some((i, value, exact))
        })
    });

    if let Some((i, value, exact)) = found {
        *cursor = i + 1;
        if exact {
            return Ok(value);
        }
    }

    tracing::debug!(
        channel = channel.name(),
        baseline,
        "no exact literal for channel, using float value"
    );
    Decimal::from_f64(baseline)
        .map(|value| value.normalize())
        .ok_or_else(|| ParseError::OutOfRange {
            channel: channel.name(),
            value: baseline.to_string(),
        })
}

/// Build a `Decimal` from a CSS number literal without going through f64.
///
/// CSS allows `.5`, `5.`, `+5` and exponents, none of which
/// `Decimal::from_str_exact` accepts as written.
fn decimal_literal(number: &str) -> Option<Decimal> {
    let number = number.strip_prefix('+').unwrap_or(number);
    let (sign, rest) = number.strip_prefix('-').map_or(("", number), |rest| ("-", rest));
    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(at) => (&rest[..at], Some(&rest[at + 1..])),
        None => (rest, None),
    };
    let mantissa = mantissa.strip_suffix('.').unwrap_or(mantissa);
    let lead = if mantissa.starts_with('.') { "0" } else { "" };

    match exponent {
        Some(exp) => Decimal::from_scientific(&format!("{sign}{lead}{mantissa}e{exp}")).ok(),
        None => Decimal::from_str_exact(&format!("{sign}{lead}{mantissa}")).ok(),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
