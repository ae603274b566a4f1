// SPDX-License-Identifier: MIT
//
// Parse errors for color input.
//
// Every variant is recoverable: the caller keeps whatever palette it had
// and marks the input as invalid.

use thiserror::Error;

/// Why a color string could not be turned into an OKLCH value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    #[error("invalid color syntax: {0}")]
    Syntax(String),

    #[error("unsupported color function: {0}()")]
    UnsupportedModel(String),

    #[error("expected an oklch() color, got {0}")]
    NotOklch(&'static str),

    #[error("{channel} out of range: {value}")]
    OutOfRange { channel: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ParseError>;
