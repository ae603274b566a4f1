// SPDX-License-Identifier: MIT
//
// Logging setup for the command-line front-end.
//
// Libraries emit through `tracing`. The binary installs a fmt subscriber on
// stderr so stdout carries only the requested output. `RUST_LOG` wins over
// the default level unless -v/-q was given explicitly.

use std::io;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Crates whose events pass the level filter; everything else stays at warn.
const CRATES: [&str; 3] = ["tonal", "tonal_color", "tonal_scale"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
    /// Let `RUST_LOG` override `level`.
    pub use_env_filter: bool,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::WARN,
            use_env_filter: true,
            with_ansi: false,
        }
    }
}

/// Install the global subscriber. Call once, before any work.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(layer)
        .try_init()
        .context("failed to install log subscriber")
}

fn build_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    let mut directives = vec!["warn".to_owned()];
    directives.extend(CRATES.iter().map(|krate| format!("{krate}={level}")));
    directives.join(",")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            default_directives(LevelFilter::DEBUG),
            "warn,tonal=debug,tonal_color=debug,tonal_scale=debug"
        );
    }

    #[test]
    fn off_is_a_valid_level() {
        assert_eq!(
            default_directives(LevelFilter::OFF),
            "warn,tonal=off,tonal_color=off,tonal_scale=off"
        );
    }
}
