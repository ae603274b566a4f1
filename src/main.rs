// SPDX-License-Identifier: MIT
//
// tonal — generate 13-step OKLCH shade ramps from a single color.
//
// This is the binary that wires the crates to a command line:
//
//   tonal-color → parse hex / oklch() into exact-decimal OKLCH
//   tonal-scale → pattern selection, shade matching, chroma blending
//
// Each COLOR argument flows through:
//
//   "name=input" → split_named → NamedPalette::parse → render (table/css/json)
//
// A color that fails to parse is reported on stderr and skipped; the rest
// are still rendered and the exit status is 1.

mod cli;
mod logging;
mod render;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tonal_scale::NamedPalette;
use tonal_scale::palette::split_named;

use crate::cli::{Cli, OutputArg};
use crate::logging::{LogConfig, init_logging};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("tonal: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("tonal: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Parse every color and render the ones that succeeded.
///
/// Returns `Ok(false)` when at least one color was rejected.
fn run(cli: &Cli) -> Result<bool> {
    let mut palettes = Vec::with_capacity(cli.colors.len());
    let mut all_ok = true;

    for arg in &cli.colors {
        match parse_color(arg) {
            Ok(named) => palettes.push(named),
            Err(e) => {
                eprintln!("tonal: {e:#}");
                all_ok = false;
            }
        }
    }
    tracing::info!(parsed = palettes.len(), total = cli.colors.len(), "colors parsed");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let options = cli.export_options();
    match cli.output {
        OutputArg::Table => {
            let swatches = use_color(cli.color, stdout.is_terminal());
            render::table(&mut out, &palettes, options, swatches)?;
        }
        OutputArg::Css => render::css(&mut out, &palettes, options)?,
        OutputArg::Json => render::json(&mut out, &palettes)?,
    }
    out.flush().context("failed to write output")?;

    Ok(all_ok)
}

fn parse_color(arg: &str) -> Result<NamedPalette> {
    let (name, input) = split_named(arg).with_context(|| format!("invalid color {arg:?}"))?;
    let named =
        NamedPalette::parse(name, input).with_context(|| format!("invalid color {input:?}"))?;
    tracing::debug!(
        name = named.display_name(),
        family = %named.palette.family(),
        closest = %named.palette.closest_step().shade,
        "palette generated"
    );
    if named.palette.needs_strong_correction() {
        tracing::warn!(
            input,
            shade = %named.palette.closest_step().shade,
            "weak or ambiguous shade match"
        );
    }
    Ok(named)
}

/// Build logging configuration from CLI flags.
///
/// Explicit -v/-q takes precedence over `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        with_ansi: use_color(cli.color, io::stderr().is_terminal()),
    }
}

const fn use_color(choice: ColorChoice, is_terminal: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => is_terminal,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
