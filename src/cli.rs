// SPDX-License-Identifier: MIT
//
// Command-line arguments.

use clap::{ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tonal_scale::{ColorFormat, ExportOptions};

#[derive(Parser)]
#[command(
    name = "tonal",
    version,
    about = "Generate 13-step OKLCH shade ramps from a single color",
    long_about = "Generate 13-step OKLCH shade ramps (0, 50, 100 … 950, 1000) from a \
                  single color.\n\n\
                  The input color is kept exactly at the shade it matches; the other \
                  shades follow a reference curve for its hue family.\n\n\
                  Colors are hex (#3b82f6, 3b82f6, #38f) or CSS oklch() \
                  (\"oklch(62.3% 0.214 259.8)\"). Prefix with NAME= to name a palette."
)]
pub struct Cli {
    /// Colors to expand, each INPUT or NAME=INPUT.
    #[arg(value_name = "COLOR", required = true)]
    pub colors: Vec<String>,

    /// How color values are written.
    #[arg(long, value_enum, default_value_t = FormatArg::Hex)]
    pub format: FormatArg,

    /// What to print.
    #[arg(long, value_enum, default_value_t = OutputArg::Table)]
    pub output: OutputArg,

    /// Include shades 0 and 1000 (pure white and black).
    #[arg(long)]
    pub edge_shades: bool,

    /// Color swatches in table output and ANSI in logs.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

impl Cli {
    pub const fn export_options(&self) -> ExportOptions {
        ExportOptions {
            format: self.format.color_format(),
            edge_shades: self.edge_shades,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Hex,
    Oklch,
}

impl FormatArg {
    pub const fn color_format(self) -> ColorFormat {
        match self {
            Self::Hex => ColorFormat::Hex,
            Self::Oklch => ColorFormat::Oklch,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    /// One aligned table per palette.
    Table,
    /// CSS custom properties.
    Css,
    /// Full palettes as JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["tonal", "#3b82f6"]).unwrap();
        assert_eq!(cli.colors, ["#3b82f6"]);
        assert_eq!(cli.output, OutputArg::Table);
        assert_eq!(cli.export_options(), ExportOptions::default());
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from([
            "tonal",
            "--format",
            "oklch",
            "--output",
            "css",
            "--edge-shades",
            "brand=#3b82f6",
            "oklch(70% 0.1 200)",
        ])
        .unwrap();
        assert_eq!(cli.colors.len(), 2);
        assert_eq!(cli.output, OutputArg::Css);
        assert_eq!(
            cli.export_options(),
            ExportOptions { format: ColorFormat::Oklch, edge_shades: true }
        );
    }

    #[test]
    fn needs_a_color() {
        assert!(Cli::try_parse_from(["tonal"]).is_err());
    }
}
