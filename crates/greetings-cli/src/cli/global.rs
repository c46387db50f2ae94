//! Flags accepted by every `greetings` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};
use tracing::level_filters::LevelFilter;

/// Global arguments, flattened into [`super::Cli`].
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of what happens behind each greeting.
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        long_help = "Log more of what happens behind each greeting:
    -v      - which command ran and how it ended
    -vv     - names as they are greeted
    -vvv    - every template draw"
    )]
    pub verbose: u8,

    /// Only print greetings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print without colours.
    ///
    /// Any non-empty `NO_COLOR` other than a falsey word (`0`, `false`,
    /// `no`, `off`) turns colours off, as <https://no-color.org> asks.
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read settings from FILE on top of the usual locations.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How greetings and listings are written to stdout.
    #[arg(long, global = true, value_enum, default_value_t)]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Level for the workspace crates when `RUST_LOG` is unset.
    ///
    /// `--quiet` keeps errors only; each `-v` opens one more level above
    /// the default of warnings.
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Rendering of command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured, with headers.
    Human,
    /// One bare line per greeting or template.
    Plain,
    /// A single JSON document.
    Json,
}
