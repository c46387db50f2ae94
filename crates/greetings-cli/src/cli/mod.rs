//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "greetings",
    bin_name = "greetings",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Randomised greetings for the people you name",
    long_about = "greetings picks one of a small set of message templates at \
                  random for every name you give it.",
    after_help = "EXAMPLES:\n\
        \x20 greetings greet Mater\n\
        \x20 greetings greet Mater Sally --seed 42\n\
        \x20 greetings --output-format json greet Mater Sally\n\
        \x20 greetings completions bash > /usr/share/bash-completion/completions/greetings",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Greet one or more people.
    #[command(
        visible_alias = "g",
        about = "Greet one or more people",
        after_help = "EXAMPLES:\n\
            \x20 greetings greet Mater\n\
            \x20 greetings greet Mater Sally Doc\n\
            \x20 greetings greet Mater --seed 7   # same greeting every run"
    )]
    Greet(GreetArgs),

    /// List the greeting templates.
    #[command(
        visible_alias = "ls",
        about = "List greeting templates",
        after_help = "EXAMPLES:\n\
            \x20 greetings templates\n\
            \x20 greetings --output-format json templates"
    )]
    Templates,

    /// Initialise a configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 greetings init           # default location\n\
            \x20 greetings init --local   # .greetings.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 greetings completions bash > ~/.local/share/bash-completion/completions/greetings\n\
            \x20 greetings completions zsh  > ~/.zfunc/_greetings\n\
            \x20 greetings completions fish > ~/.config/fish/completions/greetings.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 greetings config get random.seed\n\
            \x20 greetings config list\n\
            \x20 greetings config path"
    )]
    Config(ConfigCommands),
}

// ── greet ─────────────────────────────────────────────────────────────────────

/// Arguments for `greetings greet`.
#[derive(Debug, Args)]
pub struct GreetArgs {
    /// People to greet, in order.
    #[arg(value_name = "NAME", required = true, help = "Names to greet")]
    pub names: Vec<String>,

    /// Seed for reproducible template selection.
    #[arg(
        short = 's',
        long = "seed",
        value_name = "SEED",
        help = "Seed the random source (overrides random.seed)"
    )]
    pub seed: Option<u64>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `greetings init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.greetings.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `greetings completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `greetings config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `random.seed`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_greet_command() {
        let cli = Cli::parse_from(["greetings", "greet", "Mater", "Sally"]);
        if let Commands::Greet(args) = cli.command {
            assert_eq!(args.names, vec!["Mater", "Sally"]);
            assert_eq!(args.seed, None);
        } else {
            panic!("expected Greet command");
        }
    }

    #[test]
    fn parse_greet_with_seed_and_alias() {
        let cli = Cli::parse_from(["greetings", "g", "Mater", "--seed", "42"]);
        assert!(matches!(
            cli.command,
            Commands::Greet(GreetArgs { seed: Some(42), .. })
        ));
    }

    #[test]
    fn greet_accepts_empty_string_argument() {
        // Validation belongs to the core, not to clap.
        let cli = Cli::try_parse_from(["greetings", "greet", ""]).unwrap();
        assert!(matches!(cli.command, Commands::Greet(_)));
    }

    #[test]
    fn greet_requires_a_name() {
        assert!(Cli::try_parse_from(["greetings", "greet"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["greetings", "templates", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["greetings", "--quiet", "--verbose", "templates"]);
        assert!(result.is_err());
    }
}
