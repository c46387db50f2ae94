//! Tracing setup for the `greetings` binary.
//!
//! The library crates only emit events; this is the one place a subscriber
//! is installed. `RUST_LOG` replaces the level chosen by `-v`/`-q`.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events reach stderr without `RUST_LOG`.
const WORKSPACE_TARGETS: [&str; 3] = ["greetings", "greetings_core", "greetings_adapters"];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(workspace_directives(args.log_level())));

    // Greetings own stdout; diagnostics stay on stderr without timestamps.
    let layer = fmt::layer()
        .without_time()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

/// `greetings=<level>,greetings_core=<level>,...`; other crates stay off.
fn workspace_directives(level: LevelFilter) -> String {
    WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
