//! Implementation of the `greetings greet` command.

use std::collections::HashSet;

use greetings_adapters::{EntropyRandom, SeededRandom};
use greetings_core::application::{GreetingService, RandomSource};
use tracing::info;

use crate::{
    cli::{GreetArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: GreetArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = GreetingService::default();
    let mut rng = random_source(args.seed.or(config.random.seed));

    let greetings = build_greetings(&service, &args.names, rng.as_mut())?;
    info!(count = greetings.len(), "Greetings generated");

    match output.format() {
        OutputFormat::Json => {
            let map: serde_json::Map<String, serde_json::Value> = greetings
                .into_iter()
                .map(|(name, message)| (name, message.into()))
                .collect();
            output.json(&map)?;
        }
        _ => {
            for (_, message) in &greetings {
                output.data(message)?;
            }
        }
    }

    Ok(())
}

/// Pick the random source: a fixed seed reproduces, otherwise OS entropy.
fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => {
            info!(seed, "Using seeded random source");
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(EntropyRandom::new()),
    }
}

/// Greet `names` and return `(name, message)` pairs in first-seen order,
/// one per distinct name.
fn build_greetings(
    service: &GreetingService,
    names: &[String],
    rng: &mut dyn RandomSource,
) -> CliResult<Vec<(String, String)>> {
    if let [name] = names {
        let message = service.greet(name, rng)?;
        return Ok(vec![(name.clone(), message)]);
    }

    let mut messages = service.greet_all(names, rng)?;

    let mut seen = HashSet::new();
    Ok(names
        .iter()
        .map(String::as_str)
        .filter(|name| seen.insert(*name))
        .filter_map(|name| messages.remove_entry(name))
        .collect())
}
