//! Implementation of the `greetings templates` command.

use greetings_core::application::GreetingService;

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

pub fn execute(output: OutputManager) -> CliResult<()> {
    let service = GreetingService::default();
    let templates = service.templates();

    match output.format() {
        OutputFormat::Json => output.json(&templates)?,
        OutputFormat::Human => {
            output.header("Available Templates:")?;
            for t in &templates {
                output.data(&format!("  [{}] {}", t.index, t.text))?;
            }
        }
        _ => {
            for t in &templates {
                output.data(&t.text)?;
            }
        }
    }

    Ok(())
}
