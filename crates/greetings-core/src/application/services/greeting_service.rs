//! Greeting Service - main application orchestrator.
//!
//! This service coordinates the greeting workflow:
//! 1. Validate the recipient name
//! 2. Pick a template with the caller's random source
//! 3. Substitute the name into the template
//!
//! It implements the driving port (incoming) and uses the `RandomSource`
//! driven port (outgoing).

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::{ports::RandomSource, services::TemplateSelector},
    domain::DomainValidator as validator,
    error::GreetingsResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub index: usize,
    pub text: String,
}

/// Main greeting service.
#[derive(Debug, Clone, Default)]
pub struct GreetingService {
    selector: TemplateSelector,
}

impl GreetingService {
    /// Create a new greeting service over the given templates.
    ///
    /// # Example
    ///
    /// ```rust
    /// use greetings_core::application::{GreetingService, RandomSource, TemplateSelector};
    ///
    /// struct First;
    /// impl RandomSource for First {
    ///     fn next_index(&mut self, _bound: usize) -> usize {
    ///         0
    ///     }
    /// }
    ///
    /// let selector = TemplateSelector::from_templates(["Hi %s!"]).unwrap();
    /// let service = GreetingService::new(selector);
    /// assert_eq!(service.greet("Mater", &mut First).unwrap(), "Hi Mater!");
    /// ```
    pub fn new(selector: TemplateSelector) -> Self {
        Self { selector }
    }

    /// Greet a single recipient.
    ///
    /// An empty or whitespace-only `name` fails with
    /// `DomainError::EmptyName` before any draw is taken from `rng`.
    #[instrument(level = "debug", skip(self, rng))]
    pub fn greet<R>(&self, name: &str, rng: &mut R) -> GreetingsResult<String>
    where
        R: RandomSource + ?Sized,
    {
        let name = validator::validate_name(name)?;

        let template = self.selector.pick(rng);
        debug!(template = %template, "Template selected");

        Ok(template.render(&name))
    }

    /// Greet every name, in order, into a name → message map.
    ///
    /// The first invalid name aborts the batch with that name's error and
    /// discards every message built so far. A repeated name keeps the
    /// message of its last occurrence.
    #[instrument(level = "debug", skip_all)]
    pub fn greet_all<I, S, R>(
        &self,
        names: I,
        rng: &mut R,
    ) -> GreetingsResult<HashMap<String, String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: RandomSource + ?Sized,
    {
        let mut messages = HashMap::new();

        for name in names {
            let name = name.as_ref();
            let message = self.greet(name, rng)?;
            messages.insert(name.to_owned(), message);
        }

        debug!(count = messages.len(), "Batch greeted");
        Ok(messages)
    }

    /// List the templates this service draws from.
    pub fn templates(&self) -> Vec<TemplateInfo> {
        self.selector
            .templates()
            .iter()
            .enumerate()
            .map(|(index, t)| TemplateInfo {
                index,
                text: t.as_str().to_string(),
            })
            .collect()
    }

    pub fn selector(&self) -> &TemplateSelector {
        &self.selector
    }
}
