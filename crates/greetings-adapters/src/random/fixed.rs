//! Fixed-sequence random source for deterministic runs.

use greetings_core::application::ports::RandomSource;

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound, so `FixedRandom::constant(0)`
/// always selects the first template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRandom {
    values: Vec<usize>,
    position: usize,
    draws: usize,
}

impl FixedRandom {
    /// Create a source from a sequence of values.
    ///
    /// An empty sequence behaves like `constant(0)`.
    pub fn new(values: Vec<usize>) -> Self {
        let values = if values.is_empty() { vec![0] } else { values };
        Self {
            values,
            position: 0,
            draws: 0,
        }
    }

    /// Create a source that always returns the same value.
    pub fn constant(value: usize) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for FixedRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        let value = self.values[self.position];
        self.position = (self.position + 1) % self.values.len();
        self.draws += 1;
        value % bound.max(1)
    }
}

#[cfg(test)]
mod tests {
    use greetings_core::prelude::*;

    use super::*;

    #[test]
    fn constant_repeats() {
        let mut rng = FixedRandom::constant(1);
        assert_eq!(rng.next_index(3), 1);
        assert_eq!(rng.next_index(3), 1);
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn sequence_cycles_and_wraps() {
        let mut rng = FixedRandom::new(vec![0, 2, 5]);
        assert_eq!(rng.next_index(3), 0);
        assert_eq!(rng.next_index(3), 2);
        assert_eq!(rng.next_index(3), 2); // 5 % 3
        assert_eq!(rng.next_index(3), 0); // cycles back
    }

    #[test]
    fn empty_sequence_is_zero() {
        let mut rng = FixedRandom::new(Vec::new());
        assert_eq!(rng.next_index(4), 0);
    }

    #[test]
    fn drives_greeting_service() {
        let selector = TemplateSelector::from_templates(["Hi %s!", "Hello %s."]).unwrap();
        let service = GreetingService::new(selector);

        let mut rng = FixedRandom::constant(0);
        assert_eq!(service.greet("Mater", &mut rng).unwrap(), "Hi Mater!");

        let err = service.greet("", &mut rng).unwrap_err();
        assert_eq!(err.to_string(), "empty name");
        assert_eq!(rng.draws(), 1);
    }
}
