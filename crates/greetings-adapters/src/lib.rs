//! Infrastructure adapters for greetings.
//!
//! This crate implements the ports defined in
//! `greetings-core::application::ports`. It owns every external dependency
//! the core refuses to take, which today means `rand`.

pub mod random;

// Re-export commonly used adapters
pub use random::{EntropyRandom, FixedRandom, SeededRandom};
