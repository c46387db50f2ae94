//! `RandomSource` adapters.

mod fixed;
mod std_rng;

pub use fixed::FixedRandom;
pub use std_rng::{EntropyRandom, SeededRandom};
