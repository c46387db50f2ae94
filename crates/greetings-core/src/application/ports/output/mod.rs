//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `greetings-adapters` crate provides implementations.

/// Port for uniformly distributed bounded integers.
///
/// The source is owned and seeded by the caller and only borrowed for the
/// duration of a single call; services never store it. One source per call
/// chain avoids sharing mutable generator state across threads.
///
/// Implemented by:
/// - `greetings_adapters::random::SeededRandom` (reproducible, `u64` seed)
/// - `greetings_adapters::random::EntropyRandom` (production, OS entropy)
/// - `greetings_adapters::random::FixedRandom` (replays a fixed sequence)
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource {
    /// Draw an integer uniformly from `0..bound`.
    ///
    /// Callers never pass `bound == 0`.
    fn next_index(&mut self, bound: usize) -> usize;
}
