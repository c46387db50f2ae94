//! Core domain layer for greetings.
//!
//! This module contains pure business logic with no I/O and no randomness.
//! Template selection needs a random draw, so it lives in the application
//! layer behind the `RandomSource` port.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable values**: `Name` and `Template` are validated once and
//!   never change
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::template::{PLACEHOLDER, Template};
pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
pub use value_objects::Name;
