//! Greetings Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the greetings
//! generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          greetings-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (GreetingService, TemplateSelector)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: RandomSource)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    greetings-adapters (Infrastructure)  │
//! │ (SeededRandom, EntropyRandom, Fixed...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │            (Name, Template)             │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use greetings_core::prelude::*;
//!
//! # fn run(rng: &mut dyn RandomSource) -> GreetingsResult<()> {
//! let service = GreetingService::default();
//!
//! // 1. One name
//! let message = service.greet("Mater", rng)?;
//!
//! // 2. Many names
//! let messages = service.greet_all(["Mater", "Sally"], rng)?;
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GreetingService, TemplateInfo, TemplateSelector, ports::RandomSource,
    };
    pub use crate::domain::{DomainError, Name, Template};
    pub use crate::error::{GreetingsError, GreetingsResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
