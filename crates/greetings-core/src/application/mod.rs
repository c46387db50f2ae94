//! Application layer for greetings.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GreetingService, TemplateSelector)
//! - **Ports**: Interface definitions (traits) for external dependencies
//!
//! The application layer coordinates the domain layer. Validation rules and
//! template rendering live in `crate::domain`; this layer adds the random
//! draw and the batch aggregation.

pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    GreetingService,
    TemplateInfo, // DTO for template listings
    TemplateSelector,
};

// Re-export port traits (for adapter implementation)
pub use ports::RandomSource;
