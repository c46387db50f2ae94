//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use cases "greet one name" and "greet a batch of names".

pub mod greeting_service;
pub mod template_selector;

pub use greeting_service::{GreetingService, TemplateInfo};
pub use template_selector::TemplateSelector;
