pub mod template;

pub use crate::domain::DomainError;
pub use template::{PLACEHOLDER, Template};
