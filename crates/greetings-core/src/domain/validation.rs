use crate::domain::{entities::Template, error::DomainError, value_objects::Name};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_name(input: &str) -> Result<Name, DomainError> {
        Name::parse(input)
    }

    pub fn validate_template(text: &str) -> Result<Template, DomainError> {
        Template::new(text)
    }
}
