//! Value objects for the greeting domain.

use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// The recipient of a greeting.
///
/// Invariant: never empty and never whitespace-only. Enforced at
/// construction; the original text is kept verbatim (no trimming) so the
/// greeting echoes exactly what the caller supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Validate and wrap a recipient name.
    pub fn parse(input: impl Into<String>) -> Result<Self, DomainError> {
        let input = input.into();
        if input.trim().is_empty() {
            return Err(DomainError::EmptyName { input });
        }
        Ok(Self(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
