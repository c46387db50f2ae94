//! Unified error handling for greetings-core.
//!
//! This module provides a unified error type that wraps domain errors, with
//! user-actionable suggestions.

use thiserror::Error;

use crate::domain::DomainError;

/// Root error type for greetings-core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GreetingsError {
    /// Errors from the domain layer (validation and construction).
    ///
    /// Displayed transparently so a missing name reads exactly
    /// `empty name` to callers.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl GreetingsError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
        }
    }

    /// `true` for a rejected recipient name.
    pub fn is_validation(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type GreetingsResult<T> = Result<T, GreetingsError>;
