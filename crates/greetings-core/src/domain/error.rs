// ============================================================================
// domain/error.rs - GREETING DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may hold on to the first failure of a batch)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// The recipient name was empty or whitespace-only.
    ///
    /// `input` keeps the offending text verbatim so a blank `"   "` can be
    /// told apart from a true empty string.
    #[error("empty name")]
    EmptyName { input: String },

    // ========================================================================
    // Construction Errors
    // ========================================================================
    #[error("invalid template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("a template selector needs at least one template")]
    NoTemplates,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName { .. } => vec![
                "Provide a real first name, please".into(),
                "Example: greetings greet Mater".into(),
            ],
            Self::InvalidTemplate { template, .. } => vec![
                format!("Template '{}' must contain exactly one '%s'", template),
                "Example: \"Hi, %s. Welcome!\"".into(),
            ],
            Self::NoTemplates => vec!["Supply at least one template".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName { .. } => ErrorCategory::Validation,
            Self::InvalidTemplate { .. } | Self::NoTemplates => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
