//! Errors surfaced by the `greetings` binary, their exit codes and how they
//! are written to stderr.

use std::error::Error;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use greetings_core::{
    domain::DomainError,
    error::{ErrorCategory as CoreCategory, GreetingsError},
};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `greetings-core`.
    ///
    /// Displayed verbatim so an empty name reads `empty name`.
    #[error(transparent)]
    Core(#[from] GreetingsError),

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Wrap an `anyhow` error raised while loading configuration.
    pub fn config(err: anyhow::Error) -> Self {
        CliError::ConfigError {
            message: format!("{err:#}"),
            source: Some(err.into()),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file: greetings config path".into(),
                "Use 'greetings init --force' to write a fresh default config".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Render the error for stderr.
    ///
    /// A rejected name is a one-line verdict plus its hint. Configuration and
    /// I/O failures add their cause chain with `verbose`, or a pointer to
    /// `-v` when there is a chain to show.
    pub fn render(&self, color: bool, verbose: bool) -> String {
        let paint = |text: &str, style: Style| {
            if color {
                text.style(style).to_string()
            } else {
                text.to_owned()
            }
        };

        let mut out = format!("{} {self}\n", paint("error:", Style::new().red().bold()));

        if let Some(input) = self.rejected_input().filter(|input| !input.is_empty()) {
            let label = paint("note:", Style::new().bold());
            out.push_str(&format!("  {label} received {input:?}\n"));
        }

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                let label = paint("caused by:", Style::new().dimmed());
                out.push_str(&format!("  {label} {err}\n"));
                cause = err.source();
            }
        }

        for hint in self.suggestions() {
            out.push_str(&format!("  {} {hint}\n", paint("hint:", Style::new().yellow())));
        }

        if !verbose && self.source().is_some() {
            let footer = paint("Run again with -v for the full cause.", Style::new().dimmed());
            out.push_str(&format!("{footer}\n"));
        }

        out
    }

    /// The name the core refused, if this is a rejected greeting.
    fn rejected_input(&self) -> Option<&str> {
        match self {
            Self::Core(GreetingsError::Domain(DomainError::EmptyName { input })) => Some(input),
            _ => None,
        }
    }

    /// Record the failure through `tracing` before it is rendered.
    ///
    /// Rejected names are already reported to the user, so they stay at debug.
    pub fn log(&self) {
        match self {
            Self::Core(err) if err.is_validation() => {
                tracing::debug!(input = ?self.rejected_input(), "Greeting rejected: {err}");
            }
            Self::Core(err) => tracing::error!("Greeting failed: {err}"),
            Self::ConfigError { message, .. } => {
                tracing::error!(%message, "Configuration could not be used");
            }
            Self::IoError { message, source } => {
                tracing::error!(%message, kind = ?source.kind(), "I/O failure");
            }
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn empty_name() -> CliError {
        CliError::Core(
            DomainError::EmptyName {
                input: String::new(),
            }
            .into(),
        )
    }

    // ── display ───────────────────────────────────────────────────────────

    #[test]
    fn core_error_displays_verbatim() {
        assert_eq!(empty_name().to_string(), "empty name");
    }

    #[test]
    fn empty_name_suggests_real_name() {
        assert!(
            empty_name()
                .suggestions()
                .iter()
                .any(|s| s.contains("real first name"))
        );
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(empty_name().exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
        assert_eq!(CliError::Core(DomainError::NoTemplates.into()).exit_code(), 1);
    }

    #[test]
    fn config_helper_keeps_context_chain() {
        let err = CliError::config(anyhow::anyhow!("bad seed").context("Invalid configuration"));
        assert!(err.to_string().contains("Invalid configuration"));
        assert!(err.to_string().contains("bad seed"));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn rejected_name_renders_as_single_verdict() {
        let s = empty_name().render(false, false);
        assert!(s.starts_with("error: empty name\n"));
        assert!(s.contains("hint: Provide a real first name"));
        assert!(!s.contains("note:"));
        assert!(!s.contains("-v"));
    }

    #[test]
    fn blank_name_shows_what_was_received() {
        let err = CliError::Core(
            DomainError::EmptyName {
                input: "  ".into(),
            }
            .into(),
        );
        assert!(err.render(false, false).contains("note: received \"  \""));
    }

    #[test]
    fn io_error_points_to_verbose_then_shows_cause() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        let terse = err.render(false, false);
        assert!(!terse.contains("caused by:"));
        assert!(terse.contains("Run again with -v"));

        let verbose = err.render(false, true);
        assert!(verbose.contains("caused by: denied"));
        assert!(!verbose.contains("Run again with -v"));
    }

    #[test]
    fn color_only_when_asked() {
        assert!(!empty_name().render(false, true).contains('\x1b'));
        assert!(empty_name().render(true, true).contains('\x1b'));
    }

    #[test]
    fn io_error_converts() {
        let err: CliError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, CliError::IoError { .. }));
    }
}
