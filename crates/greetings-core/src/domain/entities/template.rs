//! Greeting templates.
//!
//! A template is a line of text with exactly one `%s` slot for the
//! recipient's name, e.g. `"Great to see you, %s!"`.

use std::fmt;

use crate::domain::{DomainError, Name};

/// Marker substituted with the recipient's name.
pub const PLACEHOLDER: &str = "%s";

/// A validated greeting template.
///
/// Invariant: `text` contains [`PLACEHOLDER`] exactly once, at byte offset
/// `slot`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    text: Box<str>,
    slot: usize,
}

impl Template {
    /// Validate a template string.
    pub fn new(text: impl Into<String>) -> Result<Self, DomainError> {
        let text = text.into();

        let occurrences = text.matches(PLACEHOLDER).count();
        if occurrences != 1 {
            return Err(DomainError::InvalidTemplate {
                reason: format!(
                    "expected exactly one '{}' placeholder, found {}",
                    PLACEHOLDER, occurrences
                ),
                template: text,
            });
        }

        let slot = text.find(PLACEHOLDER).unwrap_or_default();
        Ok(Self {
            text: text.into_boxed_str(),
            slot,
        })
    }

    /// Template whose placeholder offset is known ahead of time.
    ///
    /// `text[slot..]` must start with [`PLACEHOLDER`] and hold no other one.
    pub(crate) fn preset(text: &'static str, slot: usize) -> Self {
        debug_assert!(text[slot..].starts_with(PLACEHOLDER));
        debug_assert_eq!(text.matches(PLACEHOLDER).count(), 1);
        Self {
            text: text.into(),
            slot,
        }
    }

    /// Substitute `name` into the placeholder.
    ///
    /// Only the placeholder is replaced; the characters on either side are
    /// copied unchanged.
    pub fn render(&self, name: &Name) -> String {
        let (head, tail) = self.text.split_at(self.slot);
        let tail = &tail[PLACEHOLDER.len()..];

        let mut message = String::with_capacity(head.len() + name.as_str().len() + tail.len());
        message.push_str(head);
        message.push_str(name.as_str());
        message.push_str(tail);
        message
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
