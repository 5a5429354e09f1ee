//! Per-run diagnostics sink.
//!
//! One sink is created per validation run and threaded by mutable
//! reference through every checker. Checkers only append; nothing is ever
//! removed or reordered, so message order follows document order.

use serde::{Deserialize, Serialize};

/// Ordered warning and error messages produced by one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl Messages {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.errors.is_empty()
    }
}

/// Append-only collector the validators write into.
#[derive(Debug, Default)]
pub struct Diagnostics {
    messages: Messages,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.messages.warnings.push(message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.messages.errors.push(message.into());
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.messages.errors.is_empty()
    }

    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.messages.warnings
    }

    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.messages.errors
    }

    #[must_use]
    pub fn into_messages(self) -> Messages {
        self.messages
    }
}
