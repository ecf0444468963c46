// prompt.rs — Prompter trait: everything the wizard needs from the operator.
//
// The wizard never talks to stdin/stdout directly. It asks a Prompter for a
// choice or a yes/no answer and sends it notifications. That keeps every
// state transition testable without a terminal.

use std::fmt;

use crate::error::PromptError;

/// Operator-facing input/output for the wizard.
///
/// `choose` and `confirm` block until the operator answers. They are the
/// only suspension points of a wizard session.
pub trait Prompter: Send + Sync {
    /// Whether an operator is present to answer prompts.
    fn is_interactive(&self) -> bool;

    /// Ask the operator to pick exactly one of `candidates`.
    ///
    /// Implementations must only return a member of `candidates`.
    fn choose(&self, label: &str, candidates: &[String]) -> Result<String, PromptError>;

    /// Ask a yes/no question. An empty answer means `default`.
    fn confirm(&self, question: &str, default: bool) -> Result<bool, PromptError>;

    /// Show a message that needs no answer.
    fn notify(&self, notification: &Notification) -> Result<(), PromptError>;
}

/// Severity of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Note,
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationLevel::Note => write!(f, "note"),
            NotificationLevel::Info => write!(f, "info"),
            NotificationLevel::Success => write!(f, "success"),
            NotificationLevel::Warning => write!(f, "warning"),
            NotificationLevel::Error => write!(f, "error"),
        }
    }
}

/// A message for the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn note(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Note, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }
}
