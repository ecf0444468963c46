// error.rs — Error types for prompting and the wizard session.

use thiserror::Error;

use qg_config::ConfigError;

/// Errors from a [`Prompter`](crate::Prompter).
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream ended before the operator answered.
    #[error("input closed before an answer was given")]
    Closed,

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors that abort the whole wizard.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The registry has nothing to offer.
    #[error("no tasks are available to configure")]
    NoTasks,

    #[error("prompt failed: {0}")]
    Prompt(#[from] PromptError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
