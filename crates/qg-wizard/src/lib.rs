//! # qg-wizard
//!
//! The interactive `configure` wizard for Qualgate.
//!
//! The operator picks tasks one at a time; each task's defaults are resolved
//! from its schema and written under `parameters.tasks` of the configuration
//! document, after confirming any overwrite of an existing entry.
//!
//! ## Key components
//!
//! - [`Prompter`] — the operator seam (choice, yes/no, notifications)
//! - [`TerminalPrompter`] — stdin/stdout implementation, mockable I/O
//! - [`ScriptedPrompter`] — replays canned answers and records a transcript
//! - [`merge`] — override confirmation and wholesale task replacement
//! - [`ConfigureSession`] / [`WizardState`] — the round-by-round state machine
//! - [`configure`] — the whole command: interactivity and skip checks, the
//!   session, and the final all-or-nothing save

pub mod command;
pub mod error;
pub mod merge;
pub mod prompt;
pub mod scripted;
pub mod session;
pub mod terminal;

pub use command::{configure, ConfigureOptions, ConfigureOutcome};
pub use error::{PromptError, WizardError};
pub use prompt::{Notification, NotificationLevel, Prompter};
pub use scripted::{PromptRecord, ScriptedAnswer, ScriptedPrompter};
pub use session::{ConfigureSession, RoundFailure, SessionOutcome, SessionReport, WizardState};
pub use terminal::TerminalPrompter;
