// command.rs — The `configure` command.
//
// Wraps a wizard session with the checks that decide whether it runs at all,
// and the single save at the end. Nothing is written unless the session
// completes; a failed save is reported as an outcome, not an error, so the
// caller can map it to an exit code.

use qg_config::ConfigStore;
use qg_tasks::TaskConfigResolver;

use crate::error::WizardError;
use crate::prompt::{Notification, Prompter};
use crate::session::{ConfigureSession, SessionReport};

pub const NO_INTERACTION_MESSAGE: &str = "Skipping configuration due to no interaction.";
pub const EXISTING_FILE_MESSAGE: &str =
    "Configuration process skipped since the configuration file already exists.";
pub const SAVE_FAILED_MESSAGE: &str = "The configuration file could not be saved.";
pub const SAVED_MESSAGE: &str = "Qualgate is configured and ready to go!";

/// Flags of the `configure` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigureOptions {
    /// Do nothing when a configuration file already exists.
    pub skip_if_exists: bool,
}

/// How a `configure` run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigureOutcome {
    SkippedNonInteractive,
    SkippedExisting,
    Saved { report: SessionReport },
    SaveFailed { reason: String },
}

impl ConfigureOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigureOutcome::SaveFailed { .. } => 1,
            _ => 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code() == 0
    }
}

/// Run the configure wizard end to end.
///
/// 1. Without an operator, note it and stop (nothing loaded or written).
/// 2. With `skip_if_exists` and an existing file, warn and stop.
/// 3. Load the document and run the session.
/// 4. Save the final document once.
pub fn configure(
    options: ConfigureOptions,
    registry: &TaskConfigResolver,
    store: &dyn ConfigStore,
    prompter: &dyn Prompter,
) -> Result<ConfigureOutcome, WizardError> {
    if !prompter.is_interactive() {
        tracing::debug!("no operator, skipping configure");
        prompter.notify(&Notification::note(NO_INTERACTION_MESSAGE))?;
        return Ok(ConfigureOutcome::SkippedNonInteractive);
    }

    if options.skip_if_exists && store.exists() {
        tracing::debug!(path = %store.location().display(), "configuration exists, skipping");
        prompter.notify(&Notification::warning(EXISTING_FILE_MESSAGE))?;
        return Ok(ConfigureOutcome::SkippedExisting);
    }

    let document = store.load()?;
    tracing::info!(
        path = %store.location().display(),
        tasks = document.configured_task_names().len(),
        "starting configure session"
    );

    let outcome = ConfigureSession::new(registry, prompter).run(document)?;

    match store.save(&outcome.document) {
        Ok(()) => {
            prompter.notify(&Notification::success(SAVED_MESSAGE))?;
            Ok(ConfigureOutcome::Saved {
                report: outcome.report,
            })
        }
        Err(e) => {
            let reason = e.to_string();
            tracing::warn!(path = %store.location().display(), error = %reason, "save failed");
            prompter.notify(&Notification::error(format!(
                "{} {}",
                SAVE_FAILED_MESSAGE, reason
            )))?;
            Ok(ConfigureOutcome::SaveFailed { reason })
        }
    }
}
