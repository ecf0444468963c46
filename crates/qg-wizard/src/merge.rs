// merge.rs — Writing a task's defaults into the configuration document.
//
// A task entry is always replaced as a whole; no per-option merging with
// what was there before. An existing entry is only replaced after the
// operator confirms.

use qg_config::{ConfigError, ConfigurationDocument};
use qg_tasks::OptionsMapping;

use crate::error::PromptError;
use crate::prompt::Prompter;

/// The question asked before replacing an existing task entry.
pub fn override_question(task: &str) -> String {
    format!(
        "Task {} already exists. Do you want to overwrite the current configuration with the default one?",
        task
    )
}

/// Decide whether `task` may be written into `document`.
///
/// Returns `true` without asking when the task has no configuration yet,
/// which includes an entry with a null value (`phpcs: ~`). Otherwise asks
/// once, defaulting to no.
pub fn confirm_override(
    document: &ConfigurationDocument,
    task: &str,
    prompter: &dyn Prompter,
) -> Result<bool, PromptError> {
    if !document.is_task_configured(task) {
        return Ok(true);
    }
    let accepted = prompter.confirm(&override_question(task), false)?;
    tracing::debug!(task, accepted, "override confirmation");
    Ok(accepted)
}

/// A copy of `document` with `parameters.tasks[task]` set to `options`.
///
/// All other keys keep their values and order. On error the input is
/// unchanged and no partial copy is returned.
pub fn merge(
    document: &ConfigurationDocument,
    task: &str,
    options: &OptionsMapping,
) -> Result<ConfigurationDocument, ConfigError> {
    let mut merged = document.clone();
    merged.set_task_options(task, options)?;
    Ok(merged)
}
