// session.rs — ConfigureSession: the round-by-round wizard state machine.
//
// One round is: choose a task, resolve its defaults, confirm an overwrite
// if the task is already configured, merge, then ask whether to go again.
// `step` performs exactly one transition so each path can be driven and
// inspected in isolation; `run` loops it until `Done`.
//
// A failed round (unknown task, bad schema, malformed tasks section) never
// ends the session. It is reported to the operator and the wizard moves on
// to the continue question with the document unchanged. Only prompt failures
// abort the session.

use serde::Serialize;

use qg_config::ConfigurationDocument;
use qg_tasks::{OptionsMapping, TaskConfigResolver, TaskName};

use crate::error::WizardError;
use crate::merge::{confirm_override, merge};
use crate::prompt::{Notification, Prompter};

/// Label of the task choice prompt.
pub const CHOOSE_TASK_LABEL: &str = "Which task do you want to configure?";

/// Question asked after every round.
pub const CONTINUE_QUESTION: &str = "Do you want to configure another task?";

/// Where the wizard is within a round.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardState {
    ChoosingTask,
    ResolvingOptions {
        task: TaskName,
    },
    ConfirmingOverride {
        task: TaskName,
        options: OptionsMapping,
    },
    Merging {
        task: TaskName,
        options: OptionsMapping,
    },
    AskingToContinue,
    Done,
}

impl WizardState {
    pub fn is_done(&self) -> bool {
        matches!(self, WizardState::Done)
    }

    fn label(&self) -> &'static str {
        match self {
            WizardState::ChoosingTask => "choosing_task",
            WizardState::ResolvingOptions { .. } => "resolving_options",
            WizardState::ConfirmingOverride { .. } => "confirming_override",
            WizardState::Merging { .. } => "merging",
            WizardState::AskingToContinue => "asking_to_continue",
            WizardState::Done => "done",
        }
    }
}

/// A round that ended without writing its task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundFailure {
    pub task: TaskName,
    pub reason: String,
}

/// What happened across all rounds, in round order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    /// Tasks written into the document.
    pub configured: Vec<TaskName>,
    /// Tasks whose overwrite the operator declined.
    pub skipped: Vec<TaskName>,
    /// Tasks whose round failed.
    pub failed: Vec<RoundFailure>,
}

impl SessionReport {
    /// Number of rounds the session went through.
    pub fn rounds(&self) -> usize {
        self.configured.len() + self.skipped.len() + self.failed.len()
    }
}

/// The final document plus the report of how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub document: ConfigurationDocument,
    pub report: SessionReport,
}

/// Drives the wizard rounds against a registry and a prompter.
pub struct ConfigureSession<'a> {
    registry: &'a TaskConfigResolver,
    prompter: &'a dyn Prompter,
    report: SessionReport,
}

impl<'a> ConfigureSession<'a> {
    pub fn new(registry: &'a TaskConfigResolver, prompter: &'a dyn Prompter) -> Self {
        Self {
            registry,
            prompter,
            report: SessionReport::default(),
        }
    }

    pub fn report(&self) -> &SessionReport {
        &self.report
    }

    /// Run rounds until the operator stops, starting from `document`.
    pub fn run(mut self, document: ConfigurationDocument) -> Result<SessionOutcome, WizardError> {
        if self.registry.is_empty() {
            return Err(WizardError::NoTasks);
        }

        let mut document = document;
        let mut state = WizardState::ChoosingTask;
        while !state.is_done() {
            state = self.step(state, &mut document)?;
        }

        tracing::debug!(
            configured = self.report.configured.len(),
            skipped = self.report.skipped.len(),
            failed = self.report.failed.len(),
            "wizard session finished"
        );
        Ok(SessionOutcome {
            document,
            report: self.report,
        })
    }

    /// Perform one transition from `state`.
    ///
    /// `document` is only modified by the `Merging` transition.
    pub fn step(
        &mut self,
        state: WizardState,
        document: &mut ConfigurationDocument,
    ) -> Result<WizardState, WizardError> {
        tracing::debug!(state = state.label(), "wizard step");

        let next = match state {
            WizardState::ChoosingTask => {
                let candidates: Vec<String> = self
                    .registry
                    .list_available_task_names()
                    .into_iter()
                    .map(String::from)
                    .collect();
                if candidates.is_empty() {
                    return Err(WizardError::NoTasks);
                }
                let task = self.prompter.choose(CHOOSE_TASK_LABEL, &candidates)?;
                WizardState::ResolvingOptions {
                    task: TaskName::new(task),
                }
            }

            WizardState::ResolvingOptions { task } => {
                let resolved = self
                    .registry
                    .fetch_by_name(task.as_str())
                    .and_then(|resolver| resolver.resolve());
                match resolved {
                    Ok(options) => WizardState::ConfirmingOverride { task, options },
                    Err(e) => {
                        self.fail_round(task, e.to_string())?;
                        WizardState::AskingToContinue
                    }
                }
            }

            WizardState::ConfirmingOverride { task, options } => {
                if confirm_override(document, task.as_str(), self.prompter)? {
                    WizardState::Merging { task, options }
                } else {
                    tracing::info!(task = %task, "kept existing task configuration");
                    self.report.skipped.push(task);
                    WizardState::AskingToContinue
                }
            }

            WizardState::Merging { task, options } => {
                match merge(document, task.as_str(), &options) {
                    Ok(merged) => {
                        *document = merged;
                        tracing::info!(task = %task, options = options.len(), "task configured");
                        self.report.configured.push(task);
                    }
                    Err(e) => self.fail_round(task, e.to_string())?,
                }
                WizardState::AskingToContinue
            }

            WizardState::AskingToContinue => {
                if self.prompter.confirm(CONTINUE_QUESTION, true)? {
                    WizardState::ChoosingTask
                } else {
                    WizardState::Done
                }
            }

            WizardState::Done => WizardState::Done,
        };

        Ok(next)
    }

    fn fail_round(&mut self, task: TaskName, reason: String) -> Result<(), WizardError> {
        tracing::warn!(task = %task, reason = %reason, "task round aborted");
        self.prompter.notify(&Notification::error(format!(
            "Task {} could not be configured: {}",
            task, reason
        )))?;
        self.report.failed.push(RoundFailure { task, reason });
        Ok(())
    }
}
