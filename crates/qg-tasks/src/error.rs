// error.rs — Error types for task lookup and option resolution.

use thiserror::Error;

/// Errors that can occur while looking up a task or resolving its options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// The requested task is not part of the registry.
    #[error("unknown task: {0}")]
    UnknownTask(String),

    /// The task's own schema cannot produce a consistent set of defaults.
    #[error("cannot resolve options for task {task}: {reason}")]
    OptionResolution { task: String, reason: String },

    /// A task with this name is already registered.
    #[error("task already registered: {0}")]
    DuplicateTask(String),
}

impl TaskError {
    pub(crate) fn resolution(task: &str, reason: impl Into<String>) -> Self {
        TaskError::OptionResolution {
            task: task.to_string(),
            reason: reason.into(),
        }
    }
}
