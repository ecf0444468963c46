// scripted.rs — ScriptedPrompter: replays canned answers.
//
// Used by tests and by batch callers that know their answers up front.
// Every prompt and notification is recorded in a transcript so callers can
// assert on exactly what the operator would have seen.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::PromptError;
use crate::prompt::{Notification, Prompter};

/// One canned answer, consumed in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedAnswer {
    Choice(String),
    Confirm(bool),
}

impl ScriptedAnswer {
    pub fn choice(name: impl Into<String>) -> Self {
        ScriptedAnswer::Choice(name.into())
    }

    pub fn yes() -> Self {
        ScriptedAnswer::Confirm(true)
    }

    pub fn no() -> Self {
        ScriptedAnswer::Confirm(false)
    }
}

/// What the prompter was asked or told.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRecord {
    Choice {
        label: String,
        candidates: Vec<String>,
    },
    Confirm {
        question: String,
        default: bool,
    },
    Notice(Notification),
}

/// A Prompter backed by a fixed answer script.
pub struct ScriptedPrompter {
    interactive: bool,
    answers: Mutex<VecDeque<ScriptedAnswer>>,
    transcript: Mutex<Vec<PromptRecord>>,
}

impl ScriptedPrompter {
    /// An interactive prompter answering with `answers` in order.
    pub fn new(answers: impl IntoIterator<Item = ScriptedAnswer>) -> Self {
        Self {
            interactive: true,
            answers: Mutex::new(answers.into_iter().collect()),
            transcript: Mutex::new(Vec::new()),
        }
    }

    /// A prompter that reports no operator. Any question is an error.
    pub fn non_interactive() -> Self {
        Self {
            interactive: false,
            answers: Mutex::new(VecDeque::new()),
            transcript: Mutex::new(Vec::new()),
        }
    }

    /// Everything recorded so far.
    pub fn transcript(&self) -> Vec<PromptRecord> {
        self.transcript
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Number of questions asked (notifications excluded).
    pub fn prompt_count(&self) -> usize {
        self.transcript()
            .iter()
            .filter(|record| !matches!(record, PromptRecord::Notice(_)))
            .count()
    }

    /// Notifications sent so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.transcript()
            .into_iter()
            .filter_map(|record| match record {
                PromptRecord::Notice(notification) => Some(notification),
                _ => None,
            })
            .collect()
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.lock().map(|a| a.len()).unwrap_or(0)
    }

    fn record(&self, record: PromptRecord) -> Result<(), PromptError> {
        self.transcript
            .lock()
            .map_err(|e| PromptError::InvalidResponse(format!("transcript lock poisoned: {}", e)))?
            .push(record);
        Ok(())
    }

    fn next_answer(&self) -> Result<ScriptedAnswer, PromptError> {
        if !self.interactive {
            return Err(PromptError::Closed);
        }
        self.answers
            .lock()
            .map_err(|e| PromptError::InvalidResponse(format!("answer lock poisoned: {}", e)))?
            .pop_front()
            .ok_or(PromptError::Closed)
    }
}

impl Prompter for ScriptedPrompter {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn choose(&self, label: &str, candidates: &[String]) -> Result<String, PromptError> {
        self.record(PromptRecord::Choice {
            label: label.to_string(),
            candidates: candidates.to_vec(),
        })?;

        match self.next_answer()? {
            ScriptedAnswer::Choice(name) if candidates.contains(&name) => Ok(name),
            ScriptedAnswer::Choice(name) => Err(PromptError::InvalidResponse(format!(
                "`{}` is not one of the offered choices",
                name
            ))),
            ScriptedAnswer::Confirm(answer) => Err(PromptError::InvalidResponse(format!(
                "expected a choice for \"{}\", script has confirm({})",
                label, answer
            ))),
        }
    }

    fn confirm(&self, question: &str, default: bool) -> Result<bool, PromptError> {
        self.record(PromptRecord::Confirm {
            question: question.to_string(),
            default,
        })?;

        match self.next_answer()? {
            ScriptedAnswer::Confirm(answer) => Ok(answer),
            ScriptedAnswer::Choice(name) => Err(PromptError::InvalidResponse(format!(
                "expected yes/no for \"{}\", script has choice `{}`",
                question, name
            ))),
        }
    }

    fn notify(&self, notification: &Notification) -> Result<(), PromptError> {
        self.record(PromptRecord::Notice(notification.clone()))
    }
}
