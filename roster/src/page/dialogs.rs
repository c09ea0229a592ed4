use parking_lot::Mutex;
use std::collections::VecDeque;

/// Blocking prompts the page raises: a yes/no confirmation before deleting,
/// and an acknowledgement-only alert when a submission is rejected.
pub trait Dialogs: Send + Sync {
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);
}

/// Answers confirmations from a queue and records every prompt shown.
///
/// An exhausted queue answers `false`, the same as a user pressing cancel.
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    answers: Mutex<VecDeque<bool>>,
    confirms: Mutex<Vec<String>>,
    alerts: Mutex<Vec<String>>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        let dialogs = Self::new();
        dialogs.answers.lock().extend(answers);
        dialogs
    }

    pub fn push_answer(&self, answer: bool) {
        self.answers.lock().push_back(answer);
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.lock().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().push(message.to_string());
        self.answers.lock().pop_front().unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().push(message.to_string());
    }
}
