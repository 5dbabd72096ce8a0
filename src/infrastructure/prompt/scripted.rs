//! Scripted prompter for tests and non-interactive runs

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::ports::Prompter;

/// Answers from a script and records every prompt it was asked.
///
/// Once the queued answers run out, the fallback answer is used.
#[derive(Debug)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<bool>>,
    fallback: bool,
    calls: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    /// Always answer `answer`
    pub fn always(answer: bool) -> Self {
        Self::with_answers(Vec::new(), answer)
    }

    /// Answer from `answers` in order, then `fallback`
    pub fn with_answers(answers: impl IntoIterator<Item = bool>, fallback: bool) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            fallback,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, prompt: &str) -> bool {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(prompt.to_string());
        self.answers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front()
            .unwrap_or(self.fallback)
    }
}
