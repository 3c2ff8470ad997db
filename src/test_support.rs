//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::core::{QuestionEntry, QuestionSet};
use crate::session::input::AnswerSource;

/// Replays canned answers and records every prompt it was shown.
///
/// Once the script runs out it reports end of input, or with
/// [`ScriptedAnswers::then_stall`] it waits forever like a user who stopped typing.
pub struct ScriptedAnswers {
    script: VecDeque<String>,
    stall_when_done: bool,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: answers.into_iter().map(Into::into).collect(),
            stall_when_done: false,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn then_stall(mut self) -> Self {
        self.stall_when_done = true;
        self
    }

    /// Shared handle to the prompts seen so far.
    pub fn prompts(&self) -> Arc<Mutex<Vec<String>>> {
        self.prompts.clone()
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.script.pop_front() {
            Some(answer) => Ok(Some(answer)),
            None if self.stall_when_done => std::future::pending().await,
            None => Ok(None),
        }
    }
}

/// The two-question set used throughout the tests.
pub fn sample_questions() -> QuestionSet {
    QuestionSet::from(vec![
        QuestionEntry::new("2+2", "4"),
        QuestionEntry::new("capital of France", "Paris"),
    ])
}
