//! Prompter that replays a fixed list of answers.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use classgen_core::{
    application::{
        ApplicationError,
        ports::Prompter,
        questions::{Answer, QuestionKey, QuestionSpec},
    },
    error::ClassgenResult,
};

/// Answers questions from a queue and records what was asked.
///
/// Running out of answers is an error, so a test fails loudly when the
/// resolver asks more than expected.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: Arc<Mutex<VecDeque<Answer>>>,
    asked: Arc<Mutex<Vec<(QuestionKey, String)>>>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.into_iter().collect())),
            asked: Arc::default(),
        }
    }

    /// Keys of every question asked, in order.
    pub fn asked(&self) -> Vec<QuestionKey> {
        self.asked.lock().unwrap().iter().map(|(k, _)| *k).collect()
    }

    /// Messages of every question asked, in order.
    pub fn messages(&self) -> Vec<String> {
        self.asked.lock().unwrap().iter().map(|(_, m)| m.clone()).collect()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&self, question: &QuestionSpec) -> ClassgenResult<Answer> {
        self.asked
            .lock()
            .unwrap()
            .push((question.key(), question.message().to_string()));
        let answer = self.answers.lock().unwrap().pop_front().ok_or_else(|| {
            ApplicationError::PromptFailed {
                reason: format!("no scripted answer for '{}'", question.message()),
            }
        })?;
        Ok(answer)
    }
}
