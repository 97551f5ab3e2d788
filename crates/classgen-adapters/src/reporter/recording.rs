//! Reporter that keeps every line in memory.

use std::sync::{Arc, Mutex};

use classgen_core::application::ports::{Reporter, StepStatus};

/// One line handed to a [`RecordingReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedLine {
    Info(String),
    Error(String),
    TaskStarted(String),
    TaskFinished(String, StepStatus),
}

#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    lines: Arc<Mutex<Vec<RecordedLine>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<RecordedLine> {
        self.lines.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.filter(|l| match l {
            RecordedLine::Info(m) => Some(m.clone()),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<String> {
        self.filter(|l| match l {
            RecordedLine::Error(m) => Some(m.clone()),
            _ => None,
        })
    }

    /// Titles of tasks that finished, with their status.
    pub fn finished_tasks(&self) -> Vec<(String, StepStatus)> {
        self.filter(|l| match l {
            RecordedLine::TaskFinished(t, s) => Some((t.clone(), *s)),
            _ => None,
        })
    }

    fn filter<T>(&self, f: impl Fn(&RecordedLine) -> Option<T>) -> Vec<T> {
        self.lines.lock().unwrap().iter().filter_map(f).collect()
    }

    fn push(&self, line: RecordedLine) {
        self.lines.lock().unwrap().push(line);
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.push(RecordedLine::Info(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(RecordedLine::Error(message.to_string()));
    }

    fn task_started(&self, title: &str) {
        self.push(RecordedLine::TaskStarted(title.to_string()));
    }

    fn task_finished(&self, title: &str, status: StepStatus) {
        self.push(RecordedLine::TaskFinished(title.to_string(), status));
    }
}
