//! Reporter adapters that need no terminal.

mod recording;

pub use recording::{RecordedLine, RecordingReporter};
