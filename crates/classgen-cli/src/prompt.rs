//! Terminal implementation of the core [`Prompter`] port.
//!
//! Built on `dialoguer` when the `interactive` feature is enabled.  Without
//! it every question fails, so only fully specified dry runs can complete.

use classgen_core::{
    application::{
        ApplicationError, Prompter,
        questions::{Answer, QuestionSpec},
    },
    error::{ClassgenError, ClassgenResult},
};

#[cfg(feature = "interactive")]
pub use interactive::TerminalPrompter;

#[cfg(not(feature = "interactive"))]
pub use disabled::TerminalPrompter;

#[cfg(feature = "interactive")]
mod interactive {
    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
    use tracing::debug;

    use super::*;

    /// Asks questions on the controlling terminal.
    pub struct TerminalPrompter {
        theme: ColorfulTheme,
    }

    impl TerminalPrompter {
        pub fn new() -> Self {
            Self {
                theme: ColorfulTheme::default(),
            }
        }
    }

    impl Default for TerminalPrompter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Prompter for TerminalPrompter {
        fn ask(&self, question: &QuestionSpec) -> ClassgenResult<Answer> {
            debug!(key = ?question.key(), "Prompting");
            let answer = match question {
                QuestionSpec::FreeText {
                    message, default, ..
                } => {
                    let mut input = Input::<String>::with_theme(&self.theme)
                        .with_prompt(message.as_str())
                        .allow_empty(true);
                    if let Some(default) = default {
                        input = input.default(default.clone());
                    }
                    input.interact_text().map(Answer::Text)
                }
                QuestionSpec::Confirm {
                    message, default, ..
                } => Confirm::with_theme(&self.theme)
                    .with_prompt(message.as_str())
                    .default(*default)
                    .interact()
                    .map(Answer::Confirm),
                QuestionSpec::Choice {
                    message,
                    choices,
                    default,
                    ..
                } => Select::with_theme(&self.theme)
                    .with_prompt(message.as_str())
                    .items(choices.as_slice())
                    .default(*default)
                    .interact()
                    .map(Answer::Choice),
            };

            answer.map_err(|e| {
                ClassgenError::from(ApplicationError::PromptFailed {
                    reason: e.to_string(),
                })
            })
        }
    }
}

#[cfg(not(feature = "interactive"))]
mod disabled {
    use super::*;

    /// Stand-in used when the binary is built without prompts.
    pub struct TerminalPrompter;

    impl TerminalPrompter {
        pub fn new() -> Self {
            Self
        }
    }

    impl Default for TerminalPrompter {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Prompter for TerminalPrompter {
        fn ask(&self, question: &QuestionSpec) -> ClassgenResult<Answer> {
            Err(ClassgenError::from(ApplicationError::PromptFailed {
                reason: format!(
                    "cannot ask '{}': built without the 'interactive' feature",
                    question.message()
                ),
            }))
        }
    }
}
