//! Yes/no gates that can end a run early.

use tracing::{debug, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::Prompter,
        questions::{Answer, QuestionKey, QuestionSpec},
    },
    error::ClassgenResult,
};

/// Disclaimer shown before anything else is asked.
pub const DISCLAIMER_PROMPT: &str =
    "Existing files at the target paths will be overwritten. Do you want to continue?";

/// Final confirmation after the preview.
pub const PROCEED_PROMPT: &str = "Proceed with this configuration?";

/// Result of passing through a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Accepted,
    Declined,
    /// Not asked because of a dry run. The run continues but never writes.
    Bypassed,
}

impl GateOutcome {
    /// `false` only when the operator said no.
    pub fn allows_continue(self) -> bool {
        self != Self::Declined
    }

    /// `true` only when the operator said yes.
    pub fn permits_write(self) -> bool {
        self == Self::Accepted
    }
}

/// Disclaimer and proceed gates over a [`Prompter`].
pub struct ConfirmationGate<'a> {
    prompter: &'a dyn Prompter,
}

impl<'a> ConfirmationGate<'a> {
    pub fn new(prompter: &'a dyn Prompter) -> Self {
        Self { prompter }
    }

    /// Overwrite warning. Declining must stop the run before any other
    /// question or any filesystem access.
    #[instrument(skip(self))]
    pub fn disclaimer(&self, dry_run: bool) -> ClassgenResult<GateOutcome> {
        self.gate(QuestionKey::Disclaimer, DISCLAIMER_PROMPT, dry_run)
    }

    /// Confirmation after the configuration preview.
    #[instrument(skip(self))]
    pub fn proceed(&self, dry_run: bool) -> ClassgenResult<GateOutcome> {
        self.gate(QuestionKey::Proceed, PROCEED_PROMPT, dry_run)
    }

    fn gate(&self, key: QuestionKey, message: &str, dry_run: bool) -> ClassgenResult<GateOutcome> {
        if dry_run {
            debug!(?key, "Gate bypassed for dry run");
            return Ok(GateOutcome::Bypassed);
        }

        let question = QuestionSpec::Confirm {
            key,
            message: message.to_string(),
            default: true,
        };

        match self.prompter.ask(&question)? {
            Answer::Confirm(true) => Ok(GateOutcome::Accepted),
            Answer::Confirm(false) => {
                debug!(?key, "Gate declined");
                Ok(GateOutcome::Declined)
            }
            _ => Err(ApplicationError::UnexpectedAnswer {
                question: message.to_string(),
            }
            .into()),
        }
    }
}
