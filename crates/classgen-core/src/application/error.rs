//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not rule
//! violations. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::services::substitution::Pass;
use crate::error::ErrorCategory;

/// Errors that occur during prompting and scaffolding.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The template directory is missing or cannot be read.
    #[error("Template directory {path} is not readable: {reason}")]
    TemplateDirectoryUnreadable { path: PathBuf, reason: String },

    /// Copying a template into place failed.
    #[error("Failed to copy {from} to {to}: {reason}")]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A single substitution pass failed.
    #[error("{pass} pass failed on {path}: {reason}")]
    SubstitutionFailed {
        pass: Pass,
        path: PathBuf,
        reason: String,
    },

    /// The prompt backend could not ask or read an answer.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// The prompt backend returned an answer of the wrong shape.
    #[error("Unexpected answer to '{question}'")]
    UnexpectedAnswer { question: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateDirectoryUnreadable { path, .. } => vec![
                format!("Expected 'header' and 'source' templates in {}", path.display()),
                "Point --templates at a readable directory".into(),
                "Or set templates.dir in your config file".into(),
            ],
            Self::CopyFailed { to, .. } | Self::FilesystemError { path: to, .. } => vec![
                format!("Failed to access: {}", to.display()),
                "Check that you have write permissions".into(),
            ],
            Self::SubstitutionFailed { path, .. } => vec![
                format!("{} may still contain placeholder tokens", path.display()),
            ],
            Self::PromptFailed { .. } => vec![
                "Run from an interactive terminal".into(),
                "Or pass --class-name and --yes to avoid optional prompts".into(),
            ],
            Self::UnexpectedAnswer { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateDirectoryUnreadable { .. } => ErrorCategory::NotFound,
            Self::CopyFailed { .. }
            | Self::FilesystemError { .. }
            | Self::SubstitutionFailed { .. }
            | Self::PromptFailed { .. }
            | Self::UnexpectedAnswer { .. } => ErrorCategory::Internal,
        }
    }
}
