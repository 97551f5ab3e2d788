use thiserror::Error;

use crate::domain::class_name::ClassNameVerdict;

/// Domain rule violations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid class name '{name}': {verdict}")]
    InvalidClassName {
        name: String,
        verdict: ClassNameVerdict,
    },

    #[error("Unknown {kind} extension '{value}' (expected one of {expected})")]
    UnknownExtension {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidClassName { name, verdict } => {
                let mut out = vec![format!("'{}' was rejected: {}", name, verdict)];
                if *verdict == ClassNameVerdict::ContainsSpaces {
                    out.push(format!(
                        "Try: {}",
                        crate::domain::class_name::strip_spaces(name)
                    ));
                }
                out.push("Use letters, digits, and underscores only".into());
                out
            }
            Self::UnknownExtension { kind, expected, .. } => vec![
                format!("Supported {} extensions: {}", kind, expected),
                "Check the defaults section of your config file".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidClassName { .. } | Self::UnknownExtension { .. } => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
