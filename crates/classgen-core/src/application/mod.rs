//! Application layer for classgen.
//!
//! This layer contains:
//! - **Services**: resolver, confirmation gates, substitution, scaffolding
//! - **Questions**: the pure question-selection rules the resolver follows
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Class-name rules and derived values live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod questions;
pub mod services;

// Re-export main services
pub use services::{
    ConfirmationGate, GateOutcome, OptionResolver, ScaffoldReport, ScaffoldService,
    SubstitutionEngine,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Palette, PlainPalette, Prompter, Reporter, StepStatus};

pub use error::ApplicationError;
