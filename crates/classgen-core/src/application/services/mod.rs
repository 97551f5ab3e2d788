//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! "resolve the options", "confirm", and "scaffold the class".

pub mod confirmation_gate;
pub mod option_resolver;
pub mod scaffold_service;
pub mod substitution;

pub use confirmation_gate::{ConfirmationGate, GateOutcome};
pub use option_resolver::OptionResolver;
pub use scaffold_service::{ScaffoldReport, ScaffoldService, StepReport, TaskAction, TaskStep};
pub use substitution::{Pass, PassReport, SubstitutionEngine};
