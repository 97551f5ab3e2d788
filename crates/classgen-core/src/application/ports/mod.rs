//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation, copying, in-place rewrites
//!   - `Prompter`: one interactive question at a time
//!   - `Palette`: text decoration
//!   - `Reporter`: progress and error lines, with a `StepStatus` per task

pub mod output;

pub use output::{Filesystem, Palette, PlainPalette, Prompter, Reporter, StepStatus};
