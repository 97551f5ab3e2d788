//! classgen core - class scaffolding rules and orchestration.
//!
//! This crate provides the domain and application layers for the classgen
//! C++ class generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           classgen-cli (CLI)            │
//! │  (clap flags, dialoguer prompts, ANSI)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (OptionResolver, ConfirmationGate,     │
//! │   ScaffoldService, SubstitutionEngine)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Prompter, Palette, Report) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    classgen-adapters (Infrastructure)   │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use classgen_core::prelude::*;
//!
//! # fn run(prompter: &dyn Prompter, reporter: &dyn Reporter, fs: Box<dyn Filesystem>) -> ClassgenResult<()> {
//! let options = RawOptions { class_name: Some("Widget".into()), ..RawOptions::default() };
//!
//! if !ConfirmationGate::new(prompter).disclaimer(options.dry_run)?.allows_continue() {
//!     return Ok(());
//! }
//! let config = OptionResolver::new(prompter, reporter, &PlainPalette, ResolverDefaults::default())
//!     .resolve(&options)?;
//! ScaffoldService::new(fs, "templates").scaffold(&config, reporter)?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConfirmationGate, GateOutcome, OptionResolver, ScaffoldReport, ScaffoldService,
        SubstitutionEngine,
        ports::{Filesystem, Palette, PlainPalette, Prompter, Reporter, StepStatus},
        questions::{Answer, QuestionKey, QuestionSpec},
    };
    pub use crate::domain::{
        ClassName, ClassNameVerdict, HeaderExtension, RawOptions, ResolvedConfig,
        ResolverDefaults, SourceExtension,
    };
    pub use crate::error::{ClassgenError, ClassgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
