//! Core domain layer for classgen.
//!
//! Pure rules with no I/O: class-name classification, the extension
//! choices, placeholder tokens, and the option records passed between the
//! resolver and the scaffold service.
//!
//! - **No I/O**: prompts and filesystem access live behind application ports
//! - **Immutable records**: everything here is `Clone + PartialEq`

pub mod class_name;
pub mod error;
pub mod extension;
pub mod options;
pub mod placeholder;

pub use class_name::{ClassName, ClassNameVerdict, strip_spaces, validate};
pub use error::{DomainError, ErrorCategory};
pub use extension::{HeaderExtension, SourceExtension};
pub use options::{
    DEFAULT_HEADER_DIR, DEFAULT_SOURCE_DIR, RawOptions, ResolvedConfig, ResolverDefaults,
};
pub use placeholder::{CLASS_NAME_TOKEN, HEADER_EXT_TOKEN, IDENTIFIER_TOKEN, derive_guard_token};
