//! Command handlers, one module per action.

pub mod completions;
pub mod create;
pub mod init;
