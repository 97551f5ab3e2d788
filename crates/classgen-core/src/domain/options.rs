//! Option records flowing through a single invocation.
//!
//! [`RawOptions`] comes out of flag parsing, [`ResolvedConfig`] comes out of
//! the resolver and is consumed once by the scaffold service.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{
    class_name::ClassName,
    extension::{HeaderExtension, SourceExtension},
};

/// Default header directory.
pub const DEFAULT_HEADER_DIR: &str = "include";
/// Default source directory.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Flags as supplied on the command line. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawOptions {
    pub skip_prompts: bool,
    pub create_source: bool,
    pub dry_run: bool,
    pub class_name: Option<String>,
}

impl Default for RawOptions {
    fn default() -> Self {
        Self {
            skip_prompts: false,
            create_source: true,
            dry_run: false,
            class_name: None,
        }
    }
}

/// Values used for questions that are skipped, and as prompt defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverDefaults {
    pub header_dir: PathBuf,
    pub header_ext: HeaderExtension,
    pub source_dir: PathBuf,
    pub source_ext: SourceExtension,
}

impl Default for ResolverDefaults {
    fn default() -> Self {
        Self {
            header_dir: PathBuf::from(DEFAULT_HEADER_DIR),
            header_ext: HeaderExtension::H,
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            source_ext: SourceExtension::Cpp,
        }
    }
}

/// Fully resolved configuration for one scaffold run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub class_name: ClassName,
    pub header_dir: PathBuf,
    pub header_ext: HeaderExtension,
    pub source_dir: PathBuf,
    pub source_ext: SourceExtension,
    pub create_source: bool,
    pub dry_run: bool,
    pub proceed: bool,
}

impl ResolvedConfig {
    /// `Foo.hpp`
    pub fn header_file_name(&self) -> String {
        format!("{}{}", self.class_name, self.header_ext.as_str())
    }

    /// `Foo.cpp`
    pub fn source_file_name(&self) -> String {
        format!("{}{}", self.class_name, self.source_ext.as_str())
    }

    /// Header path relative to the working directory.
    pub fn header_file(&self) -> PathBuf {
        self.header_dir.join(self.header_file_name())
    }

    /// Source path relative to the working directory.
    pub fn source_file(&self) -> PathBuf {
        self.source_dir.join(self.source_file_name())
    }

    /// Files the run will produce, header first.
    pub fn target_files(&self) -> Vec<PathBuf> {
        let mut files = vec![self.header_file()];
        if self.create_source {
            files.push(self.source_file());
        }
        files
    }

    /// A dry run never writes, whatever the gates said.
    pub fn should_write(&self) -> bool {
        self.proceed && !self.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(create_source: bool) -> ResolvedConfig {
        ResolvedConfig {
            class_name: ClassName::parse("Bar").unwrap(),
            header_dir: PathBuf::from("include"),
            header_ext: HeaderExtension::Hpp,
            source_dir: PathBuf::from("src"),
            source_ext: SourceExtension::Cc,
            create_source,
            dry_run: false,
            proceed: true,
        }
    }

    #[test]
    fn derived_paths_join_dir_name_and_extension() {
        let cfg = config(true);
        assert_eq!(cfg.header_file(), PathBuf::from("include").join("Bar.hpp"));
        assert_eq!(cfg.source_file(), PathBuf::from("src").join("Bar.cc"));
    }

    #[test]
    fn header_without_extension_has_bare_name() {
        let cfg = ResolvedConfig {
            header_ext: HeaderExtension::None,
            ..config(false)
        };
        assert_eq!(cfg.header_file_name(), "Bar");
    }

    #[test]
    fn target_files_skip_source_when_disabled() {
        assert_eq!(config(true).target_files().len(), 2);
        assert_eq!(config(false).target_files(), vec![config(false).header_file()]);
    }

    #[test]
    fn dry_run_never_writes() {
        let cfg = ResolvedConfig {
            dry_run: true,
            ..config(true)
        };
        assert!(!cfg.should_write());
    }

    #[test]
    fn raw_options_default_creates_source() {
        assert!(RawOptions::default().create_source);
    }
}
