//! Template substitution over files already copied into place.
//!
//! Three passes run in a fixed order: include-guard identifier, class
//! name, header extension. Every pass is attempted even when an earlier
//! one failed, so a partially substituted file is a possible end state.
//! Callers get one [`PassReport`] per pass that ran.

use std::fmt;
use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        CLASS_NAME_TOKEN, HEADER_EXT_TOKEN, IDENTIFIER_TOKEN, ResolvedConfig, derive_guard_token,
    },
    error::{ClassgenError, ClassgenResult},
};

/// The substitution passes, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Identifier,
    ClassName,
    HeaderExtension,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => write!(f, "Identifier"),
            Self::ClassName => write!(f, "Class name"),
            Self::HeaderExtension => write!(f, "Header extension"),
        }
    }
}

/// One pass, fully described before it touches the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassPlan {
    pub pass: Pass,
    pub token: &'static str,
    pub replacement: String,
    pub files: Vec<PathBuf>,
}

/// Outcome of a single pass.
#[derive(Debug, Clone)]
pub struct PassReport {
    pub pass: Pass,
    pub files: Vec<PathBuf>,
    /// Number of replacements made across all files.
    pub outcome: Result<usize, ClassgenError>,
}

impl PassReport {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Passes applicable to `config`, in order.
///
/// Without a source file only the identifier and class-name passes run and
/// both touch the header alone.
pub fn plan(config: &ResolvedConfig) -> Vec<PassPlan> {
    let header = config.header_file();
    let source = config.source_file();

    let mut class_name_files = vec![header.clone()];
    if config.create_source {
        class_name_files.push(source.clone());
    }

    let mut passes = vec![
        PassPlan {
            pass: Pass::Identifier,
            token: IDENTIFIER_TOKEN,
            replacement: derive_guard_token(config.class_name.as_str(), config.header_ext),
            files: vec![header],
        },
        PassPlan {
            pass: Pass::ClassName,
            token: CLASS_NAME_TOKEN,
            replacement: config.class_name.to_string(),
            files: class_name_files,
        },
    ];

    if config.create_source {
        passes.push(PassPlan {
            pass: Pass::HeaderExtension,
            token: HEADER_EXT_TOKEN,
            replacement: config.header_ext.as_str().to_string(),
            files: vec![source],
        });
    }

    passes
}

/// Runs the substitution passes through a [`Filesystem`].
pub struct SubstitutionEngine<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> SubstitutionEngine<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Run every applicable pass, strictly in order.
    #[instrument(skip_all, fields(class = %config.class_name))]
    pub fn run(&self, config: &ResolvedConfig) -> Vec<PassReport> {
        plan(config)
            .into_iter()
            .map(|step| {
                let outcome = self.apply(&step);
                match &outcome {
                    Ok(count) => debug!(pass = %step.pass, count, "Pass complete"),
                    Err(e) => debug!(pass = %step.pass, error = %e, "Pass failed"),
                }
                PassReport {
                    pass: step.pass,
                    files: step.files,
                    outcome,
                }
            })
            .collect()
    }

    fn apply(&self, step: &PassPlan) -> ClassgenResult<usize> {
        let mut total = 0;
        for file in &step.files {
            let content = self
                .filesystem
                .read_to_string(file)
                .map_err(|e| failure(step.pass, file, &e))?;
            let count = content.matches(step.token).count();
            if count == 0 {
                continue;
            }
            let replaced = content.replace(step.token, &step.replacement);
            self.filesystem
                .write_file(file, &replaced)
                .map_err(|e| failure(step.pass, file, &e))?;
            total += count;
        }
        Ok(total)
    }
}

fn failure(pass: Pass, path: &std::path::Path, cause: &ClassgenError) -> ClassgenError {
    ApplicationError::SubstitutionFailed {
        pass,
        path: path.to_path_buf(),
        reason: cause.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::application::ports::output::MockFilesystem;
    use crate::domain::{ClassName, HeaderExtension, SourceExtension};

    fn config(create_source: bool, header_ext: HeaderExtension) -> ResolvedConfig {
        ResolvedConfig {
            class_name: ClassName::parse("Bar").unwrap(),
            header_dir: PathBuf::from("include"),
            header_ext,
            source_dir: PathBuf::from("src"),
            source_ext: SourceExtension::Cc,
            create_source,
            dry_run: false,
            proceed: true,
        }
    }

    #[test]
    fn plan_with_source_has_three_passes_in_order() {
        let passes = plan(&config(true, HeaderExtension::Hpp));
        let order: Vec<Pass> = passes.iter().map(|p| p.pass).collect();
        assert_eq!(order, [Pass::Identifier, Pass::ClassName, Pass::HeaderExtension]);
        assert_eq!(passes[0].replacement, "BAR_HPP");
        assert_eq!(passes[1].files.len(), 2);
        assert_eq!(passes[2].replacement, ".hpp");
        assert_eq!(passes[2].files, [PathBuf::from("src").join("Bar.cc")]);
    }

    #[test]
    fn plan_without_source_touches_header_only() {
        let passes = plan(&config(false, HeaderExtension::H));
        assert_eq!(passes.len(), 2);
        let header = PathBuf::from("include").join("Bar.h");
        for pass in &passes {
            assert_eq!(pass.files, [header.clone()]);
        }
    }

    #[test]
    fn failed_pass_does_not_stop_later_passes() {
        let mut fs = MockFilesystem::new();
        let header = PathBuf::from("include").join("Bar.hpp");
        let header_for_read = header.clone();
        fs.expect_read_to_string().returning(move |path: &Path| {
            if path == header_for_read {
                Ok("%identifier% %className%".to_string())
            } else {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "gone".into(),
                }
                .into())
            }
        });
        fs.expect_write_file().returning(|_, _| Ok(()));

        let reports = SubstitutionEngine::new(&fs).run(&config(true, HeaderExtension::Hpp));

        assert_eq!(reports.len(), 3);
        assert!(reports[0].succeeded());
        // class-name pass rewrote the header, then failed reading the source
        assert!(!reports[1].succeeded());
        assert!(matches!(
            reports[2].outcome,
            Err(ClassgenError::Application(ApplicationError::SubstitutionFailed {
                pass: Pass::HeaderExtension,
                ..
            }))
        ));
    }

    #[test]
    fn files_without_token_are_not_rewritten() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|_| Ok("no placeholders here".to_string()));
        fs.expect_write_file().times(0);

        let reports = SubstitutionEngine::new(&fs).run(&config(false, HeaderExtension::H));

        assert!(reports.iter().all(|r| matches!(r.outcome, Ok(0))));
    }
}
