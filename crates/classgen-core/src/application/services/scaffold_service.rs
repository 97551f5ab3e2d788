//! Scaffold Service - main application orchestrator.
//!
//! This service runs an ordered task list:
//! 1. Create the header directory and copy the header template into it
//! 2. Create the source directory and copy the source template (only when
//!    source creation is enabled)
//! 3. Substitute placeholders in the copied files
//!
//! Tasks run strictly in sequence; each relies on the files the earlier
//! ones wrote. Copy failures abort the run. Substitution failures are
//! collected in the report and do not.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Reporter, StepStatus},
        services::substitution::{PassReport, SubstitutionEngine},
    },
    domain::ResolvedConfig,
    error::ClassgenResult,
};

/// Header template file name inside the template directory.
pub const HEADER_TEMPLATE: &str = "header";
/// Source template file name inside the template directory.
pub const SOURCE_TEMPLATE: &str = "source";

/// What a task does when it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    /// `mkdir -p target_dir`, then copy `template` to `target_file`.
    CopyTemplate {
        template: PathBuf,
        target_dir: PathBuf,
        target_file: PathBuf,
    },
    /// Run every substitution pass.
    Substitute,
}

/// One entry of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStep {
    pub title: String,
    pub action: TaskAction,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub title: String,
    pub status: StepStatus,
}

/// Everything a scaffold run did. Disabled tasks do not appear.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldReport {
    pub steps: Vec<StepReport>,
    pub passes: Vec<PassReport>,
}

impl ScaffoldReport {
    /// `true` when at least one task ran.
    pub fn wrote_files(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Passes that failed; the run still counts as complete.
    pub fn failed_passes(&self) -> impl Iterator<Item = &PassReport> {
        self.passes.iter().filter(|p| !p.succeeded())
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    template_dir: PathBuf,
}

impl ScaffoldService {
    /// Create a new scaffold service reading templates from `template_dir`.
    pub fn new(filesystem: Box<dyn Filesystem>, template_dir: impl Into<PathBuf>) -> Self {
        Self {
            filesystem,
            template_dir: template_dir.into(),
        }
    }

    /// The ordered task list for `config`.
    pub fn plan(&self, config: &ResolvedConfig) -> Vec<TaskStep> {
        let header_name = config.header_file_name();
        let source_name = config.source_file_name();

        vec![
            TaskStep {
                title: format!("Creating {} in ./{}", header_name, config.header_dir.display()),
                action: TaskAction::CopyTemplate {
                    template: self.template_dir.join(HEADER_TEMPLATE),
                    target_dir: config.header_dir.clone(),
                    target_file: config.header_file(),
                },
                enabled: true,
            },
            TaskStep {
                title: format!("Creating {} in ./{}", source_name, config.source_dir.display()),
                action: TaskAction::CopyTemplate {
                    template: self.template_dir.join(SOURCE_TEMPLATE),
                    target_dir: config.source_dir.clone(),
                    target_file: config.source_file(),
                },
                enabled: config.create_source,
            },
            TaskStep {
                title: format!(
                    "Renaming template variables in header {}",
                    if config.create_source {
                        "and source files"
                    } else {
                        "file"
                    }
                ),
                action: TaskAction::Substitute,
                enabled: true,
            },
        ]
    }

    /// Scaffold the class described by `config`.
    ///
    /// Does nothing unless `config` permits writing. The template directory
    /// must be readable before the first task runs.
    #[instrument(
        skip_all,
        fields(
            class = %config.class_name,
            template_dir = %self.template_dir.display()
        )
    )]
    pub fn scaffold(
        &self,
        config: &ResolvedConfig,
        reporter: &dyn Reporter,
    ) -> ClassgenResult<ScaffoldReport> {
        let mut report = ScaffoldReport::default();

        if !config.should_write() {
            info!("Nothing to write (dry run or not confirmed)");
            return Ok(report);
        }

        self.filesystem
            .check_readable(&self.template_dir)
            .map_err(|e| ApplicationError::TemplateDirectoryUnreadable {
                path: self.template_dir.clone(),
                reason: e.to_string(),
            })?;

        for step in self.plan(config).into_iter().filter(|s| s.enabled) {
            reporter.task_started(&step.title);

            match self.execute(&step.action, config) {
                Ok(passes) => {
                    let status = if passes.iter().all(PassReport::succeeded) {
                        StepStatus::Done
                    } else {
                        StepStatus::Failed
                    };
                    reporter.task_finished(&step.title, status);
                    report.steps.push(StepReport {
                        title: step.title,
                        status,
                    });
                    report.passes.extend(passes);
                }
                Err(e) => {
                    debug!(task = %step.title, error = %e, "Task failed");
                    reporter.task_finished(&step.title, StepStatus::Failed);
                    return Err(e);
                }
            }
        }

        for failed in report.failed_passes() {
            if let Err(e) = &failed.outcome {
                reporter.error(&e.to_string());
            }
        }

        info!(steps = report.steps.len(), "Scaffold completed");
        Ok(report)
    }

    fn execute(&self, action: &TaskAction, config: &ResolvedConfig) -> ClassgenResult<Vec<PassReport>> {
        match action {
            TaskAction::CopyTemplate {
                template,
                target_dir,
                target_file,
            } => {
                self.filesystem.create_dir_all(target_dir)?;
                self.filesystem.copy_file(template, target_file)?;
                Ok(Vec::new())
            }
            TaskAction::Substitute => Ok(SubstitutionEngine::new(&*self.filesystem).run(config)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockFilesystem;
    use crate::domain::{ClassName, HeaderExtension, SourceExtension};

    struct Silent;

    impl Reporter for Silent {
        fn info(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
        fn task_started(&self, _title: &str) {}
        fn task_finished(&self, _title: &str, _status: StepStatus) {}
    }

    fn config(create_source: bool) -> ResolvedConfig {
        ResolvedConfig {
            class_name: ClassName::parse("Foo").unwrap(),
            header_dir: PathBuf::from("include"),
            header_ext: HeaderExtension::H,
            source_dir: PathBuf::from("src"),
            source_ext: SourceExtension::Cpp,
            create_source,
            dry_run: false,
            proceed: true,
        }
    }

    #[test]
    fn plan_disables_source_copy_without_source() {
        let service = ScaffoldService::new(Box::new(MockFilesystem::new()), "templates");
        let steps = service.plan(&config(false));
        assert_eq!(steps.len(), 3);
        assert!(steps[0].enabled);
        assert!(!steps[1].enabled);
        assert_eq!(steps[2].title, "Renaming template variables in header file");
    }

    #[test]
    fn plan_titles_name_file_and_directory() {
        let service = ScaffoldService::new(Box::new(MockFilesystem::new()), "templates");
        let steps = service.plan(&config(true));
        assert_eq!(steps[0].title, "Creating Foo.h in ./include");
        assert_eq!(steps[1].title, "Creating Foo.cpp in ./src");
        assert_eq!(
            steps[1].action,
            TaskAction::CopyTemplate {
                template: PathBuf::from("templates").join("source"),
                target_dir: PathBuf::from("src"),
                target_file: PathBuf::from("src").join("Foo.cpp"),
            }
        );
    }

    #[test]
    fn dry_run_touches_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_check_readable().times(0);
        fs.expect_create_dir_all().times(0);
        fs.expect_copy_file().times(0);
        fs.expect_write_file().times(0);
        let service = ScaffoldService::new(Box::new(fs), "templates");
        let cfg = ResolvedConfig {
            dry_run: true,
            proceed: false,
            ..config(true)
        };

        let report = service.scaffold(&cfg, &Silent).unwrap();

        assert!(!report.wrote_files());
    }

    #[test]
    fn unreadable_template_dir_aborts_before_any_task() {
        let mut fs = MockFilesystem::new();
        fs.expect_check_readable().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });
        fs.expect_create_dir_all().times(0);
        fs.expect_copy_file().times(0);
        let service = ScaffoldService::new(Box::new(fs), "templates");

        let err = service.scaffold(&config(true), &Silent).unwrap_err();

        assert!(matches!(
            err,
            crate::error::ClassgenError::Application(
                ApplicationError::TemplateDirectoryUnreadable { .. }
            )
        ));
    }

    #[test]
    fn copy_failure_is_fatal() {
        let mut fs = MockFilesystem::new();
        fs.expect_check_readable().returning(|_| Ok(()));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_copy_file().times(1).returning(|from, to| {
            Err(ApplicationError::CopyFailed {
                from: from.to_path_buf(),
                to: to.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        fs.expect_read_to_string().times(0);
        let service = ScaffoldService::new(Box::new(fs), "templates");

        assert!(service.scaffold(&config(true), &Silent).is_err());
    }
}
