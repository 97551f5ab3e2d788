//! Option Resolver - turns flags plus answers into a [`ResolvedConfig`].
//!
//! Each round re-runs [`select_questions`] against the answers collected so
//! far and asks only the first question returned. Rejected free-text
//! answers are reported and the same question comes back next round.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Palette, Prompter, Reporter},
        questions::{Answers, QuestionKey, Rejection, select_questions},
        services::confirmation_gate::ConfirmationGate,
    },
    domain::{
        ClassName, ClassNameVerdict, HeaderExtension, RawOptions, ResolvedConfig,
        ResolverDefaults, SourceExtension, class_name,
    },
    error::{ClassgenError, ClassgenResult},
};

/// Merges command-line options, interactive answers, and defaults.
pub struct OptionResolver<'a> {
    prompter: &'a dyn Prompter,
    reporter: &'a dyn Reporter,
    palette: &'a dyn Palette,
    defaults: ResolverDefaults,
}

impl<'a> OptionResolver<'a> {
    pub fn new(
        prompter: &'a dyn Prompter,
        reporter: &'a dyn Reporter,
        palette: &'a dyn Palette,
        defaults: ResolverDefaults,
    ) -> Self {
        Self {
            prompter,
            reporter,
            palette,
            defaults,
        }
    }

    /// Ask whatever is still missing, preview the result, and pass the
    /// proceed gate.
    ///
    /// A dry run skips the proceed gate and always yields `proceed = false`.
    #[instrument(skip_all, fields(dry_run = options.dry_run, skip_prompts = options.skip_prompts))]
    pub fn resolve(&self, options: &RawOptions) -> ClassgenResult<ResolvedConfig> {
        self.report_supplied_name(options);

        let answers = self.collect_answers(options)?;
        let mut config = self.fold(options, &answers)?;
        info!(class = %config.class_name, "Options resolved");

        self.preview(&config);

        let outcome = ConfirmationGate::new(self.prompter).proceed(options.dry_run)?;
        config.proceed = outcome.permits_write();
        Ok(config)
    }

    fn report_supplied_name(&self, options: &RawOptions) {
        let Some(name) = options.class_name.as_deref() else {
            return;
        };
        let verdict = class_name::validate(name);
        debug!(name, ?verdict, "Class name supplied");
        let shown = if verdict.is_valid() {
            self.palette.success(name)
        } else {
            self.palette.error(name)
        };
        self.reporter.info(&format!("Received class name of {shown}"));
    }

    fn collect_answers(&self, options: &RawOptions) -> ClassgenResult<Answers> {
        let mut answers = Answers::new();

        while let Some(question) = select_questions(options, &self.defaults, &answers)
            .into_iter()
            .next()
        {
            let raw = self.prompter.ask(&question)?;
            match question.accept(raw) {
                Ok(answer) => answers.record(question.key(), answer),
                Err(Rejection::Invalid(reason)) => {
                    debug!(key = ?question.key(), %reason, "Answer rejected");
                    self.reporter.error(&reason);
                }
                Err(Rejection::WrongShape) => {
                    return Err(ApplicationError::UnexpectedAnswer {
                        question: question.message().to_string(),
                    }
                    .into());
                }
            }
        }

        debug!("Answers collected");
        Ok(answers)
    }

    fn fold(&self, options: &RawOptions, answers: &Answers) -> ClassgenResult<ResolvedConfig> {
        let class_name = ClassName::parse(final_class_name(options, answers)?)?;

        let header_dir = answers
            .text(QuestionKey::HeaderDir)
            .map_or_else(|| self.defaults.header_dir.clone(), PathBuf::from);
        let header_ext = answers
            .choice(QuestionKey::HeaderExt)
            .and_then(|i| HeaderExtension::ALL.get(i).copied())
            .unwrap_or(self.defaults.header_ext);
        let source_dir = answers
            .text(QuestionKey::SourceDir)
            .map_or_else(|| self.defaults.source_dir.clone(), PathBuf::from);
        let source_ext = answers
            .choice(QuestionKey::SourceExt)
            .and_then(|i| SourceExtension::ALL.get(i).copied())
            .unwrap_or(self.defaults.source_ext);

        Ok(ResolvedConfig {
            class_name,
            header_dir,
            header_ext,
            source_dir,
            source_ext,
            create_source: options.create_source,
            dry_run: options.dry_run,
            proceed: false,
        })
    }

    fn preview(&self, config: &ResolvedConfig) {
        let p = self.palette;
        self.reporter.info(&format!(
            "Creating class {}",
            p.emphasis(config.class_name.as_str())
        ));
        self.reporter.info(&format!(
            "Creating header file {}",
            p.emphasis(&config.header_file().display().to_string())
        ));
        if config.create_source {
            self.reporter.info(&format!(
                "Creating source file {}",
                p.emphasis(&config.source_file().display().to_string())
            ));
        }
    }
}

/// Pick the class name from the branch the questions took.
fn final_class_name(options: &RawOptions, answers: &Answers) -> ClassgenResult<String> {
    let missing = || ClassgenError::Internal {
        message: "class name question was never answered".into(),
    };

    let Some(supplied) = options.class_name.as_deref() else {
        return answers
            .text(QuestionKey::ClassName)
            .map(str::to_string)
            .ok_or_else(missing);
    };

    match class_name::validate(supplied) {
        ClassNameVerdict::Valid => Ok(supplied.to_string()),
        ClassNameVerdict::ContainsSpaces => {
            if answers.confirmed(QuestionKey::ReplaceWithStripped) == Some(true) {
                Ok(class_name::strip_spaces(supplied))
            } else {
                answers
                    .text(QuestionKey::NewClassName)
                    .map(str::to_string)
                    .ok_or_else(missing)
            }
        }
        ClassNameVerdict::Empty | ClassNameVerdict::IllegalCharacters => answers
            .text(QuestionKey::ClassName)
            .map(str::to_string)
            .ok_or_else(missing),
    }
}
