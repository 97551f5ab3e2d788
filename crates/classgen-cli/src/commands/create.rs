//! Creating a class: the default action when no subcommand is given.
//!
//! Responsibility: wire terminal adapters into the core services, walk the
//! gates in order, and print the final line. No business logic lives here.

use std::path::PathBuf;

use tracing::{info, instrument};

use classgen_adapters::LocalFilesystem;
use classgen_core::prelude::*;

use crate::{
    bundled, cli::CreateArgs, config::AppConfig, error::CliResult, output::OutputManager,
    prompt::TerminalPrompter,
};

/// Printed when the operator declines a gate.
pub const ABORTED_MESSAGE: &str = "Create class process aborted";

/// How a create run ended.
#[derive(Debug)]
pub enum Outcome {
    /// A gate was declined; nothing was written.
    Aborted,
    /// Configuration was resolved and previewed only.
    DryRun(ResolvedConfig),
    Created {
        class_name: ClassName,
        report: ScaffoldReport,
    },
}

/// Execute the create flow with terminal prompts and the real filesystem.
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = args.raw_options();
    let defaults = config.resolver_defaults()?;
    let template_dir = match config.template_dir(args.templates.as_deref()) {
        Some(dir) => dir,
        None => {
            let dir = bundled::user_template_dir();
            // dry runs leave the filesystem untouched
            if !options.dry_run {
                bundled::install(&dir)?;
            }
            dir
        }
    };
    let prompter = TerminalPrompter::new();
    let palette = output.palette();

    let outcome = create(
        &options,
        Services {
            defaults,
            template_dir,
            prompter: &prompter,
            palette: &*palette,
            reporter: &output,
            filesystem: Box::new(LocalFilesystem::new()),
        },
    )?;

    if let Outcome::Created { report, .. } = &outcome {
        for failed in report.failed_passes() {
            info!(pass = %failed.pass, "Substitution pass failed");
        }
    }

    let line = outcome_line(&outcome, &*palette);
    match outcome {
        Outcome::DryRun(_) => output.info(&line)?,
        Outcome::Aborted | Outcome::Created { .. } => output.print(&line)?,
    }

    Ok(())
}

/// The last line a create run prints.
pub fn outcome_line(outcome: &Outcome, palette: &dyn Palette) -> String {
    match outcome {
        Outcome::Aborted => ABORTED_MESSAGE.to_string(),
        Outcome::DryRun(config) => format!(
            "Dry run: would create {}",
            config
                .target_files()
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(" and ")
        ),
        Outcome::Created { class_name, .. } => done_line(palette, class_name),
    }
}

fn done_line(palette: &dyn Palette, class_name: &ClassName) -> String {
    format!(
        "{} {} successfully created! Happy coding!",
        palette.inverse("DONE"),
        class_name
    )
}

/// Everything [`create`] talks to.
pub struct Services<'a> {
    pub defaults: ResolverDefaults,
    pub template_dir: PathBuf,
    pub prompter: &'a dyn Prompter,
    pub palette: &'a dyn Palette,
    pub reporter: &'a dyn Reporter,
    pub filesystem: Box<dyn Filesystem>,
}

/// Disclaimer, resolve (including the proceed gate), then scaffold.
pub fn create(options: &RawOptions, services: Services<'_>) -> CliResult<Outcome> {
    let gate = ConfirmationGate::new(services.prompter);
    if !gate.disclaimer(options.dry_run)?.allows_continue() {
        info!("Disclaimer declined");
        return Ok(Outcome::Aborted);
    }

    let resolver = OptionResolver::new(
        services.prompter,
        services.reporter,
        services.palette,
        services.defaults,
    );
    let config = resolver.resolve(options)?;

    if config.dry_run {
        return Ok(Outcome::DryRun(config));
    }
    if !config.proceed {
        info!("Proceed declined");
        return Ok(Outcome::Aborted);
    }

    let service = ScaffoldService::new(services.filesystem, services.template_dir);
    let report = service.scaffold(&config, services.reporter)?;

    Ok(Outcome::Created {
        class_name: config.class_name,
        report,
    })
}
