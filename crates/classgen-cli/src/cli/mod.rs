//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use classgen_core::domain::RawOptions;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Without a subcommand, `classgen` creates a class from the create flags.
#[derive(Debug, Parser)]
#[command(
    name    = "classgen",
    bin_name = "classgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} C++ class boilerplate, instantly",
    long_about = "classgen creates a C++ header (and optionally a source file) \
                  from templates, asking for whatever the flags leave out.",
    after_help = "EXAMPLES:\n\
        \x20 classgen\n\
        \x20 classgen --class-name Widget --yes\n\
        \x20 classgen -c Widget -n -y --dry-run\n\
        \x20 classgen completions bash > ~/.local/share/bash-completion/completions/classgen",
    args_conflicts_with_subcommands = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Flags for creating a class.
    #[command(flatten)]
    pub create: CreateArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialise a classgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 classgen init\n\
            \x20 classgen init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 classgen completions bash > ~/.local/share/bash-completion/completions/classgen\n\
            \x20 classgen completions zsh  > ~/.zfunc/_classgen\n\
            \x20 classgen completions fish > ~/.config/fish/completions/classgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for creating a class.
#[derive(Debug, Default, Args)]
pub struct CreateArgs {
    /// Class name. Prompted for when missing or invalid.
    #[arg(
        short = 'c',
        long = "class-name",
        value_name = "NAME",
        help = "Name of the class to create"
    )]
    pub class_name: Option<String>,

    /// Create only the header file.
    #[arg(short = 'n', long = "no-source", help = "Do not create a source file")]
    pub no_source: bool,

    /// Use defaults for directories and extensions instead of asking.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip directory and extension prompts and use defaults"
    )]
    pub yes: bool,

    /// Preview the configuration without writing any files.
    #[arg(
        short = 'd',
        long = "dry-run",
        help = "Show what would be created without creating"
    )]
    pub dry_run: bool,

    /// Directory holding the `header` and `source` templates. Without it or
    /// `templates.dir`, the built-in templates are installed beside the
    /// config file and read from there.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Template directory (overrides configuration)"
    )]
    pub templates: Option<PathBuf>,
}

impl CreateArgs {
    /// The parsed flags as the core sees them.
    pub fn raw_options(&self) -> RawOptions {
        RawOptions {
            skip_prompts: self.yes,
            create_source: !self.no_source,
            dry_run: self.dry_run,
            class_name: self.class_name.clone(),
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `classgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `classgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn config_flag_does_not_steal_short_c() {
        let cli = Cli::parse_from(["classgen", "-c", "Foo", "--config", "alt.toml", "-q"]);
        assert_eq!(cli.create.class_name.as_deref(), Some("Foo"));
        assert_eq!(cli.global.config, Some(PathBuf::from("alt.toml")));
        assert!(cli.global.quiet);
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::parse_from(["classgen", "init", "--no-color", "-vv"]);
        assert!(matches!(cli.command, Some(Commands::Init(_))));
        assert!(cli.global.no_color);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn no_flags_means_prompt_for_everything() {
        let cli = Cli::parse_from(["classgen"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.create.raw_options(), RawOptions::default());
    }

    #[test]
    fn short_flags_map_to_raw_options() {
        let cli = Cli::parse_from(["classgen", "-c", "Foo", "-n", "-y", "-d"]);
        let raw = cli.create.raw_options();
        assert_eq!(raw.class_name.as_deref(), Some("Foo"));
        assert!(!raw.create_source);
        assert!(raw.skip_prompts);
        assert!(raw.dry_run);
    }

    #[test]
    fn long_flags_map_to_raw_options() {
        let cli = Cli::parse_from([
            "classgen",
            "--class-name",
            "My Class",
            "--no-source",
            "--yes",
            "--dry-run",
            "--templates",
            "/tmp/t",
        ]);
        assert_eq!(cli.create.class_name.as_deref(), Some("My Class"));
        assert_eq!(cli.create.templates, Some(PathBuf::from("/tmp/t")));
    }

    #[test]
    fn class_name_requires_a_value() {
        assert!(Cli::try_parse_from(["classgen", "--class-name"]).is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["classgen", "--bogus"]).is_err());
    }

    #[test]
    fn create_flags_conflict_with_subcommands() {
        assert!(Cli::try_parse_from(["classgen", "-c", "Foo", "init"]).is_err());
    }

    #[test]
    fn init_force() {
        let cli = Cli::parse_from(["classgen", "init", "--force"]);
        assert!(matches!(cli.command, Some(Commands::Init(InitArgs { force: true }))));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["classgen", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }
}
