//! Output management and formatting.

use std::cell::RefCell;
use std::io::{self, IsTerminal};
use std::time::Duration;

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::debug;

use classgen_core::application::{Palette, PlainPalette, Reporter, StepStatus};

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    spinners: bool,
    term: Term,
    err_term: Term,
    spinner: RefCell<Option<ProgressBar>>,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            spinners: !args.quiet && io::stdout().is_terminal(),
            term: Term::stdout(),
            err_term: Term::stderr(),
            spinner: RefCell::new(None),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>` on stderr.  *Not* suppressed in quiet
    /// mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.err_term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg)
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The palette matching the colour setting.
    pub fn palette(&self) -> Box<dyn Palette> {
        if self.no_color {
            Box::new(PlainPalette)
        } else {
            Box::new(AnsiPalette)
        }
    }

    fn finish_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

/// Write failures on the terminal are not worth aborting a run for.
fn emit(result: io::Result<()>) {
    if let Err(e) = result {
        debug!(error = %e, "Failed to write to terminal");
    }
}

impl Reporter for OutputManager {
    fn info(&self, message: &str) {
        emit(self.print(message));
    }

    fn error(&self, message: &str) {
        self.finish_spinner();
        emit(OutputManager::error(self, message));
    }

    fn task_started(&self, title: &str) {
        if !self.spinners {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(title.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        if let Some(previous) = self.spinner.replace(Some(spinner)) {
            previous.finish_and_clear();
        }
    }

    fn task_finished(&self, title: &str, status: StepStatus) {
        self.finish_spinner();
        match status {
            StepStatus::Done => emit(self.success(title)),
            StepStatus::Failed => emit(OutputManager::error(self, title)),
        }
    }
}

/// Terminal colours for the core's semantic roles.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPalette;

impl Palette for AnsiPalette {
    fn error(&self, text: &str) -> String {
        text.white().on_red().to_string()
    }

    fn success(&self, text: &str) -> String {
        text.black().on_green().to_string()
    }

    fn emphasis(&self, text: &str) -> String {
        text.green().bold().to_string()
    }

    fn inverse(&self, text: &str) -> String {
        text.reversed().to_string()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
