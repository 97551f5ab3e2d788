//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the
//! [`ResolverDefaults`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `CLASSGEN__SECTION__KEY`
//! 3. Config file (`--config FILE`, otherwise [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use classgen_core::domain::{
    DEFAULT_HEADER_DIR, DEFAULT_SOURCE_DIR, HeaderExtension, ResolverDefaults, SourceExtension,
};

use crate::error::{CliError, CliResult};

/// Environment variable prefix; nested keys are joined with `__`.
const ENV_PREFIX: &str = "CLASSGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used for prompt defaults and under `--yes`.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

/// Extensions are kept as text so a bad value can be reported with the key
/// it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub header_dir: PathBuf,
    pub header_ext: String,
    pub source_dir: PathBuf,
    pub source_ext: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            header_dir: PathBuf::from(DEFAULT_HEADER_DIR),
            header_ext: HeaderExtension::default().as_str().into(),
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            source_ext: SourceExtension::default().as_str().into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, the config file, and the
    /// environment.
    ///
    /// A file named with `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let settings = config::Config::builder()
            .add_source(
                config::File::from(path.as_path())
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to load configuration from {}", path.display()),
                source: Some(Box::new(e)),
            })?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to parse configuration in {}", path.display()),
                source: Some(Box::new(e)),
            })?;

        // Surface bad extensions now rather than after the disclaimer.
        config.resolver_defaults()?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.classgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("", "", "classgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".classgen.toml"))
    }

    /// Defaults handed to the option resolver.
    pub fn resolver_defaults(&self) -> CliResult<ResolverDefaults> {
        let d = &self.defaults;
        let header_ext = d
            .header_ext
            .parse::<HeaderExtension>()
            .map_err(|e| invalid_key("defaults.header_ext", e))?;
        let source_ext = d
            .source_ext
            .parse::<SourceExtension>()
            .map_err(|e| invalid_key("defaults.source_ext", e))?;

        Ok(ResolverDefaults {
            header_dir: d.header_dir.clone(),
            header_ext,
            source_dir: d.source_dir.clone(),
            source_ext,
        })
    }

    /// Template directory named by the `--templates` flag, then by
    /// `templates.dir`. `None` means the bundled templates are used.
    pub fn template_dir(&self, flag: Option<&Path>) -> Option<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| self.templates.dir.clone())
    }
}

fn invalid_key(key: &str, err: classgen_core::domain::DomainError) -> CliError {
    CliError::ConfigError {
        message: format!("Invalid value for '{key}': {err}"),
        source: Some(Box::new(err)),
    }
}
