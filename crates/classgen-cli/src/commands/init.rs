//! `classgen init`: create a default configuration file and install the
//! bundled templates beside it.

use std::path::Path;

use crate::{
    bundled,
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Write the default configuration to [`AppConfig::config_path`] and any
/// missing template to [`bundled::user_template_dir`].
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::config_path();
    output.info(&format!("Initialising configuration at {}", config_path.display()))?;

    if write_default(&config_path, args.force)? {
        output.success(&format!(
            "Configuration created at {}",
            config_path.display(),
        ))?;
    } else {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
    }

    let template_dir = bundled::user_template_dir();
    let installed = bundled::install(&template_dir)?;
    if !installed.is_empty() {
        output.success(&format!(
            "Templates {} installed in {}",
            installed.join(" and "),
            template_dir.display(),
        ))?;
    }

    Ok(())
}

/// Write the default config to `path`; `false` when a file was already
/// there and `force` was not given.
fn write_default(path: &Path, force: bool) -> CliResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_loadable_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert!(write_default(&path, false).unwrap());

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(
            loaded.resolver_defaults().unwrap(),
            AppConfig::default().resolver_defaults().unwrap()
        );
    }

    #[test]
    fn existing_file_is_kept_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(!write_default(&path, false).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        assert!(write_default(&path, true).unwrap());
        assert!(std::fs::read_to_string(&path).unwrap().contains("[defaults]"));
    }
}
