//! Default templates compiled into the binary.
//!
//! When neither `--templates` nor `templates.dir` names a directory, the
//! templates are written to `templates/` next to the config file and read
//! from there, so an installed binary does not depend on a source checkout.
//! Files already present are left alone; edit them to change the defaults.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
};

const HEADER: &str = include_str!("../../../templates/header");
const SOURCE: &str = include_str!("../../../templates/source");

/// File names the scaffold reads, paired with their bundled content.
const FILES: [(&str, &str); 2] = [("header", HEADER), ("source", SOURCE)];

/// `templates/` beside the default config file.
pub fn user_template_dir() -> PathBuf {
    AppConfig::config_path()
        .parent()
        .map(|dir| dir.join("templates"))
        .unwrap_or_else(|| PathBuf::from("templates"))
}

/// Write any missing bundled template into `dir`. Returns the names written.
pub fn install(dir: &Path) -> CliResult<Vec<&'static str>> {
    std::fs::create_dir_all(dir)
        .with_cli_context(|| format!("Failed to create template directory '{}'", dir.display()))?;

    let mut written = Vec::new();
    for (name, content) in FILES {
        let path = dir.join(name);
        if path.exists() {
            continue;
        }
        std::fs::write(&path, content)
            .with_cli_context(|| format!("Failed to write template '{}'", path.display()))?;
        written.push(name);
    }

    debug!(dir = %dir.display(), ?written, "Bundled templates installed");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_templates_carry_every_placeholder() {
        assert!(HEADER.contains("%identifier%"));
        assert!(HEADER.contains("%className%"));
        assert!(SOURCE.starts_with("#include \"%className%%headerExt%\""));
    }

    #[test]
    fn install_writes_both_templates() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("templates");

        assert_eq!(install(&target).unwrap(), ["header", "source"]);
        assert_eq!(std::fs::read_to_string(target.join("header")).unwrap(), HEADER);
        assert_eq!(std::fs::read_to_string(target.join("source")).unwrap(), SOURCE);
    }

    #[test]
    fn install_keeps_edited_templates() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("header"), "// mine\n").unwrap();

        assert_eq!(install(dir.path()).unwrap(), ["source"]);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("header")).unwrap(),
            "// mine\n"
        );
    }

    #[test]
    fn user_templates_sit_beside_the_config_file() {
        let config_dir = AppConfig::config_path().parent().map(Path::to_path_buf);
        if let Some(config_dir) = config_dir {
            assert_eq!(user_template_dir(), config_dir.join("templates"));
        }
    }
}
