//! Command implementations for the SiteForge CLI.

pub mod batch;
pub mod classify;
pub mod gallery;
pub mod generate;
pub mod profiles;
pub mod wordpress;

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use siteforge_core::Config;
use siteforge_generator::{Layout, OutputKind};

/// Load `config_path` layered with `SITEFORGE__*` overrides. A missing file
/// yields the defaults.
pub(crate) fn load_config(config_path: &Path) -> Result<Config> {
    let config = Config::load_with_env(config_path).wrap_err_with(|| {
        format!("Failed to load configuration from {}", config_path.display())
    })?;
    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}

/// Write `html` to `output`, creating missing parent directories.
pub(crate) fn write_document(output: &Path, html: &str) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(output, html).wrap_err_with(|| format!("Failed to write {}", output.display()))
}

/// Map the `--layout` and `--multi-page` flags to an output kind.
pub(crate) fn output_kind(layout: Option<Layout>, multi_page: bool) -> OutputKind {
    match (multi_page, layout) {
        (true, _) => OutputKind::MultiPage,
        (false, Some(layout)) => OutputKind::Layout(layout),
        (false, None) => OutputKind::Assigned,
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_output_kind() {
        assert_eq!(output_kind(None, false), OutputKind::Assigned);
        assert_eq!(
            output_kind(Some(Layout::Minimalist), false),
            OutputKind::Layout(Layout::Minimalist)
        );
        assert_eq!(output_kind(Some(Layout::Minimalist), true), OutputKind::MultiPage);
    }

    #[test]
    fn test_write_document_creates_parents() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("a/b/page.html");

        write_document(&output, "<p>hi</p>").unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let config = load_config(&dir.path().join("siteforge.toml")).unwrap();
        assert_eq!(config.output.dir, "dist");
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("siteforge.toml");
        std::fs::write(&path, "[output]\ndir = \"site\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.output.dir, "site");
    }
}
