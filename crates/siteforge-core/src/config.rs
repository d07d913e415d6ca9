//! Generator configuration management.

use std::path::Path;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for SiteForge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTML rendering settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// WordPress theme settings.
    #[serde(default)]
    pub wordpress: WordPressConfig,
}

/// Settings shared by every HTML renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Script URL of the utility CSS framework pulled in by generated pages.
    #[serde(default = "default_css_framework_url")]
    pub css_framework_url: String,

    /// Document language code.
    #[serde(default = "default_lang")]
    pub lang: String,

    /// Year printed in footers. Falls back to the current year.
    #[serde(default)]
    pub copyright_year: Option<i32>,

    /// Phone number shown in contact blocks.
    #[serde(default = "default_contact_phone")]
    pub contact_phone: String,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory generated files are written to.
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

/// WordPress theme metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordPressConfig {
    /// Value of the `Author` header in `style.css`.
    #[serde(default = "default_author")]
    pub author: String,

    /// Value of the `Author URI` header in `style.css`.
    #[serde(default = "default_author_uri")]
    pub author_uri: String,

    /// Theme version.
    #[serde(default = "default_theme_version")]
    pub theme_version: String,

    /// Category used when none can be derived from a prompt.
    #[serde(default = "default_category")]
    pub default_category: String,
}

// Default value functions
fn default_css_framework_url() -> String {
    "https://cdn.tailwindcss.com".to_string()
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_contact_phone() -> String {
    "+1 (555) 123-4567".to_string()
}

fn default_output_dir() -> String {
    "dist".to_string()
}

fn default_author() -> String {
    "SiteForge".to_string()
}

fn default_author_uri() -> String {
    "https://siteforge.com".to_string()
}

fn default_theme_version() -> String {
    "1.0.0".to_string()
}

fn default_category() -> String {
    "landing".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            css_framework_url: default_css_framework_url(),
            lang: default_lang(),
            copyright_year: None,
            contact_phone: default_contact_phone(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl Default for WordPressConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            author_uri: default_author_uri(),
            theme_version: default_theme_version(),
            default_category: default_category(),
        }
    }
}

impl RenderConfig {
    /// Year to print in footers.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.copyright_year
            .unwrap_or_else(|| chrono::Utc::now().year())
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|source| CoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate, layering `SITEFORGE__*`
    /// environment variables over the file.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("SITEFORGE").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.render.lang.trim().is_empty() {
            return Err(CoreError::invalid("render.lang", "cannot be empty"));
        }

        if self.render.css_framework_url.trim().is_empty() {
            return Err(CoreError::invalid("render.css_framework_url", "cannot be empty"));
        }

        if self.wordpress.theme_version.trim().is_empty() {
            return Err(CoreError::invalid("wordpress.theme_version", "cannot be empty"));
        }

        if !self.render.css_framework_url.starts_with("https://") {
            tracing::warn!("render.css_framework_url is not served over https");
        }

        if let Some(year) = self.render.copyright_year
            && !(1970..=9999).contains(&year)
        {
            tracing::warn!(year, "render.copyright_year looks implausible");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn create_test_config() -> String {
        r#"
[render]
css_framework_url = "https://cdn.example.com/tw.js"
lang = "de"
copyright_year = 2030
contact_phone = "+49 30 1234"

[output]
dir = "out"

[wordpress]
author = "Acme"
author_uri = "https://acme.test"
theme_version = "2.1.0"
default_category = "saas"
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("siteforge.toml");
        let mut file = std::fs::File::create(&config_path).expect("create file");
        file.write_all(create_test_config().as_bytes())
            .expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.render.css_framework_url, "https://cdn.example.com/tw.js");
        assert_eq!(config.render.lang, "de");
        assert_eq!(config.render.year(), 2030);
        assert_eq!(config.render.contact_phone, "+49 30 1234");
        assert_eq!(config.output.dir, "out");
        assert_eq!(config.wordpress.author, "Acme");
        assert_eq!(config.wordpress.theme_version, "2.1.0");
        assert_eq!(config.wordpress.default_category, "saas");
    }

    #[test]
    fn test_config_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("siteforge.toml");
        std::fs::write(&config_path, "[output]\ndir = \"site\"\n").expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.output.dir, "site");
        assert_eq!(config.render.css_framework_url, "https://cdn.tailwindcss.com");
        assert_eq!(config.render.lang, "en");
        assert!(config.render.copyright_year.is_none());
        assert_eq!(config.wordpress.author, "SiteForge");
        assert_eq!(config.wordpress.author_uri, "https://siteforge.com");
        assert_eq!(config.wordpress.theme_version, "1.0.0");
    }

    #[test]
    fn test_year_falls_back_to_current() {
        let config = RenderConfig::default();
        assert!(config.year() >= 2024);
    }

    #[test]
    fn test_config_validation_empty_lang() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("siteforge.toml");
        std::fs::write(&config_path, "[render]\nlang = \"\"\n").expect("write");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert!(matches!(
            result,
            Err(CoreError::Invalid {
                field: "render.lang",
                ..
            })
        ));
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/siteforge.toml"));
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[test]
    fn test_load_with_env_reads_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("siteforge.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load_with_env(&config_path).expect("load config");
        assert_eq!(config.render.lang, "de");
        assert_eq!(config.output.dir, "out");
    }
}
