//! WordPress command - writes a theme directory

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use siteforge_generator::{Builder, ThemeCustomization};

use super::load_config;

/// Where the theme's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// Derive everything from a free-text prompt.
    Prompt(String),
    /// Explicit customization.
    Manual {
        name: String,
        customization: ThemeCustomization,
        category: Option<String>,
    },
}

/// Run the wordpress command.
///
/// Writes the theme into `<output>/<slug>` and returns that directory.
pub fn run(config_path: &Path, source: ThemeSource, output: Option<&Path>) -> Result<PathBuf> {
    let config = load_config(config_path)?;
    let output_dir = output.map_or_else(|| PathBuf::from(&config.output.dir), Path::to_path_buf);
    let builder = Builder::new(&config, output_dir);

    let theme = match source {
        ThemeSource::Prompt(prompt) => builder.theme_for_prompt(&prompt),
        ThemeSource::Manual {
            name,
            customization,
            category,
        } => {
            let category = category.unwrap_or_else(|| builder.default_category().to_string());
            builder.theme(name, customization, category)
        }
    };
    tracing::info!(name = theme.name(), slug = %theme.slug(), "Emitting WordPress theme");

    let (dir, written) = builder
        .write_theme(&theme)
        .wrap_err("Failed to write WordPress theme")?;

    println!();
    println!("  Theme generated!");
    println!();
    println!("  Name:     {}", theme.name());
    println!("  Prefix:   {}", theme.function_prefix());
    println!("  Palette:  {}", theme.palette().id);
    println!("  Files:    {written}");
    println!("  Output:   {}", dir.display());
    println!();
    println!("  Add a screenshot.png (1200x900) before publishing.");
    println!();

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_theme_from_prompt() {
        let dir = TempDir::new().unwrap();
        let theme_dir = run(
            &dir.path().join("siteforge.toml"),
            ThemeSource::Prompt("a law firm called Harper Legal".to_string()),
            Some(dir.path()),
        )
        .unwrap();

        assert_eq!(theme_dir, dir.path().join("harper-legal"));
        let style = fs::read_to_string(theme_dir.join("style.css")).unwrap();
        assert!(style.contains("Theme Name: Harper Legal"));
        assert!(!theme_dir.join("screenshot.png").exists());
    }

    #[test]
    fn test_manual_theme_uses_default_category() {
        let dir = TempDir::new().unwrap();
        let source = ThemeSource::Manual {
            name: "Acme Co".to_string(),
            customization: ThemeCustomization {
                title: "Welcome".to_string(),
                subtitle: "Things we make".to_string(),
                company_name: "Acme".to_string(),
                description: "Widgets".to_string(),
                color_scheme: "green".to_string(),
            },
            category: None,
        };

        let theme_dir = run(&dir.path().join("siteforge.toml"), source, Some(dir.path())).unwrap();

        let style = fs::read_to_string(theme_dir.join("style.css")).unwrap();
        assert!(style.contains("landing"));
    }
}
