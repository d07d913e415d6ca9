//! Gallery command - renders a showcase page

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use siteforge_generator::{Builder, GalleryTemplate, ThemeCustomization};

use super::{load_config, write_document};

/// Where the showcase text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GallerySource {
    /// Derive the text from a free-text prompt.
    Prompt(String),
    /// Explicit text.
    Manual(ThemeCustomization),
}

/// Run the gallery command.
///
/// Without `template`, a prompt picks the showcase matching its app type and
/// explicit text gets the AI platform. Writes to `output` when given,
/// otherwise prints the document to stdout.
pub fn run(
    config_path: &Path,
    source: GallerySource,
    template: Option<GalleryTemplate>,
    output: Option<&Path>,
) -> Result<GalleryTemplate> {
    let config = load_config(config_path)?;
    let builder = Builder::new(&config, &config.output.dir);

    let (template, html) = match source {
        GallerySource::Prompt(prompt) => builder.render_gallery_prompt(&prompt, template),
        GallerySource::Manual(custom) => {
            let template = template.unwrap_or(GalleryTemplate::AiPlatform);
            builder
                .render_gallery(template, &custom)
                .map(|html| (template, html))
        }
    }
    .wrap_err("Failed to render showcase page")?;
    tracing::info!(template = %template, bytes = html.len(), "Rendered showcase page");

    let Some(output) = output else {
        println!("{html}");
        return Ok(template);
    };
    write_document(output, &html)?;

    println!();
    println!("  Showcase generated!");
    println!();
    println!("  Template: {}", template.label());
    println!("  Output:   {}", output.display());
    println!("  Size:     {} bytes", html.len());
    println!();

    Ok(template)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_gallery_from_prompt_picks_template() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("showcase.html");

        let template = run(
            &dir.path().join("siteforge.toml"),
            GallerySource::Prompt("a restaurant called Chez Nous".to_string()),
            None,
            Some(&output),
        )
        .unwrap();

        assert_eq!(template, GalleryTemplate::FineDining);
        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("Our Menu"));
        assert!(html.contains("Chez Nous"));
    }

    #[test]
    fn test_gallery_manual_text() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out/estate.html");
        let custom = ThemeCustomization {
            title: "Homes & Gardens".to_string(),
            subtitle: "Find your place".to_string(),
            company_name: "Keyhouse".to_string(),
            description: String::new(),
            color_scheme: "teal".to_string(),
        };

        let template = run(
            &dir.path().join("siteforge.toml"),
            GallerySource::Manual(custom),
            Some(GalleryTemplate::RealEstate),
            Some(&output),
        )
        .unwrap();

        assert_eq!(template, GalleryTemplate::RealEstate);
        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("<title>Homes &amp; Gardens</title>"));
        assert!(html.contains("Keyhouse. Your Trusted Real Estate Partner."));
    }
}
