//! Generate command - renders one prompt to a single HTML document

use std::{path::Path, time::Instant};

use color_eyre::eyre::{Result, WrapErr};
use siteforge_generator::{Builder, Layout};

use super::{load_config, output_kind, write_document};

/// Run the generate command.
///
/// Writes to `output` when given, otherwise prints the document to stdout.
pub fn run(
    config_path: &Path,
    prompt: &str,
    output: Option<&Path>,
    layout: Option<Layout>,
    multi_page: bool,
) -> Result<()> {
    let start = Instant::now();
    tracing::info!(?output, ?layout, multi_page, "Generating page");

    let config = load_config(config_path)?;
    let kind = output_kind(layout, multi_page);
    let builder = Builder::new(&config, &config.output.dir).with_output(kind);

    let html = builder
        .render_prompt(prompt)
        .wrap_err("Failed to render page")?;

    let Some(output) = output else {
        println!("{html}");
        return Ok(());
    };

    write_document(output, &html)?;

    let duration = start.elapsed();

    println!();
    println!("  Page generated!");
    println!();
    println!("  Output:   {}", output.display());
    println!("  Size:     {} bytes", html.len());
    println!("  Duration: {:.2}s", duration.as_secs_f64());
    println!();

    tracing::info!(path = %output.display(), bytes = html.len(), ?duration, "Page written");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_generate_to_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out/index.html");

        run(
            &dir.path().join("siteforge.toml"),
            "a saas tool called Flowly",
            Some(&output),
            Some(Layout::Minimalist),
            false,
        )
        .unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Flowly"));
    }

    #[test]
    fn test_generate_multipage() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("site.html");

        run(
            &dir.path().join("missing.toml"),
            "a gym called Iron Temple",
            Some(&output),
            None,
            true,
        )
        .unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("id=\"page-about\""));
    }
}
