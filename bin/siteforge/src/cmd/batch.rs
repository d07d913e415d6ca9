//! Batch command - renders a file of prompts in parallel

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr, bail};
use siteforge_generator::{Builder, build::read_prompts};

use super::{load_config, output_kind};

/// Run the batch command.
///
/// Reads one prompt per line from `file` and writes `<n>-<slug>.html` for
/// each into `output` (or the configured output directory).
pub fn run(
    config_path: &Path,
    file: &Path,
    output: Option<&Path>,
    multi_page: bool,
) -> Result<()> {
    let config = load_config(config_path)?;
    let output_dir = output.map_or_else(|| PathBuf::from(&config.output.dir), Path::to_path_buf);

    let prompts = read_prompts(file)
        .wrap_err_with(|| format!("Failed to read prompts from {}", file.display()))?;
    tracing::info!(file = %file.display(), prompts = prompts.len(), "Starting batch");

    let builder = Builder::new(&config, output_dir).with_output(output_kind(None, multi_page));
    let stats = builder.build_batch(&prompts).wrap_err("Batch build failed")?;

    println!();
    println!("  Batch completed!");
    println!();
    println!("  Pages:    {}", stats.pages);
    println!("  Failed:   {}", stats.failed);
    println!();
    println!("  Duration: {:.2}s", stats.duration_ms as f64 / 1000.0);
    println!("  Output:   {}", builder.output_dir().display());
    println!();

    if stats.failed > 0 {
        bail!("{} of {} prompts failed to build", stats.failed, prompts.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_batch_writes_numbered_files() {
        let dir = TempDir::new().unwrap();
        let prompts = dir.path().join("prompts.txt");
        fs::write(
            &prompts,
            "# launch list\na saas tool called Flowly\n\na restaurant called Chez Nous\n",
        )
        .unwrap();
        let output = dir.path().join("dist");

        run(&dir.path().join("siteforge.toml"), &prompts, Some(&output), false).unwrap();

        assert!(output.join("1-flowly.html").exists());
        assert!(output.join("2-chez-nous.html").exists());
    }

    #[test]
    fn test_batch_rejects_empty_file() {
        let dir = TempDir::new().unwrap();
        let prompts = dir.path().join("prompts.txt");
        fs::write(&prompts, "\n# nothing here\n").unwrap();

        let result = run(&dir.path().join("siteforge.toml"), &prompts, Some(dir.path()), false);
        assert!(result.is_err());
    }
}
