//! Build orchestration.
//!
//! Turns prompts into files on disk: single documents, parallel batches
//! and WordPress theme directories.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use rayon::prelude::*;
use siteforge_core::{Config, ContentModel, config::WordPressConfig};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    gallery::GalleryTemplate,
    html::{HtmlError, HtmlRenderer, RenderOptions},
    layouts::Layout,
    template::TemplateError,
    wordpress::{ThemeCustomization, WordPressTheme, theme_slug},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTML generation error.
    #[error("HTML error: {0}")]
    Html(#[from] HtmlError),

    /// Theme template error.
    #[error("theme error: {0}")]
    Template(#[from] TemplateError),

    /// Invalid batch input.
    #[error("input error: {0}")]
    Input(String),
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Build statistics.
#[derive(Debug, Clone, Default)]
pub struct BuildStats {
    /// Number of documents written.
    pub pages: usize,

    /// Number of prompts that failed to render or write.
    pub failed: usize,

    /// Build duration in milliseconds.
    pub duration_ms: u64,
}

/// What each prompt renders to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputKind {
    /// The profile's assigned single-page layout.
    #[default]
    Assigned,
    /// A specific single-page layout.
    Layout(Layout),
    /// The four-page bundle.
    MultiPage,
}

/// Renders prompts and writes the results.
#[derive(Debug)]
pub struct Builder {
    renderer: HtmlRenderer,
    wordpress: WordPressConfig,
    phone: String,
    output_dir: PathBuf,
    kind: OutputKind,
}

impl Builder {
    /// Create a builder writing into `output_dir`.
    #[must_use]
    pub fn new(config: &Config, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer: HtmlRenderer::new(RenderOptions::from(&config.render)),
            wordpress: config.wordpress.clone(),
            phone: config.render.contact_phone.clone(),
            output_dir: output_dir.into(),
            kind: OutputKind::default(),
        }
    }

    /// Select what each prompt renders to.
    #[must_use]
    pub fn with_output(mut self, kind: OutputKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Classify `prompt` and render it.
    pub fn render_prompt(&self, prompt: &str) -> Result<String> {
        let model = ContentModel::from_prompt(prompt);
        self.render_model(&model)
    }

    /// Render an already built model.
    pub fn render_model(&self, model: &ContentModel) -> Result<String> {
        let palette = model.palette();
        let html = match self.kind {
            OutputKind::Assigned => self.renderer.render(model, palette)?,
            OutputKind::Layout(layout) => self.renderer.render_layout(layout, model, palette)?,
            OutputKind::MultiPage => self.renderer.render_multipage(model, palette)?,
        };
        Ok(html)
    }

    /// Render a showcase page from explicit theme text.
    pub fn render_gallery(
        &self,
        template: GalleryTemplate,
        custom: &ThemeCustomization,
    ) -> Result<String> {
        Ok(self.renderer.render_gallery(template, custom)?)
    }

    /// Render a showcase page for `prompt`. Without `template`, the showcase
    /// matching the prompt's app type is used.
    pub fn render_gallery_prompt(
        &self,
        prompt: &str,
        template: Option<GalleryTemplate>,
    ) -> Result<(GalleryTemplate, String)> {
        let model = ContentModel::from_prompt(prompt);
        let template = template.unwrap_or_else(|| GalleryTemplate::for_app_type(model.app_type));
        let html = self.render_gallery(template, &ThemeCustomization::from_model(&model))?;
        Ok((template, html))
    }

    /// Render every prompt in parallel into `<n>-<slug>.html`.
    ///
    /// A prompt that fails is logged and counted; the rest still build.
    pub fn build_batch(&self, prompts: &[String]) -> Result<BuildStats> {
        let start = Instant::now();
        let mut stats = BuildStats::default();

        info!(
            prompts = prompts.len(),
            output = %self.output_dir.display(),
            "starting batch build"
        );
        fs::create_dir_all(&self.output_dir)?;

        let results: Vec<_> = prompts
            .par_iter()
            .enumerate()
            .map(|(index, prompt)| {
                let model = ContentModel::from_prompt(prompt);
                let html = self.render_model(&model)?;
                let output_path = self.output_dir.join(output_file_name(index, &model));
                fs::write(&output_path, &html)?;

                debug!(path = %output_path.display(), app_type = model.app_type, "wrote page");
                Ok::<_, BuildError>(())
            })
            .collect();

        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(()) => stats.pages += 1,
                Err(e) => {
                    stats.failed += 1;
                    warn!(line = index + 1, error = %e, "failed to build prompt");
                }
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            pages = stats.pages,
            failed = stats.failed,
            duration_ms = stats.duration_ms,
            "batch complete"
        );

        Ok(stats)
    }

    /// Build a theme for `prompt` using the configured metadata.
    #[must_use]
    pub fn theme_for_prompt(&self, prompt: &str) -> WordPressTheme {
        let model = ContentModel::from_prompt(prompt);
        let name = model.app_name.clone();
        self.theme(name, ThemeCustomization::from_model(&model), model.app_type)
    }

    /// Build a theme from explicit customization.
    #[must_use]
    pub fn theme(
        &self,
        name: impl Into<String>,
        customization: ThemeCustomization,
        category: impl Into<String>,
    ) -> WordPressTheme {
        WordPressTheme::new(name, customization, category)
            .with_config(&self.wordpress)
            .with_phone(&self.phone)
    }

    /// Category used when the caller has none.
    #[must_use]
    pub fn default_category(&self) -> &str {
        &self.wordpress.default_category
    }

    /// Emit `theme` into `<output_dir>/<slug>`. Returns the theme directory
    /// and the number of files written.
    pub fn write_theme(&self, theme: &WordPressTheme) -> Result<(PathBuf, usize)> {
        let files = theme.emit()?;
        let dir = self.output_dir.join(theme.slug());
        let written = files.write_to(&dir)?;
        info!(dir = %dir.display(), files = written, "wrote WordPress theme");
        Ok((dir, written))
    }
}

/// File name of the document rendered for the prompt at `index`.
#[must_use]
pub fn output_file_name(index: usize, model: &ContentModel) -> String {
    format!("{}-{}.html", index + 1, theme_slug(&model.app_name))
}

/// Read one prompt per line, skipping blank lines and `#` comments.
pub fn read_prompts(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let prompts: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect();

    if prompts.is_empty() {
        return Err(BuildError::Input(format!(
            "no prompts found in {}",
            path.display()
        )));
    }
    Ok(prompts)
}
