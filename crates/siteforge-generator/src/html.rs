//! HTML rendering of a content model.
//!
//! [`HtmlRenderer`] owns the template registry and the render options and
//! exposes one entry point per output variant.

use siteforge_core::{
    ColorScheme, ContentModel, IndustryProfile, config::RenderConfig,
};
use thiserror::Error;
use tracing::debug;

use crate::{
    escape::domain_label,
    gallery::{self, GalleryTemplate},
    layouts::{self, Layout},
    multipage,
    sections::initial,
    template::{Template, TemplateContext, TemplateError, TemplateRegistry},
    wordpress::ThemeCustomization,
};

/// HTML generation errors.
#[derive(Debug, Error)]
pub enum HtmlError {
    /// Template error.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),
}

/// Result type for HTML generation.
pub type Result<T> = std::result::Result<T, HtmlError>;

/// Values that do not come from the content model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub css_framework_url: String,
    pub lang: String,
    pub year: i32,
    pub phone: String,
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            css_framework_url: config.css_framework_url.clone(),
            lang: config.lang.clone(),
            year: config.year(),
            phone: config.contact_phone.clone(),
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&RenderConfig::default())
    }
}

/// Renders content models into complete HTML documents.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    templates: TemplateRegistry,
    options: RenderOptions,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl HtmlRenderer {
    /// Create a renderer with the built-in templates.
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        Self {
            templates: TemplateRegistry::new(),
            options,
        }
    }

    /// Override a built-in template.
    pub fn register_template(&mut self, template: Template) {
        debug!(
            name = template.name(),
            variables = ?template.variables().collect::<Vec<_>>(),
            "registered template override"
        );
        self.templates.register(template);
    }

    /// The render options in use.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub(crate) fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// Render the single-page layout assigned to the model's profile.
    pub fn render(&self, model: &ContentModel, palette: &ColorScheme) -> Result<String> {
        self.render_layout(Layout::for_app_type(model.app_type), model, palette)
    }

    /// Render a specific single-page layout.
    pub fn render_layout(
        &self,
        layout: Layout,
        model: &ContentModel,
        palette: &ColorScheme,
    ) -> Result<String> {
        self.render_with_profile(layout, model, model.profile(), palette)
    }

    /// Render a layout against an explicit profile.
    pub fn render_with_profile(
        &self,
        layout: Layout,
        model: &ContentModel,
        profile: &IndustryProfile,
        palette: &ColorScheme,
    ) -> Result<String> {
        debug!(
            layout = %layout,
            app_type = model.app_type,
            palette = palette.id,
            "rendering single-page layout"
        );
        layouts::render(self, layout, model, profile, palette)
    }

    /// Render the four-page bundle with its client-side router.
    pub fn render_multipage(&self, model: &ContentModel, palette: &ColorScheme) -> Result<String> {
        debug!(app_type = model.app_type, palette = palette.id, "rendering multi-page bundle");
        multipage::render(self, model, model.profile(), palette)
    }

    /// Render a showcase page from theme text.
    pub fn render_gallery(
        &self,
        template: GalleryTemplate,
        custom: &ThemeCustomization,
    ) -> Result<String> {
        debug!(template = %template, company = %custom.company_name, "rendering showcase page");
        gallery::render(self, template, custom)
    }

    /// Variables shared by every document template.
    pub(crate) fn base_context(
        &self,
        model: &ContentModel,
        profile: &IndustryProfile,
        palette: &ColorScheme,
    ) -> TemplateContext {
        let domain = domain_label(&model.app_name);
        TemplateContext::new()
            .with_var("lang", &self.options.lang)
            .with_var("css_framework_url", &self.options.css_framework_url)
            .with_var("year", self.options.year.to_string())
            .with_var("phone", &self.options.phone)
            .with_var("phone_href", phone_href(&self.options.phone))
            .with_var("email", format!("hello@{domain}.com"))
            .with_var("contact_email", format!("contact@{domain}.com"))
            .with_var("app_name", &model.app_name)
            .with_var("app_initial", initial(&model.app_name))
            .with_var("description", &model.description)
            .with_var("keywords", model.features.join(", "))
            .with_var("primary", palette.primary)
            .with_var("secondary", palette.secondary)
            .with_var("accent", palette.accent)
            .with_var("background", palette.background)
            .with_var("text", palette.text)
            .with_var("headline", profile.hero.headline)
            .with_var("subheadline", profile.hero.subheadline)
            .with_var("cta_primary", profile.hero.cta_primary)
            .with_var("cta_secondary", profile.hero.cta_secondary)
            .with_var("hero_image", profile.images.hero)
            .with_var("about_image", profile.images.about)
    }
}

/// `tel:` target for a display phone number.
fn phone_href(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

#[cfg(test)]
mod tests {
    use siteforge_core::palette;

    use super::*;

    fn options() -> RenderOptions {
        RenderOptions {
            css_framework_url: "https://cdn.tailwindcss.com".to_string(),
            lang: "en".to_string(),
            year: 2031,
            phone: "+1 (555) 123-4567".to_string(),
        }
    }

    #[test]
    fn test_phone_href() {
        assert_eq!(phone_href("+1 (555) 123-4567"), "+15551234567");
    }

    #[test]
    fn test_base_context() {
        let renderer = HtmlRenderer::new(options());
        let model = ContentModel::from_prompt("a bistro called Chez Nous");
        let ctx = renderer.base_context(&model, model.profile(), model.palette());

        assert_eq!(ctx.get("app_name"), Some("Chez Nous"));
        assert_eq!(ctx.get("app_initial"), Some("C"));
        assert_eq!(ctx.get("email"), Some("hello@cheznous.com"));
        assert_eq!(ctx.get("year"), Some("2031"));
        assert_eq!(ctx.get("primary"), Some(palette("orange").primary));
        assert_eq!(ctx.get("cta_primary"), Some("Reserve Table"));
    }

    #[test]
    fn test_render_picks_assigned_layout() {
        let renderer = HtmlRenderer::new(options());
        let model = ContentModel::from_prompt("a bistro called Chez Nous");
        let html = renderer.render(&model, model.palette()).unwrap();
        // Restaurants get the full-width hero.
        assert!(html.contains("hero-bg"));
        assert!(html.contains("&copy; 2031 Chez Nous"));
    }

    #[test]
    fn test_register_template_overrides_builtin() {
        let mut renderer = HtmlRenderer::new(options());
        renderer.register_template(
            Template::compile("multipage.footer", "<footer>Custom {{ app_name }}</footer>").unwrap(),
        );
        let model = ContentModel::from_prompt("a bistro called Chez Nous");

        let html = renderer.render_multipage(&model, model.palette()).unwrap();
        assert!(html.contains("<footer>Custom Chez Nous</footer>"));
    }

    #[test]
    fn test_options_from_config() {
        let config = RenderConfig {
            copyright_year: Some(2029),
            ..RenderConfig::default()
        };
        let opts = RenderOptions::from(&config);
        assert_eq!(opts.year, 2029);
        assert_eq!(opts.lang, "en");
    }
}
