//! WordPress theme emitter.
//!
//! [`WordPressTheme::emit`] renders a fixed set of theme files into a
//! [`SiteFileMap`]. Identifiers derived from the theme name are sanitized
//! once, when the theme is created:
//!
//! - the slug and text domain only contain `[a-z0-9-]`
//! - the PHP function prefix only contains `[a-z0-9_]` and never starts with
//!   a digit

mod assets;
mod templates;

use siteforge_core::{ColorScheme, ContentModel, config::WordPressConfig, palette};
use tracing::{debug, info};

use crate::{
    escape::{self, domain_label},
    file_map::{PLACEHOLDER, SiteFileMap},
    template::{Result, TemplateContext, TemplateRegistry},
};

/// Content of the screenshot slot, which is never rendered.
pub const SCREENSHOT_PLACEHOLDER: &str = PLACEHOLDER;

const SCREENSHOT: &str = "screenshot.png";

/// Every file of an emitted theme, in emission order.
pub const REQUIRED_FILES: [&str; 29] = [
    "style.css",
    "index.php",
    "header.php",
    "footer.php",
    "functions.php",
    "page.php",
    "single.php",
    "sidebar.php",
    "searchform.php",
    "comments.php",
    "404.php",
    "front-page.php",
    "page-about.php",
    "page-services.php",
    "page-contact.php",
    "page-portfolio.php",
    "page-pricing.php",
    "page-team.php",
    SCREENSHOT,
    "README.md",
    "sample-content.xml",
    "assets/css/custom.css",
    "assets/js/script.js",
    "template-parts/content.php",
    "template-parts/content-page.php",
    "inc/custom-header.php",
    "inc/customizer.php",
    "inc/template-functions.php",
    "inc/sample-data.php",
];

/// Theme templates keyed by `wp/<path>`.
pub(crate) static TEMPLATES: &[(&str, &str)] = &[
    ("wp/style.css", assets::STYLE_CSS),
    ("wp/index.php", templates::INDEX_PHP),
    ("wp/header.php", templates::HEADER_PHP),
    ("wp/footer.php", templates::FOOTER_PHP),
    ("wp/functions.php", templates::FUNCTIONS_PHP),
    ("wp/page.php", templates::PAGE_PHP),
    ("wp/single.php", templates::SINGLE_PHP),
    ("wp/sidebar.php", templates::SIDEBAR_PHP),
    ("wp/searchform.php", templates::SEARCHFORM_PHP),
    ("wp/comments.php", templates::COMMENTS_PHP),
    ("wp/404.php", templates::NOT_FOUND_PHP),
    ("wp/front-page.php", templates::FRONT_PAGE_PHP),
    ("wp/page-about.php", templates::PAGE_ABOUT_PHP),
    ("wp/page-services.php", templates::PAGE_SERVICES_PHP),
    ("wp/page-contact.php", templates::PAGE_CONTACT_PHP),
    ("wp/page-portfolio.php", templates::PAGE_PORTFOLIO_PHP),
    ("wp/page-pricing.php", templates::PAGE_PRICING_PHP),
    ("wp/page-team.php", templates::PAGE_TEAM_PHP),
    ("wp/README.md", assets::README_MD),
    ("wp/sample-content.xml", assets::SAMPLE_CONTENT_XML),
    ("wp/assets/css/custom.css", assets::CUSTOM_CSS),
    ("wp/assets/js/script.js", assets::SCRIPT_JS),
    ("wp/template-parts/content.php", templates::CONTENT_PHP),
    ("wp/template-parts/content-page.php", templates::CONTENT_PAGE_PHP),
    ("wp/inc/custom-header.php", templates::CUSTOM_HEADER_PHP),
    ("wp/inc/customizer.php", templates::CUSTOMIZER_PHP),
    ("wp/inc/template-functions.php", templates::TEMPLATE_FUNCTIONS_PHP),
    ("wp/inc/sample-data.php", templates::SAMPLE_DATA_PHP),
];

/// User-facing text of a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCustomization {
    pub title: String,
    pub subtitle: String,
    pub company_name: String,
    pub description: String,
    /// Palette id; unknown ids fall back to the default palette.
    pub color_scheme: String,
}

impl ThemeCustomization {
    /// Derive theme text from a content model and its profile's hero copy.
    #[must_use]
    pub fn from_model(model: &ContentModel) -> Self {
        let hero = &model.profile().hero;
        Self {
            title: hero.headline.to_string(),
            subtitle: hero.subheadline.to_string(),
            company_name: model.app_name.clone(),
            description: model.description.clone(),
            color_scheme: model.color_scheme.to_string(),
        }
    }
}

/// A theme ready to be emitted.
#[derive(Debug, Clone)]
pub struct WordPressTheme {
    name: String,
    slug: String,
    prefix: String,
    customization: ThemeCustomization,
    palette: &'static ColorScheme,
    category: String,
    author: String,
    author_uri: String,
    version: String,
    phone: String,
}

impl WordPressTheme {
    /// Create a theme with the default metadata.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        customization: ThemeCustomization,
        category: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let slug = theme_slug(&name);
        let prefix = function_prefix(&slug);
        let config = WordPressConfig::default();
        Self {
            palette: palette(&customization.color_scheme),
            name,
            slug,
            prefix,
            customization,
            category: category.into(),
            author: config.author,
            author_uri: config.author_uri,
            version: config.theme_version,
            phone: "(555) 123-4567".to_string(),
        }
    }

    /// Take author and version metadata from configuration.
    #[must_use]
    pub fn with_config(mut self, config: &WordPressConfig) -> Self {
        self.author = config.author.clone();
        self.author_uri = config.author_uri.clone();
        self.version = config.theme_version.clone();
        self
    }

    /// Set the phone number shown on the contact page.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory name and text domain.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Prefix of every PHP function the theme declares.
    #[must_use]
    pub fn function_prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn palette(&self) -> &'static ColorScheme {
        self.palette
    }

    /// Render every theme file with the built-in templates.
    pub fn emit(&self) -> Result<SiteFileMap> {
        self.emit_with(&TemplateRegistry::new())
    }

    /// Render every theme file with `templates`.
    pub fn emit_with(&self, templates: &TemplateRegistry) -> Result<SiteFileMap> {
        let ctx = self.context();
        let mut files = SiteFileMap::new();

        for path in REQUIRED_FILES {
            if path == SCREENSHOT {
                files.insert(path, SCREENSHOT_PLACEHOLDER);
                continue;
            }
            let content = templates.render(&format!("wp/{path}"), &ctx)?;
            debug!(path, bytes = content.len(), "rendered theme file");
            files.insert(path, content);
        }

        info!(theme = %self.slug, files = files.len(), "emitted WordPress theme");
        Ok(files)
    }

    fn context(&self) -> TemplateContext {
        let custom = &self.customization;
        TemplateContext::new()
            .with_var("theme_name", &self.name)
            .with_var("text_domain", &self.slug)
            .with_var("prefix", &self.prefix)
            .with_var("const_prefix", self.prefix.to_uppercase())
            .with_var("package", package_name(&custom.company_name, &self.prefix))
            .with_var("author", &self.author)
            .with_var("author_uri", &self.author_uri)
            .with_var("version", &self.version)
            .with_var("category", &self.category)
            .with_var("title", &custom.title)
            .with_var("subtitle", &custom.subtitle)
            .with_var("subtitle_html", escape::html(&custom.subtitle))
            .with_var("company_name", &custom.company_name)
            .with_var("company_name_html", escape::html(&custom.company_name))
            .with_var(
                "contact_email",
                format!("info@{}.com", domain_label(&custom.company_name)),
            )
            .with_var("phone", &self.phone)
            .with_var("description", &custom.description)
            .with_var("primary", self.palette.primary)
            .with_var("secondary", self.palette.secondary)
            .with_var("accent", self.palette.accent)
            .with_var("background", self.palette.background)
            .with_var("text", self.palette.text)
    }
}

/// Lowercase `name`, collapsing every run of other characters into `-`.
#[must_use]
pub fn theme_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("siteforge-theme");
    }
    slug
}

/// PHP identifier prefix for a theme slug.
#[must_use]
pub fn function_prefix(slug: &str) -> String {
    let prefix = slug.replace('-', "_");
    if prefix.starts_with(|c: char| c.is_ascii_digit()) {
        format!("theme_{prefix}")
    } else {
        prefix
    }
}

/// `@package` tag: the company name as a `Word_Word` identifier.
fn package_name(company_name: &str, fallback: &str) -> String {
    let package = company_name
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    if package.is_empty() {
        fallback.to_string()
    } else {
        package
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customization() -> ThemeCustomization {
        ThemeCustomization {
            title: "Welcome to Acme".to_string(),
            subtitle: "We build things".to_string(),
            company_name: "Acme Corp".to_string(),
            description: "A theme for Acme".to_string(),
            color_scheme: "purple".to_string(),
        }
    }

    #[test]
    fn test_theme_slug() {
        assert_eq!(theme_slug("My Cool Theme"), "my-cool-theme");
        assert_eq!(theme_slug("  Café & Bar!! "), "caf-bar");
        assert_eq!(theme_slug("***"), "siteforge-theme");
    }

    #[test]
    fn test_function_prefix() {
        assert_eq!(function_prefix("my-cool-theme"), "my_cool_theme");
        assert_eq!(function_prefix("3d-studio"), "theme_3d_studio");
    }

    #[test]
    fn test_package_name() {
        assert_eq!(package_name("Acme Corp", "x"), "Acme_Corp");
        assert_eq!(package_name("O'Brien & Sons", "x"), "OBrien_Sons");
        assert_eq!(package_name("!!", "fallback"), "fallback");
    }

    #[test]
    fn test_emit_contains_every_required_file() {
        let files = WordPressTheme::new("Acme Theme", customization(), "business")
            .emit()
            .unwrap();

        assert_eq!(files.len(), REQUIRED_FILES.len());
        assert_eq!(files.paths().collect::<Vec<_>>(), REQUIRED_FILES);
        assert_eq!(files.get("screenshot.png"), Some(SCREENSHOT_PLACEHOLDER));
    }

    #[test]
    fn test_every_required_file_has_a_template() {
        let registry = TemplateRegistry::new();
        for path in REQUIRED_FILES.iter().filter(|p| **p != SCREENSHOT) {
            assert!(registry.get(&format!("wp/{path}")).is_some(), "{path}");
        }
        assert_eq!(TEMPLATES.len(), REQUIRED_FILES.len() - 1);
    }

    #[test]
    fn test_style_header() {
        let files = WordPressTheme::new("Acme Theme", customization(), "business")
            .emit()
            .unwrap();
        let style = files.get("style.css").unwrap();

        assert!(style.contains("Theme Name: Acme Theme\n"));
        assert!(style.contains("Text Domain: acme-theme\n"));
        assert!(style.contains("Author: SiteForge\n"));
        assert!(style.contains("Version: 1.0.0\n"));
    }

    #[test]
    fn test_style_header_cannot_be_closed() {
        let mut custom = customization();
        custom.description = "line one\nline two */ body { display: none }".to_string();
        let files = WordPressTheme::new("Acme", custom, "business").emit().unwrap();
        let style = files.get("style.css").unwrap();

        assert!(style.contains("Description: line one line two * / body { display: none }\n"));
        let header_end = style.find("*/").unwrap();
        assert!(style[..header_end].contains("This theme, like WordPress"));
    }

    #[test]
    fn test_php_identifiers_are_valid() {
        let files = WordPressTheme::new("My Cool Theme", customization(), "business")
            .emit()
            .unwrap();
        let functions = files.get("functions.php").unwrap();

        assert!(functions.contains("function my_cool_theme_setup()"));
        assert!(functions.contains("add_action( 'after_setup_theme', 'my_cool_theme_setup' );"));
        assert!(functions.contains("define( 'MY_COOL_THEME_VERSION', '1.0.0' );"));
        assert!(!functions.contains("function my-cool-theme"));
        assert!(functions.contains("require get_template_directory() . '/inc/custom-header.php';"));
        assert!(functions.contains("require get_template_directory() . '/inc/sample-data.php';"));
    }

    #[test]
    fn test_php_single_quoted_text_is_escaped() {
        let mut custom = customization();
        custom.title = r"It's a \ test".to_string();
        let files = WordPressTheme::new("Acme", custom, "business").emit().unwrap();

        let index = files.get("index.php").unwrap();
        assert!(index.contains(r"esc_html__( 'It\'s a \\ test', 'acme' )"));
        let front = files.get("front-page.php").unwrap();
        assert!(front.contains(r"get_theme_mod( 'hero_title', 'It\'s a \\ test' )"));
    }

    #[test]
    fn test_markup_text_is_html_escaped() {
        let mut custom = customization();
        custom.company_name = "Tom & <Jerry>".to_string();
        let files = WordPressTheme::new("Acme", custom, "business").emit().unwrap();

        let about = files.get("page-about.php").unwrap();
        assert!(about.contains("About Tom &amp; &lt;Jerry&gt;</h1>"));
        let team = files.get("page-team.php").unwrap();
        assert!(team.contains("behind Tom &amp; &lt;Jerry&gt;"));
    }

    #[test]
    fn test_sample_pages_escape_company_markup() {
        let mut custom = customization();
        custom.company_name = "<img src=x onerror=alert(1)>".to_string();
        let files = WordPressTheme::new("Acme", custom, "business").emit().unwrap();
        let sample = files.get("inc/sample-data.php").unwrap();

        assert!(sample.contains("Learn more about &lt;img src=x onerror=alert(1)&gt; and our mission."));
        assert!(!sample.contains("<img"));
    }

    #[test]
    fn test_pricing_follows_customizer_color() {
        let theme = WordPressTheme::new("Acme", customization(), "business");
        let files = theme.emit().unwrap();
        let pricing = files.get("page-pricing.php").unwrap();

        assert!(pricing.contains(&format!(
            "$primary_color = get_theme_mod( 'primary_color', '{}' );",
            theme.palette().primary
        )));
    }

    #[test]
    fn test_readme_is_literal_markdown() {
        let mut custom = customization();
        custom.company_name = "Tom & Jerry".to_string();
        custom.description = "Best *deals*\n# today".to_string();
        let files = WordPressTheme::new("Acme", custom, "business").emit().unwrap();
        let readme = files.get("README.md").unwrap();

        assert!(readme.contains("designed for Tom & Jerry."));
        assert!(!readme.contains("&amp;"));
        assert!(readme.contains("Best \\*deals\\* \\# today"));
    }

    #[test]
    fn test_sample_content_is_well_formed() {
        let mut custom = customization();
        custom.company_name = "R&D <Labs>".to_string();
        custom.subtitle = "ends with ]]> here".to_string();
        let files = WordPressTheme::new("Acme", custom, "news]]>letters").emit().unwrap();
        let xml = files.get("sample-content.xml").unwrap();

        assert!(xml.contains("<title>R&amp;D &lt;Labs&gt;</title>"));
        assert!(xml.contains("<p>ends with ]]&gt; here</p>"));
        assert!(xml.contains("<![CDATA[news]]]]><![CDATA[>letters]]>"));
        assert!(xml.contains("nicename=\"news]]&gt;letters\""));
        assert!(xml.contains("xmlns:wp="));
    }

    #[test]
    fn test_colors_flow_into_assets() {
        let theme = WordPressTheme::new("Acme", customization(), "business");
        let files = theme.emit().unwrap();

        let custom_css = files.get("assets/css/custom.css").unwrap();
        assert!(custom_css.contains(&format!("--primary-color: {};", theme.palette().primary)));
        let customizer = files.get("inc/customizer.php").unwrap();
        assert!(customizer.contains(&format!("=> '{}',", theme.palette().primary)));
    }

    #[test]
    fn test_unknown_color_scheme_falls_back() {
        let mut custom = customization();
        custom.color_scheme = "neon".to_string();
        let theme = WordPressTheme::new("Acme", custom, "business");
        assert_eq!(theme.palette().id, "blue");
    }

    #[test]
    fn test_with_config() {
        let config = WordPressConfig {
            author: "Jane".to_string(),
            author_uri: "https://jane.dev".to_string(),
            theme_version: "2.3.4".to_string(),
            default_category: "blog".to_string(),
        };
        let files = WordPressTheme::new("Acme", customization(), "business")
            .with_config(&config)
            .with_phone("+44 20 7946 0000")
            .emit()
            .unwrap();

        let style = files.get("style.css").unwrap();
        assert!(style.contains("Author: Jane\n"));
        assert!(style.contains("Version: 2.3.4\n"));
        let contact = files.get("page-contact.php").unwrap();
        assert!(contact.contains("+44 20 7946 0000"));
        assert!(contact.contains("mailto:info@acmecorp.com"));
    }

    #[test]
    fn test_from_model() {
        let model = ContentModel::from_prompt("a restaurant called Chez Nous");
        let custom = ThemeCustomization::from_model(&model);

        assert_eq!(custom.company_name, "Chez Nous");
        assert_eq!(custom.color_scheme, "orange");
        assert_eq!(custom.title, model.profile().hero.headline);
    }
}
