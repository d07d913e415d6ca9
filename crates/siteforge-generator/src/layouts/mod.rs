//! Single-page layouts.
//!
//! Every layout is a self-contained HTML document that loads the configured
//! CSS framework and inlines the `gradient-primary` and `text-gradient`
//! utilities built from the palette.

mod full_width;
mod minimalist;
mod split_hero;

use std::{fmt, str::FromStr};

use siteforge_core::{ColorScheme, ContentModel, IndustryProfile};

use crate::{
    html::{HtmlRenderer, Result},
    sections::{self, SectionPlan},
    template::TemplateContext,
};

/// The three single-page layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    SplitHero,
    FullWidthHero,
    Minimalist,
}

impl Layout {
    /// Every layout.
    pub const ALL: [Layout; 3] = [Layout::SplitHero, Layout::FullWidthHero, Layout::Minimalist];

    /// Layout assigned to an app type. Unknown types get the split hero.
    #[must_use]
    pub fn for_app_type(app_type: &str) -> Self {
        match app_type {
            "restaurant" | "fitness" | "realestate" | "ecommerce" => Self::FullWidthHero,
            "portfolio" | "creative" => Self::Minimalist,
            _ => Self::SplitHero,
        }
    }

    /// Stable id of the layout.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SplitHero => "split-hero",
            Self::FullWidthHero => "full-width-hero",
            Self::Minimalist => "minimalist",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "split-hero" | "split" => Ok(Self::SplitHero),
            "full-width-hero" | "full-width" => Ok(Self::FullWidthHero),
            "minimalist" | "minimal" => Ok(Self::Minimalist),
            other => Err(format!(
                "unknown layout `{other}` (expected split-hero, full-width-hero or minimalist)"
            )),
        }
    }
}

/// Render `layout` for a model.
pub(crate) fn render(
    renderer: &HtmlRenderer,
    layout: Layout,
    model: &ContentModel,
    profile: &IndustryProfile,
    palette: &ColorScheme,
) -> Result<String> {
    let templates = renderer.templates();
    let plan = SectionPlan::for_profile(profile);
    let mut ctx = renderer.base_context(model, profile, palette);

    let head_ctx = TemplateContext::new()
        .with_var("extra_css", layout_css(layout, profile));
    let mut head_vars = ctx.clone();
    head_vars.extend(&head_ctx);
    ctx.insert("head", templates.render("layout.head", &head_vars)?);
    ctx.insert("scroll_script", templates.render("layout.scroll_script", &TemplateContext::new())?);

    if plan.pricing {
        ctx.insert(
            "pricing_section",
            sections::render_pricing(templates, profile.features, palette)?,
        );
    }
    if let Some(testimonial) = &plan.testimonial {
        ctx.insert("testimonial_section", sections::render_testimonial(templates, testimonial)?);
    }

    match layout {
        Layout::SplitHero => split_hero::render(templates, ctx, profile, &plan),
        Layout::FullWidthHero => full_width::render(templates, ctx, profile, &plan),
        Layout::Minimalist => minimalist::render(templates, ctx, profile, &plan),
    }
}

/// Extra rules a layout adds to the shared stylesheet.
fn layout_css(layout: Layout, profile: &IndustryProfile) -> String {
    match layout {
        Layout::FullWidthHero => full_width::hero_css(profile.images.hero),
        Layout::SplitHero | Layout::Minimalist => String::new(),
    }
}

const HEAD_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang | attr }}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ app_name }}</title>
  <meta name="description" content="{{ description | attr }}">
  <meta name="keywords" content="{{ keywords | attr }}">
  <script src="{{ css_framework_url | attr }}"></script>
  <style>
    .gradient-primary { background: linear-gradient(135deg, {{ primary | raw }}, {{ secondary | raw }}); }
    .text-gradient {
      background: linear-gradient(135deg, {{ primary | raw }}, {{ secondary | raw }});
      -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text;
    }
    html { scroll-behavior: smooth; }{{ extra_css? | raw }}
  </style>
</head>"##;

const SCROLL_SCRIPT_TEMPLATE: &str = r##"
  <script>
    document.querySelectorAll('a[href^="#"]').forEach(anchor => {
      anchor.addEventListener('click', function (e) {
        e.preventDefault();
        const target = document.querySelector(this.getAttribute('href'));
        if (target) target.scrollIntoView({ behavior: 'smooth', block: 'start' });
      });
    });
  </script>"##;

/// Every layout template, keyed by registry name.
pub(crate) static TEMPLATES: &[(&str, &str)] = &[
    ("layout.head", HEAD_TEMPLATE),
    ("layout.scroll_script", SCROLL_SCRIPT_TEMPLATE),
    ("section.pricing", sections::PRICING_TEMPLATE),
    ("section.pricing_tier", sections::PRICING_TIER_TEMPLATE),
    ("section.pricing_tier_highlighted", sections::PRICING_TIER_HIGHLIGHTED_TEMPLATE),
    ("section.pricing_item", sections::PRICING_ITEM_TEMPLATE),
    ("section.testimonial", sections::TESTIMONIAL_TEMPLATE),
    ("split_hero", split_hero::PAGE_TEMPLATE),
    ("split_hero.feature", split_hero::FEATURE_TEMPLATE),
    ("split_hero.stats", split_hero::STATS_TEMPLATE),
    ("split_hero.stat", split_hero::STAT_TEMPLATE),
    ("full_width", full_width::PAGE_TEMPLATE),
    ("full_width.feature", full_width::FEATURE_TEMPLATE),
    ("full_width.gallery_item", full_width::GALLERY_ITEM_TEMPLATE),
    ("full_width.stats", full_width::STATS_TEMPLATE),
    ("minimalist", minimalist::PAGE_TEMPLATE),
    ("minimalist.service", minimalist::SERVICE_TEMPLATE),
    ("minimalist.work_item", minimalist::WORK_ITEM_TEMPLATE),
    ("minimalist.stats", minimalist::STATS_TEMPLATE),
    ("minimalist.stat", minimalist::STAT_TEMPLATE),
];

#[cfg(test)]
mod tests {
    use siteforge_core::PROFILES;

    use super::*;

    #[test]
    fn test_layout_table() {
        for app_type in ["saas", "agency", "healthcare"] {
            assert_eq!(Layout::for_app_type(app_type), Layout::SplitHero);
        }
        for app_type in ["restaurant", "fitness", "realestate", "ecommerce"] {
            assert_eq!(Layout::for_app_type(app_type), Layout::FullWidthHero);
        }
        for app_type in ["portfolio", "creative"] {
            assert_eq!(Layout::for_app_type(app_type), Layout::Minimalist);
        }
        assert_eq!(Layout::for_app_type("bakery"), Layout::SplitHero);
        assert_eq!(Layout::for_app_type(""), Layout::SplitHero);
    }

    #[test]
    fn test_parse_layout() {
        assert_eq!("split-hero".parse::<Layout>(), Ok(Layout::SplitHero));
        assert_eq!("Full-Width".parse::<Layout>(), Ok(Layout::FullWidthHero));
        assert_eq!("minimalist".parse::<Layout>(), Ok(Layout::Minimalist));
        assert!("brutalist".parse::<Layout>().is_err());
        for layout in Layout::ALL {
            assert_eq!(layout.to_string().parse::<Layout>(), Ok(layout));
        }
    }

    #[test]
    fn test_every_profile_renders_every_layout() {
        let renderer = HtmlRenderer::default();
        for profile in PROFILES {
            let model = ContentModel::with_profile("", profile);
            for layout in Layout::ALL {
                let html = renderer
                    .render_layout(layout, &model, model.palette())
                    .unwrap_or_else(|e| panic!("{} / {layout}: {e}", profile.id));
                assert!(html.starts_with("<!DOCTYPE html>"));
                assert!(html.trim_end().ends_with("</html>"));
                assert!(html.contains(".text-gradient"));
                assert!(!html.contains("{{"), "{} / {layout} left a placeholder", profile.id);
            }
        }
    }
}
