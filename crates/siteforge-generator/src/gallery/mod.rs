//! Showcase templates rendered straight from theme text.
//!
//! Unlike the layouts, a showcase page does not read an industry profile:
//! its copy comes from a [`ThemeCustomization`] and its repeated cards from
//! fixed tables. The palette named by the customization fills the `--brand-*`
//! custom properties the pages use for accents.

mod templates;

use std::{fmt, str::FromStr};

use siteforge_core::{ColorScheme, palette};
use tracing::debug;

use crate::{
    html::{HtmlRenderer, Result},
    template::{TemplateContext, TemplateRegistry},
    wordpress::ThemeCustomization,
};

/// The four showcase templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GalleryTemplate {
    AiPlatform,
    LuxuryFashion,
    FineDining,
    RealEstate,
}

impl GalleryTemplate {
    pub const ALL: [GalleryTemplate; 4] = [
        GalleryTemplate::AiPlatform,
        GalleryTemplate::LuxuryFashion,
        GalleryTemplate::FineDining,
        GalleryTemplate::RealEstate,
    ];

    /// Showcase matching an app type. Types without one get the AI platform.
    #[must_use]
    pub fn for_app_type(app_type: &str) -> Self {
        match app_type {
            "restaurant" => Self::FineDining,
            "realestate" => Self::RealEstate,
            "ecommerce" | "creative" => Self::LuxuryFashion,
            _ => Self::AiPlatform,
        }
    }

    /// Stable id, also the registry name suffix.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AiPlatform => "ai-platform",
            Self::LuxuryFashion => "luxury-fashion",
            Self::FineDining => "fine-dining",
            Self::RealEstate => "real-estate",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AiPlatform => "AI Platform",
            Self::LuxuryFashion => "Luxury Fashion",
            Self::FineDining => "Fine Dining",
            Self::RealEstate => "Real Estate",
        }
    }

    /// Rules placed ahead of the palette properties.
    fn extra_css(self) -> &'static str {
        match self {
            Self::AiPlatform => templates::AI_PLATFORM_CSS,
            Self::LuxuryFashion => templates::LUXURY_FASHION_CSS,
            Self::FineDining | Self::RealEstate => "",
        }
    }

    /// Closing line of the footer.
    fn tagline(self) -> &'static str {
        match self {
            Self::AiPlatform => "Powered by Advanced AI.",
            Self::LuxuryFashion => "Luxury Fashion House.",
            Self::FineDining => "Fine Dining Excellence.",
            Self::RealEstate => "Your Trusted Real Estate Partner.",
        }
    }
}

impl fmt::Display for GalleryTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GalleryTemplate {
    type Err = String;

    /// Accepts the id or the label, ignoring case.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| {
                t.as_str().eq_ignore_ascii_case(wanted) || t.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| {
                format!(
                    "unknown gallery template `{wanted}` (expected ai-platform, luxury-fashion, fine-dining or real-estate)"
                )
            })
    }
}

const AI_FEATURES: [&str; 6] = [
    "Neural Processing",
    "Machine Learning",
    "Deep Analytics",
    "Real-time Insights",
    "Auto Scaling",
    "Secure Infrastructure",
];

const PARTNER_LOGOS: usize = 4;

const FASHION_COLLECTIONS: [&str; 6] = [
    "Spring Elegance",
    "Summer Luxe",
    "Autumn Grace",
    "Winter Sophistication",
    "Evening Gowns",
    "Designer Accessories",
];

const MENU_COURSES: [&str; 3] = ["Appetizers", "Main Course", "Desserts"];

const DISHES_PER_COURSE: u32 = 3;

const PROPERTY_COUNT: u32 = 6;

/// Price of the `n`th dish of a course, in dollars.
fn dish_price(n: u32) -> u32 {
    45 + n * 10
}

/// Asking price of the `n`th featured property, in thousands of dollars.
fn property_price(n: u32) -> u32 {
    500 + n * 50
}

/// Render `template` with the text and palette of `custom`.
pub(crate) fn render(
    renderer: &HtmlRenderer,
    template: GalleryTemplate,
    custom: &ThemeCustomization,
) -> Result<String> {
    let templates = renderer.templates();
    let palette = palette(&custom.color_scheme);
    let mut ctx = context(renderer, template, custom, palette);
    ctx.insert("head", templates.render("gallery.head", &ctx)?);

    match template {
        GalleryTemplate::AiPlatform => {
            let features = AI_FEATURES.iter().enumerate().map(|(i, title)| {
                TemplateContext::new()
                    .with_var("number", (i + 1).to_string())
                    .with_var("title", *title)
            });
            ctx.insert("features", repeat(templates, "gallery.ai_feature", features)?);

            let logos = (1..=PARTNER_LOGOS)
                .map(|i| TemplateContext::new().with_var("number", i.to_string()));
            ctx.insert("logos", repeat(templates, "gallery.ai_logo", logos)?);
        }
        GalleryTemplate::LuxuryFashion => {
            let items = FASHION_COLLECTIONS
                .iter()
                .map(|name| TemplateContext::new().with_var("name", *name));
            ctx.insert("collection", repeat(templates, "gallery.fashion_item", items)?);
        }
        GalleryTemplate::FineDining => {
            let mut courses = String::new();
            for course in MENU_COURSES {
                let dishes = (1..=DISHES_PER_COURSE).map(|n| {
                    TemplateContext::new()
                        .with_var("number", n.to_string())
                        .with_var("price", dish_price(n).to_string())
                });
                let item = TemplateContext::new()
                    .with_var("course", course)
                    .with_var("dishes", repeat(templates, "gallery.dining_dish", dishes)?);
                courses.push_str(&templates.render("gallery.dining_course", &item)?);
            }
            ctx.insert("courses", courses);
        }
        GalleryTemplate::RealEstate => {
            let properties = (1..=PROPERTY_COUNT).map(|n| {
                TemplateContext::new()
                    .with_var("number", n.to_string())
                    .with_var("price", format!("{},000", property_price(n)))
            });
            ctx.insert("properties", repeat(templates, "gallery.property", properties)?);
        }
    }

    debug!(template = %template, palette = palette.id, "rendered gallery sections");
    Ok(templates.render(&format!("gallery.{template}"), &ctx)?)
}

fn context(
    renderer: &HtmlRenderer,
    template: GalleryTemplate,
    custom: &ThemeCustomization,
    palette: &ColorScheme,
) -> TemplateContext {
    let options = renderer.options();
    TemplateContext::new()
        .with_var("lang", &options.lang)
        .with_var("css_framework_url", &options.css_framework_url)
        .with_var("year", options.year.to_string())
        .with_var("title", &custom.title)
        .with_var("subtitle", &custom.subtitle)
        .with_var("company_name", &custom.company_name)
        .with_var("description", &custom.description)
        .with_var("tagline", template.tagline())
        .with_var("extra_css", template.extra_css())
        .with_var("primary", palette.primary)
        .with_var("secondary", palette.secondary)
        .with_var("accent", palette.accent)
        .with_var("background", palette.background)
        .with_var("text", palette.text)
}

/// Render `name` once per item context and concatenate the results.
fn repeat(
    templates: &TemplateRegistry,
    name: &str,
    items: impl IntoIterator<Item = TemplateContext>,
) -> Result<String> {
    let mut out = String::new();
    for item in items {
        out.push_str(&templates.render(name, &item)?);
    }
    Ok(out)
}

/// Every showcase template, keyed by registry name.
pub(crate) static TEMPLATES: &[(&str, &str)] = &[
    ("gallery.head", templates::HEAD_TEMPLATE),
    ("gallery.ai-platform", templates::AI_PLATFORM_TEMPLATE),
    ("gallery.ai_feature", templates::AI_FEATURE_TEMPLATE),
    ("gallery.ai_logo", templates::AI_LOGO_TEMPLATE),
    ("gallery.luxury-fashion", templates::LUXURY_FASHION_TEMPLATE),
    ("gallery.fashion_item", templates::FASHION_ITEM_TEMPLATE),
    ("gallery.fine-dining", templates::FINE_DINING_TEMPLATE),
    ("gallery.dining_course", templates::DINING_COURSE_TEMPLATE),
    ("gallery.dining_dish", templates::DINING_DISH_TEMPLATE),
    ("gallery.real-estate", templates::REAL_ESTATE_TEMPLATE),
    ("gallery.property", templates::PROPERTY_TEMPLATE),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::RenderOptions;

    fn customization() -> ThemeCustomization {
        ThemeCustomization {
            title: "Think Faster".to_string(),
            subtitle: "Models that ship".to_string(),
            company_name: "Nova Labs".to_string(),
            description: "Applied AI".to_string(),
            color_scheme: "green".to_string(),
        }
    }

    fn renderer() -> HtmlRenderer {
        HtmlRenderer::new(RenderOptions {
            year: 2031,
            ..RenderOptions::default()
        })
    }

    #[test]
    fn test_parse_gallery_template() {
        assert_eq!("fine-dining".parse::<GalleryTemplate>(), Ok(GalleryTemplate::FineDining));
        assert_eq!("Luxury Fashion".parse::<GalleryTemplate>(), Ok(GalleryTemplate::LuxuryFashion));
        assert_eq!(" AI-PLATFORM ".parse::<GalleryTemplate>(), Ok(GalleryTemplate::AiPlatform));
        assert!("brutalist".parse::<GalleryTemplate>().is_err());
        for template in GalleryTemplate::ALL {
            assert_eq!(template.to_string().parse::<GalleryTemplate>(), Ok(template));
        }
    }

    #[test]
    fn test_for_app_type() {
        assert_eq!(GalleryTemplate::for_app_type("saas"), GalleryTemplate::AiPlatform);
        assert_eq!(GalleryTemplate::for_app_type("restaurant"), GalleryTemplate::FineDining);
        assert_eq!(GalleryTemplate::for_app_type("realestate"), GalleryTemplate::RealEstate);
        assert_eq!(GalleryTemplate::for_app_type("bakery"), GalleryTemplate::AiPlatform);
    }

    #[test]
    fn test_every_template_is_registered() {
        let registry = TemplateRegistry::new();
        for template in GalleryTemplate::ALL {
            assert!(registry.get(&format!("gallery.{template}")).is_some(), "{template}");
        }
    }

    #[test]
    fn test_ai_platform_page() {
        let html = renderer()
            .render_gallery(GalleryTemplate::AiPlatform, &customization())
            .unwrap();

        assert!(html.contains("<title>Think Faster</title>"));
        assert!(html.contains("Models that ship"));
        for feature in AI_FEATURES {
            assert!(html.contains(feature), "missing {feature}");
        }
        assert!(html.contains("LOGO 4") && !html.contains("LOGO 5"));
        assert!(html.contains(&format!("--brand-primary: {};", palette("green").primary)));
        assert!(html.contains("&copy; 2031 Nova Labs. Powered by Advanced AI."));
    }

    #[test]
    fn test_fine_dining_menu() {
        let html = renderer()
            .render_gallery(GalleryTemplate::FineDining, &customization())
            .unwrap();

        for course in MENU_COURSES {
            assert!(html.contains(course));
        }
        assert_eq!(html.matches("Signature Dish 3").count(), MENU_COURSES.len());
        assert!(html.contains("$55") && html.contains("$75"));
        assert!(!html.contains("$85"));
    }

    #[test]
    fn test_real_estate_listings() {
        let html = renderer()
            .render_gallery(GalleryTemplate::RealEstate, &customization())
            .unwrap();

        assert!(html.contains("$550,000"));
        assert!(html.contains("$800,000"));
        assert_eq!(html.matches("For Sale").count(), PROPERTY_COUNT as usize);
        assert!(html.contains("Your Trusted Real Estate Partner."));
    }

    #[test]
    fn test_luxury_fashion_collection() {
        let html = renderer()
            .render_gallery(GalleryTemplate::LuxuryFashion, &customization())
            .unwrap();

        for item in FASHION_COLLECTIONS {
            assert!(html.contains(item), "missing {item}");
        }
        assert_eq!(html.matches("From $2,500").count(), FASHION_COLLECTIONS.len());
        assert!(html.contains("Playfair+Display"));
    }

    #[test]
    fn test_customization_text_is_escaped() {
        let mut custom = customization();
        custom.title = "<script>alert(1)</script>".to_string();
        custom.company_name = "Tom & Jerry".to_string();

        for template in GalleryTemplate::ALL {
            let html = renderer().render_gallery(template, &custom).unwrap();
            assert!(!html.contains("<script>alert(1)"), "{template}");
            assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"), "{template}");
            assert!(html.contains("Tom &amp; Jerry"), "{template}");
        }
    }

    #[test]
    fn test_unknown_color_scheme_uses_default_palette() {
        let mut custom = customization();
        custom.color_scheme = "neon".to_string();
        let html = renderer()
            .render_gallery(GalleryTemplate::RealEstate, &custom)
            .unwrap();
        assert!(html.contains(&format!("--brand-primary: {};", palette("blue").primary)));
    }
}
