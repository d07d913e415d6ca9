//! End-to-end tests for SiteForge.
//!
//! These tests run prompts through classification, model building and every
//! renderer, checking the properties users rely on.

use std::fs;

use siteforge_core::{ContentModel, PROFILES, classify, palette};
use siteforge_generator::{
    Builder, GalleryTemplate, HtmlRenderer, Layout, ThemeCustomization, WordPressTheme, escape,
    wordpress::{REQUIRED_FILES, SCREENSHOT_PLACEHOLDER},
};
use tempfile::TempDir;

#[test]
fn test_saas_scenario() {
    let prompt = "Create a modern SaaS landing page for a project management tool";
    let model = ContentModel::from_prompt(prompt);

    assert_eq!(model.app_type, "saas");
    assert_eq!(model.color_scheme, "blue");

    let html = HtmlRenderer::default()
        .render(&model, model.palette())
        .expect("render");
    for feature in model.profile().features {
        let title = escape::html(feature.title);
        assert!(html.contains(&title), "missing {title}");
    }
    assert!(html.contains(palette("blue").primary));
}

#[test]
fn test_restaurant_scenario() {
    let model = ContentModel::from_prompt("Build a restaurant website with menu and reservations");

    assert_eq!(model.app_type, "restaurant");
    assert_eq!(model.color_scheme, "orange");

    let html = HtmlRenderer::default()
        .render(&model, model.palette())
        .expect("render");
    assert!(html.contains("hero-bg"));
}

#[test]
fn test_pricing_prompt_adds_pricing_feature() {
    let model = ContentModel::from_prompt("a bakery site with pricing for cakes");
    assert!(model.features.iter().any(|f| f == "Pricing"));
}

#[test]
fn test_empty_prompt_uses_defaults() {
    let model = ContentModel::from_prompt("");
    assert_eq!(classify("").id, "saas");
    assert_eq!(model.app_type, "saas");

    let renderer = HtmlRenderer::default();
    for layout in Layout::ALL {
        let html = renderer
            .render_layout(layout, &model, model.palette())
            .expect("render");
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
    let html = renderer
        .render_multipage(&model, model.palette())
        .expect("render");
    assert!(html.contains("id=\"page-home\""));
}

#[test]
fn test_app_name_and_subtitle_interpolated_escaped() {
    let model = ContentModel::from_prompt("a portfolio called Ada & Co");
    let renderer = HtmlRenderer::default();

    for layout in Layout::ALL {
        let html = renderer
            .render_layout(layout, &model, model.palette())
            .expect("render");
        assert!(html.contains("Ada &amp; Co"), "{layout}");
        assert!(!html.contains("Ada & Co"), "{layout}");
        let subtitle = model.profile().hero.subheadline;
        assert!(html.contains(&siteforge_generator::escape::html(subtitle)), "{layout}");
    }
}

#[test]
fn test_every_profile_renders_every_variant() {
    let renderer = HtmlRenderer::default();
    for profile in PROFILES {
        let model = ContentModel::with_profile("a site called Lumen", profile);
        for layout in Layout::ALL {
            let html = renderer
                .render_with_profile(layout, &model, profile, model.palette())
                .expect("render");
            assert!(!html.contains("{{"), "{} / {layout}", profile.id);
        }
        let html = renderer
            .render_multipage(&model, model.palette())
            .expect("render");
        assert!(!html.contains("{{"), "{} multipage", profile.id);
    }
}

#[test]
fn test_multipage_router_contract() {
    let model = ContentModel::from_prompt("a fitness studio called Pulse");
    let html = HtmlRenderer::default()
        .render_multipage(&model, model.palette())
        .expect("render");

    assert_eq!(html.matches("pushState").count(), 1);
    assert_eq!(html.matches("replaceState").count(), 1);
    assert!(html.contains("return PAGES.indexOf(name) === -1 ? DEFAULT_PAGE : name;"));
}

#[test]
fn test_gallery_for_every_profile() {
    let renderer = HtmlRenderer::default();
    for profile in PROFILES {
        let model = ContentModel::with_profile("", profile);
        let template = GalleryTemplate::for_app_type(model.app_type);
        let html = renderer
            .render_gallery(template, &ThemeCustomization::from_model(&model))
            .expect("render");

        assert!(html.starts_with("<!DOCTYPE html>"), "{}", profile.id);
        assert!(!html.contains("{{"), "{} / {template}", profile.id);
        assert!(html.contains(&escape::html(&model.app_name)), "{}", profile.id);
    }
}

#[test]
fn test_wordpress_theme_from_prompt() {
    let model = ContentModel::from_prompt("an ecommerce store called Loom");
    let theme = WordPressTheme::new(
        "Loom Theme",
        ThemeCustomization::from_model(&model),
        model.app_type,
    );
    let files = theme.emit().expect("emit");

    for path in REQUIRED_FILES {
        assert!(files.get(path).is_some(), "missing {path}");
    }
    assert_eq!(files.get("screenshot.png"), Some(SCREENSHOT_PLACEHOLDER));
    assert!(
        files
            .get("functions.php")
            .expect("functions.php")
            .contains("function loom_theme_setup()")
    );
    assert!(
        files
            .get("assets/css/custom.css")
            .expect("custom.css")
            .contains(palette("purple").primary)
    );
}

#[test]
fn test_batch_and_theme_on_disk() {
    let output = TempDir::new().expect("tempdir");
    let config = siteforge_core::Config::default();
    let builder = Builder::new(&config, output.path());

    let prompts = vec![
        "a real estate agency called Keystone".to_string(),
        "a medical clinic called CarePoint".to_string(),
        "".to_string(),
    ];
    let stats = builder.build_batch(&prompts).expect("batch");
    assert_eq!(stats.pages, 3);
    assert!(output.path().join("1-keystone.html").exists());
    assert!(output.path().join("2-carepoint.html").exists());

    let theme = builder.theme_for_prompt("a law firm called Harper Legal");
    let (dir, _) = builder.write_theme(&theme).expect("theme");
    let style = fs::read_to_string(dir.join("style.css")).expect("style.css");
    assert!(style.contains("Theme Name: Harper Legal"));
}
