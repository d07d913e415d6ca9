//! Content model derived from a prompt.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::{
    classify::classify,
    palette::{ColorScheme, palette},
    profile::{IndustryProfile, profile},
};

/// Number of profile feature titles used when the prompt names none.
pub const FALLBACK_FEATURE_COUNT: usize = 6;

/// Auxiliary keywords and the feature label each one adds.
pub static FEATURE_KEYWORDS: &[(&str, &str)] = &[
    ("contact", "Contact Form"),
    ("newsletter", "Newsletter"),
    ("testimonial", "Testimonials"),
    ("pricing", "Pricing"),
    ("faq", "FAQ"),
    ("team", "Team"),
    ("gallery", "Gallery"),
];

static APP_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:called|named|for)\s+["']?([^"',.]+)["']?"#)
        .expect("app name pattern is valid")
});

/// Everything the renderers need for one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentModel {
    pub app_name: String,
    pub app_type: &'static str,
    /// The raw prompt.
    pub description: String,
    pub features: Vec<String>,
    pub color_scheme: &'static str,
    pub sections: &'static [&'static str],
}

impl ContentModel {
    /// Classify `prompt` and derive the model from the winning profile.
    #[must_use]
    pub fn from_prompt(prompt: &str) -> Self {
        Self::with_profile(prompt, classify(prompt))
    }

    /// Build a model for `prompt` against a chosen profile.
    #[must_use]
    pub fn with_profile(prompt: &str, profile: &'static IndustryProfile) -> Self {
        let app_name =
            extract_app_name(prompt).unwrap_or_else(|| profile.hero.headline.to_string());

        let mut features = detect_features(prompt);
        if features.is_empty() {
            features = profile
                .feature_titles(FALLBACK_FEATURE_COUNT)
                .map(str::to_string)
                .collect();
        }

        Self {
            app_name,
            app_type: profile.id,
            description: prompt.to_string(),
            features,
            color_scheme: profile.color_scheme,
            sections: profile.sections,
        }
    }

    /// The profile this model was built from.
    #[must_use]
    pub fn profile(&self) -> &'static IndustryProfile {
        profile(self.app_type)
    }

    /// The palette assigned to the model's profile.
    #[must_use]
    pub fn palette(&self) -> &'static ColorScheme {
        palette(self.color_scheme)
    }

    /// Whether the model's section list names `section`.
    #[must_use]
    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains(&section)
    }
}

/// Pull an app name out of phrases like `called "Acme"` or `for Acme Labs`.
///
/// Returns `None` when no marker is present or the captured text is blank.
#[must_use]
pub fn extract_app_name(prompt: &str) -> Option<String> {
    let caps = APP_NAME_RE.captures(prompt)?;
    let name = caps.get(1)?.as_str().trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// Labels of every auxiliary keyword found in `prompt`, in table order.
#[must_use]
pub fn detect_features(prompt: &str) -> Vec<String> {
    let lower = prompt.to_lowercase();
    FEATURE_KEYWORDS
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|(_, label)| (*label).to_string())
        .collect()
}
