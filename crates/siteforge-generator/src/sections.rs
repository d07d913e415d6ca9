//! Optional page sections shared by the single-page layouts.
//!
//! Whether a block appears is decided once per render by [`SectionPlan`]:
//!
//! - stats: the profile carries stats and its sections name `stats`
//! - pricing: the sections name `pricing`
//! - testimonial: the profile carries a testimonial and its sections name
//!   `testimonials`

use siteforge_core::{ColorScheme, Feature, IndustryProfile, Stat, Testimonial};

use crate::{
    html::Result,
    template::{TemplateContext, TemplateRegistry},
};

/// Which optional blocks a page gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPlan {
    pub stats: Option<&'static [Stat]>,
    pub pricing: bool,
    pub testimonial: Option<Testimonial>,
}

impl SectionPlan {
    /// Decide the optional blocks for `profile`.
    #[must_use]
    pub fn for_profile(profile: &IndustryProfile) -> Self {
        Self {
            stats: profile.stats.filter(|_| profile.has_section("stats")),
            pricing: profile.has_section("pricing"),
            testimonial: profile.testimonial.filter(|_| profile.has_section("testimonials")),
        }
    }
}

/// One column of the pricing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub items: Vec<String>,
    pub cta: &'static str,
    pub highlighted: bool,
}

/// Title of the feature at `index`, wrapping around short feature lists.
fn feature_title(features: &[Feature], index: usize) -> String {
    if features.is_empty() {
        return "All Core Features".to_string();
    }
    features[index % features.len()].title.to_string()
}

/// The three fixed price tiers, filled with feature titles by position.
#[must_use]
pub fn pricing_tiers(features: &[Feature]) -> [PricingTier; 3] {
    [
        PricingTier {
            name: "Starter",
            price: "$29",
            items: vec![
                feature_title(features, 0),
                feature_title(features, 1),
                "Basic Support".to_string(),
            ],
            cta: "Get Started",
            highlighted: false,
        },
        PricingTier {
            name: "Professional",
            price: "$79",
            items: vec![
                "Everything in Starter".to_string(),
                feature_title(features, 2),
                "Priority Support".to_string(),
            ],
            cta: "Get Started",
            highlighted: true,
        },
        PricingTier {
            name: "Enterprise",
            price: "$199",
            items: vec![
                "Everything in Pro".to_string(),
                feature_title(features, 3),
                "24/7 Support".to_string(),
            ],
            cta: "Contact Sales",
            highlighted: false,
        },
    ]
}

/// Render the pricing section.
pub fn render_pricing(
    templates: &TemplateRegistry,
    features: &[Feature],
    palette: &ColorScheme,
) -> Result<String> {
    let mut tiers_html = String::new();
    for tier in pricing_tiers(features) {
        let mut items_html = String::new();
        for item in &tier.items {
            let ctx = TemplateContext::new().with_var("item", item);
            items_html.push_str(&templates.render("section.pricing_item", &ctx)?);
        }

        let template = if tier.highlighted {
            "section.pricing_tier_highlighted"
        } else {
            "section.pricing_tier"
        };
        let ctx = TemplateContext::new()
            .with_var("name", tier.name)
            .with_var("price", tier.price)
            .with_var("items", items_html)
            .with_var("cta", tier.cta)
            .with_var("primary", palette.primary);
        tiers_html.push_str(&templates.render(template, &ctx)?);
    }

    let ctx = TemplateContext::new().with_var("tiers", tiers_html);
    Ok(templates.render("section.pricing", &ctx)?)
}

/// Render the testimonial section.
pub fn render_testimonial(templates: &TemplateRegistry, testimonial: &Testimonial) -> Result<String> {
    let ctx = TemplateContext::new()
        .with_var("quote", testimonial.quote)
        .with_var("author", testimonial.author)
        .with_var("author_initial", initial(testimonial.author))
        .with_var("role", testimonial.role);
    Ok(templates.render("section.testimonial", &ctx)?)
}

/// First character of `s`, uppercased.
#[must_use]
pub fn initial(s: &str) -> String {
    s.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

pub(crate) const PRICING_TEMPLATE: &str = r##"
  <section id="pricing" class="py-20 px-4">
    <div class="max-w-7xl mx-auto">
      <div class="text-center mb-16">
        <h2 class="text-5xl font-bold mb-4">
          Simple <span class="text-gradient">Pricing</span>
        </h2>
        <p class="text-xl text-gray-600">Choose the plan that fits your needs</p>
      </div>
      <div class="grid md:grid-cols-3 gap-8">{{ tiers | raw }}
      </div>
    </div>
  </section>
"##;

pub(crate) const PRICING_TIER_TEMPLATE: &str = r##"
        <div class="bg-white rounded-2xl p-8 border-2 border-gray-200 hover:shadow-xl transition">
          <h3 class="text-2xl font-bold mb-2">{{ name }}</h3>
          <div class="text-5xl font-bold mb-6" style="color: {{ primary | attr }};">{{ price }}<span class="text-xl text-gray-600">/mo</span></div>
          <ul class="space-y-4 mb-8">{{ items | raw }}
          </ul>
          <button class="w-full py-3 rounded-lg border-2 font-semibold transition hover:bg-gray-50" style="border-color: {{ primary | attr }}; color: {{ primary | attr }};">
            {{ cta }}
          </button>
        </div>"##;

pub(crate) const PRICING_TIER_HIGHLIGHTED_TEMPLATE: &str = r##"
        <div class="bg-white rounded-2xl p-8 border-2 hover:shadow-xl transition relative" style="border-color: {{ primary | attr }};">
          <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 rounded-full text-white text-sm font-semibold gradient-primary">
            Popular
          </div>
          <h3 class="text-2xl font-bold mb-2">{{ name }}</h3>
          <div class="text-5xl font-bold mb-6" style="color: {{ primary | attr }};">{{ price }}<span class="text-xl text-gray-600">/mo</span></div>
          <ul class="space-y-4 mb-8">{{ items | raw }}
          </ul>
          <button class="w-full py-3 rounded-lg text-white font-semibold hover:shadow-lg transition gradient-primary">
            {{ cta }}
          </button>
        </div>"##;

pub(crate) const PRICING_ITEM_TEMPLATE: &str = r##"
            <li class="flex items-center"><span class="mr-2">&#10003;</span> {{ item }}</li>"##;

pub(crate) const TESTIMONIAL_TEMPLATE: &str = r##"
  <section id="testimonials" class="py-20 px-4 gradient-primary">
    <div class="max-w-4xl mx-auto text-center text-white">
      <div class="text-6xl mb-6">&ldquo;</div>
      <p class="text-3xl font-light mb-8 italic">{{ quote }}</p>
      <div class="flex items-center justify-center space-x-4">
        <div class="w-16 h-16 rounded-full bg-white/20 flex items-center justify-center text-white font-bold text-xl">
          {{ author_initial }}
        </div>
        <div class="text-left">
          <div class="font-bold text-lg">{{ author }}</div>
          <div class="opacity-90">{{ role }}</div>
        </div>
      </div>
    </div>
  </section>
"##;

#[cfg(test)]
mod tests {
    use siteforge_core::{palette, profile};

    use super::*;

    const FOUR: &[Feature] = &[
        Feature { title: "Alpha", description: "a" },
        Feature { title: "Beta", description: "b" },
        Feature { title: "Gamma", description: "c" },
        Feature { title: "Delta", description: "d" },
    ];

    #[test]
    fn test_section_plan_saas() {
        let plan = SectionPlan::for_profile(profile("saas"));
        assert!(plan.stats.is_some());
        assert!(plan.pricing);
        assert!(plan.testimonial.is_some());
    }

    #[test]
    fn test_section_plan_requires_named_sections() {
        // Portfolio carries stats and a testimonial but names neither section.
        let plan = SectionPlan::for_profile(profile("portfolio"));
        assert!(plan.stats.is_none());
        assert!(!plan.pricing);
        assert!(plan.testimonial.is_none());

        // Fitness names pricing but not stats.
        let plan = SectionPlan::for_profile(profile("fitness"));
        assert!(plan.pricing);
        assert!(plan.stats.is_none());
    }

    #[test]
    fn test_pricing_tiers_use_all_four_features() {
        let tiers = pricing_tiers(FOUR);
        let items: Vec<_> = tiers.iter().flat_map(|t| t.items.iter()).collect();
        for title in ["Alpha", "Beta", "Gamma", "Delta"] {
            assert!(items.iter().any(|i| *i == title), "{title} missing");
        }
        assert_eq!(tiers[1].price, "$79");
        assert!(tiers[1].highlighted);
    }

    #[test]
    fn test_pricing_tiers_wrap_short_lists() {
        let tiers = pricing_tiers(&FOUR[..2]);
        assert_eq!(tiers[1].items[1], "Alpha");
        assert_eq!(tiers[2].items[1], "Beta");

        let tiers = pricing_tiers(&[]);
        assert_eq!(tiers[0].items[0], "All Core Features");
    }

    #[test]
    fn test_render_pricing() {
        let registry = TemplateRegistry::new();
        let html = render_pricing(&registry, FOUR, palette("blue")).unwrap();
        assert!(html.contains("Simple <span class=\"text-gradient\">Pricing</span>"));
        assert!(html.contains("$29") && html.contains("$79") && html.contains("$199"));
        assert!(html.contains("Contact Sales"));
        assert!(html.contains("Delta"));
        assert!(html.contains("#3B82F6"));
    }

    #[test]
    fn test_render_testimonial_escapes() {
        let registry = TemplateRegistry::new();
        let t = Testimonial {
            quote: "<b>great</b>",
            author: "lisa & james",
            role: "Owners",
        };
        let html = render_testimonial(&registry, &t).unwrap();
        assert!(html.contains("&lt;b&gt;great&lt;/b&gt;"));
        assert!(html.contains("lisa &amp; james"));
        assert!(html.contains(">\n          L\n"));
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("acme"), "A");
        assert_eq!(initial("  émile"), "É");
        assert_eq!(initial(""), "");
    }
}
