//! Split hero: copy on the left, image on the right, numbered feature cards.

use siteforge_core::IndustryProfile;

use crate::{
    html::Result,
    sections::SectionPlan,
    template::{TemplateContext, TemplateRegistry},
};

const FEATURE_LIMIT: usize = 6;

pub(super) fn render(
    templates: &TemplateRegistry,
    mut ctx: TemplateContext,
    profile: &IndustryProfile,
    plan: &SectionPlan,
) -> Result<String> {
    let mut features_html = String::new();
    for (i, feature) in profile.features.iter().take(FEATURE_LIMIT).enumerate() {
        let card = TemplateContext::new()
            .with_var("number", (i + 1).to_string())
            .with_var("title", feature.title)
            .with_var("description", feature.description);
        features_html.push_str(&templates.render("split_hero.feature", &card)?);
    }
    ctx.insert("features", features_html);

    if let Some(stats) = plan.stats {
        let mut items = String::new();
        for stat in stats {
            let item = TemplateContext::new()
                .with_var("value", stat.value)
                .with_var("label", stat.label);
            items.push_str(&templates.render("split_hero.stat", &item)?);
        }
        let section = TemplateContext::new().with_var("items", items);
        ctx.insert("stats_section", templates.render("split_hero.stats", &section)?);
    }

    Ok(templates.render("split_hero", &ctx)?)
}

pub(super) const FEATURE_TEMPLATE: &str = r##"
        <div class="bg-white rounded-2xl p-8 border border-gray-200 hover:shadow-xl transition">
          <div class="w-16 h-16 rounded-xl flex items-center justify-center text-white text-2xl font-bold mb-6 gradient-primary">
            {{ number }}
          </div>
          <h3 class="text-2xl font-bold mb-3">{{ title }}</h3>
          <p class="text-gray-600">{{ description }}</p>
        </div>"##;

pub(super) const STATS_TEMPLATE: &str = r##"
  <section id="stats" class="py-20 px-4 gradient-primary">
    <div class="max-w-7xl mx-auto">
      <div class="grid md:grid-cols-4 gap-8 text-center text-white">{{ items | raw }}
      </div>
    </div>
  </section>
"##;

pub(super) const STAT_TEMPLATE: &str = r##"
        <div>
          <div class="text-5xl font-bold mb-2">{{ value }}</div>
          <div class="text-xl opacity-90">{{ label }}</div>
        </div>"##;

pub(super) const PAGE_TEMPLATE: &str = r##"{{ head | raw }}
<body class="antialiased" style="background: {{ background | attr }}; color: {{ text | attr }};">

  <nav class="fixed w-full top-0 z-50 bg-white/95 backdrop-blur-lg border-b border-gray-200 shadow-sm">
    <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
      <div class="flex justify-between items-center h-20">
        <div class="flex items-center space-x-3">
          <div class="w-10 h-10 rounded-lg flex items-center justify-center text-white font-bold text-xl gradient-primary">
            {{ app_initial }}
          </div>
          <span class="text-2xl font-bold text-gradient">{{ app_name }}</span>
        </div>
        <div class="hidden md:flex space-x-8">
          <a href="#home" class="text-gray-700 hover:text-gray-900 font-medium transition">Home</a>
          <a href="#features" class="text-gray-700 hover:text-gray-900 font-medium transition">Features</a>
          <a href="#about" class="text-gray-700 hover:text-gray-900 font-medium transition">About</a>
          <a href="#contact" class="text-gray-700 hover:text-gray-900 font-medium transition">Contact</a>
        </div>
        <button class="px-6 py-2.5 rounded-lg text-white font-semibold hover:shadow-lg transition gradient-primary">
          {{ cta_primary }}
        </button>
      </div>
    </div>
  </nav>

  <section id="home" class="pt-32 pb-20 px-4">
    <div class="max-w-7xl mx-auto">
      <div class="grid md:grid-cols-2 gap-12 items-center">
        <div>
          <h1 class="text-5xl md:text-6xl font-bold mb-6 leading-tight">
            {{ headline }}
            <span class="block text-gradient mt-2">{{ app_name }}</span>
          </h1>
          <p class="text-xl text-gray-600 mb-10">{{ subheadline }}</p>
          <div class="flex flex-col sm:flex-row items-start gap-4">
            <button class="px-8 py-4 rounded-xl text-white font-bold text-lg hover:shadow-2xl transition gradient-primary">
              {{ cta_primary }}
            </button>
            <button class="px-8 py-4 rounded-xl font-semibold text-lg border-2 transition hover:bg-gray-50" style="border-color: {{ primary | attr }}; color: {{ primary | attr }};">
              {{ cta_secondary }}
            </button>
          </div>
        </div>
        <div>
          <img src="{{ hero_image | attr }}" alt="{{ app_name | attr }}" class="rounded-3xl shadow-2xl w-full h-auto object-cover" style="max-height: 600px;">
        </div>
      </div>
    </div>
  </section>

  <section id="features" class="py-20 px-4 bg-gray-50">
    <div class="max-w-7xl mx-auto">
      <div class="text-center mb-16">
        <h2 class="text-5xl font-bold mb-4">Why Choose <span class="text-gradient">Us</span></h2>
        <p class="text-xl text-gray-600">Everything you need to succeed</p>
      </div>
      <div class="grid md:grid-cols-3 gap-8">{{ features | raw }}
      </div>
    </div>
  </section>
{{ stats_section? | raw }}{{ pricing_section? | raw }}{{ testimonial_section? | raw }}
  <section id="about" class="py-20 px-4">
    <div class="max-w-7xl mx-auto">
      <div class="text-center mb-16">
        <h2 class="text-5xl font-bold mb-4">About <span class="text-gradient">{{ app_name }}</span></h2>
        <p class="text-xl text-gray-600">Our Story and Mission</p>
      </div>
      <div class="grid md:grid-cols-2 gap-12 items-center">
        <div>
          <img src="{{ about_image | attr }}" alt="About {{ app_name | attr }}" class="rounded-3xl shadow-2xl w-full h-auto object-cover">
        </div>
        <div>
          <h3 class="text-3xl font-bold mb-6">Who We Are</h3>
          <p class="text-lg text-gray-600 mb-6">{{ subheadline }} We're passionate about delivering excellence.</p>
          <p class="text-lg text-gray-600">Founded with a vision to transform the industry, we've grown into a trusted partner for thousands of satisfied customers worldwide.</p>
        </div>
      </div>
    </div>
  </section>

  <section id="contact" class="py-20 px-4 bg-gray-50">
    <div class="max-w-4xl mx-auto text-center">
      <h2 class="text-5xl font-bold mb-6">Get In <span class="text-gradient">Touch</span></h2>
      <p class="text-xl text-gray-600 mb-12">We'd love to hear from you</p>
      <div class="bg-white rounded-3xl p-12 shadow-lg">
        <form class="space-y-6">
          <div class="grid md:grid-cols-2 gap-6">
            <input type="text" placeholder="Your name" class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-opacity-50">
            <input type="email" placeholder="your@email.com" class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-opacity-50">
          </div>
          <textarea rows="5" placeholder="Tell us more..." class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-opacity-50"></textarea>
          <button type="submit" class="w-full py-4 rounded-lg text-white font-bold text-lg hover:shadow-xl transition gradient-primary">
            Send Message
          </button>
        </form>
      </div>
    </div>
  </section>

  <footer class="bg-gray-900 text-white py-12 px-4">
    <div class="max-w-7xl mx-auto text-center">
      <div class="flex items-center justify-center space-x-3 mb-4">
        <div class="w-10 h-10 rounded-lg flex items-center justify-center text-white font-bold text-xl gradient-primary">
          {{ app_initial }}
        </div>
        <span class="text-xl font-bold">{{ app_name }}</span>
      </div>
      <p class="text-gray-400 mb-8">{{ subheadline }}</p>
      <p class="text-gray-500">&copy; {{ year }} {{ app_name }}. All rights reserved.</p>
    </div>
  </footer>
{{ scroll_script | raw }}
</body>
</html>
"##;
