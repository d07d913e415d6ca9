//! Full-width hero: image backdrop with an overlay, gallery of feature shots.

use siteforge_core::IndustryProfile;

use crate::{
    html::Result,
    sections::SectionPlan,
    template::{TemplateContext, TemplateRegistry},
};

const FEATURE_LIMIT: usize = 6;

/// Background rules for the hero. Image URLs come from the static library.
pub(super) fn hero_css(image: &str) -> String {
    format!(
        r#"
    .hero-bg {{
      background-image: linear-gradient(rgba(0,0,0,0.5), rgba(0,0,0,0.5)), url('{image}');
      background-size: cover;
      background-position: center;
      background-attachment: fixed;
    }}"#
    )
}

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
        features_html.push_str(&templates.render("full_width.feature", &card)?);
    }
    ctx.insert("features", features_html);

    let mut gallery_html = String::new();
    for (i, image) in profile.images.features.iter().enumerate() {
        let feature = profile.features.get(i);
        let item = TemplateContext::new()
            .with_var("image", *image)
            .with_var("number", (i + 1).to_string())
            .with_var("title", feature.map_or("Project", |f| f.title))
            .with_var("description", feature.map_or("View details", |f| f.description));
        gallery_html.push_str(&templates.render("full_width.gallery_item", &item)?);
    }
    ctx.insert("gallery", gallery_html);

    if let Some(stats) = plan.stats {
        let mut items = String::new();
        for stat in stats {
            let item = TemplateContext::new()
                .with_var("value", stat.value)
                .with_var("label", stat.label);
            items.push_str(&templates.render("split_hero.stat", &item)?);
        }
        let section = TemplateContext::new().with_var("items", items);
        ctx.insert("stats_section", templates.render("full_width.stats", &section)?);
    }

    Ok(templates.render("full_width", &ctx)?)
}

pub(super) const FEATURE_TEMPLATE: &str = r##"
        <div class="group bg-white rounded-2xl p-8 border-2 border-gray-200 hover:border-transparent hover:shadow-2xl transition-all">
          <div class="w-16 h-16 rounded-full flex items-center justify-center text-white text-2xl font-bold mb-6 gradient-primary group-hover:scale-110 transition">
            {{ number }}
          </div>
          <h3 class="text-2xl font-bold mb-3">{{ title }}</h3>
          <p class="text-gray-600">{{ description }}</p>
        </div>"##;

pub(super) const GALLERY_ITEM_TEMPLATE: &str = r##"
        <div class="group relative overflow-hidden rounded-2xl shadow-xl">
          <img src="{{ image | attr }}" alt="Gallery {{ number }}" class="w-full h-80 object-cover transform group-hover:scale-110 transition duration-700">
          <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-black/40 to-transparent flex items-end p-8 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
            <div class="text-white">
              <h3 class="text-2xl font-bold mb-2">{{ title }}</h3>
              <p class="text-gray-200">{{ description }}</p>
            </div>
          </div>
        </div>"##;

pub(super) const STATS_TEMPLATE: &str = r##"
  <section id="stats" class="py-20 px-4 bg-gray-900">
    <div class="max-w-7xl mx-auto">
      <div class="grid md:grid-cols-4 gap-8 text-center text-white">{{ items | raw }}
      </div>
    </div>
  </section>
"##;

pub(super) const PAGE_TEMPLATE: &str = r##"{{ head | raw }}
<body class="antialiased">

  <nav class="fixed w-full top-0 z-50 bg-black/50 backdrop-blur-lg border-b border-white/10">
    <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
      <div class="flex justify-between items-center h-20">
        <div class="flex items-center space-x-3">
          <div class="w-10 h-10 rounded-lg flex items-center justify-center text-white font-bold text-xl gradient-primary">
            {{ app_initial }}
          </div>
          <span class="text-2xl font-bold text-white">{{ app_name }}</span>
        </div>
        <div class="hidden md:flex space-x-8">
          <a href="#home" class="text-white hover:text-gray-300 font-medium transition">Home</a>
          <a href="#features" class="text-white hover:text-gray-300 font-medium transition">Features</a>
          <a href="#gallery" class="text-white hover:text-gray-300 font-medium transition">Gallery</a>
          <a href="#contact" class="text-white hover:text-gray-300 font-medium transition">Contact</a>
        </div>
        <button class="px-6 py-2.5 rounded-lg text-white font-semibold hover:shadow-lg transition gradient-primary">
          {{ cta_primary }}
        </button>
      </div>
    </div>
  </nav>

  <section id="home" class="hero-bg min-h-screen flex items-center justify-center text-center px-4">
    <div class="max-w-4xl">
      <h1 class="text-6xl md:text-7xl font-bold mb-6 leading-tight text-white">
        {{ headline }}<br>
        <span class="text-gradient">{{ app_name }}</span>
      </h1>
      <p class="text-xl md:text-2xl text-gray-200 mb-10 max-w-3xl mx-auto">{{ subheadline }}</p>
      <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
        <button class="px-10 py-5 rounded-xl text-white font-bold text-lg hover:shadow-2xl transition gradient-primary">
          {{ cta_primary }}
        </button>
        <button class="px-10 py-5 rounded-xl font-semibold text-lg border-2 border-white text-white transition hover:bg-white hover:text-gray-900">
          {{ cta_secondary }}
        </button>
      </div>
    </div>
  </section>

  <section id="features" class="py-20 px-4 bg-white">
    <div class="max-w-7xl mx-auto">
      <div class="text-center mb-16">
        <h2 class="text-5xl font-bold mb-4"><span class="text-gradient">Premium</span> Features</h2>
        <p class="text-xl text-gray-600">Everything you need and more</p>
      </div>
      <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{{ features | raw }}
      </div>
    </div>
  </section>
{{ stats_section? | raw }}
  <section id="gallery" class="py-20 px-4 bg-gray-50">
    <div class="max-w-7xl mx-auto">
      <div class="text-center mb-16">
        <h2 class="text-5xl font-bold mb-4">Our <span class="text-gradient">Work</span></h2>
        <p class="text-xl text-gray-600">Take a look at what we do</p>
      </div>
      <div class="grid md:grid-cols-3 gap-8">{{ gallery | raw }}
      </div>
    </div>
  </section>
{{ pricing_section? | raw }}{{ testimonial_section? | raw }}
  <section id="contact" class="py-20 px-4 bg-white">
    <div class="max-w-6xl mx-auto">
      <div class="grid md:grid-cols-2 gap-12">
        <div>
          <h2 class="text-5xl font-bold mb-6">Let's <span class="text-gradient">Connect</span></h2>
          <p class="text-xl text-gray-600 mb-8">{{ subheadline }}</p>
          <div class="space-y-6">
            <div class="flex items-center space-x-4">
              <div class="w-12 h-12 rounded-lg gradient-primary flex items-center justify-center text-white text-xl">&#128231;</div>
              <div>
                <div class="font-bold">Email</div>
                <div class="text-gray-600">{{ email }}</div>
              </div>
            </div>
            <div class="flex items-center space-x-4">
              <div class="w-12 h-12 rounded-lg gradient-primary flex items-center justify-center text-white text-xl">&#128222;</div>
              <div>
                <div class="font-bold">Phone</div>
                <div class="text-gray-600">{{ phone }}</div>
              </div>
            </div>
          </div>
        </div>
        <div class="bg-gray-50 rounded-3xl p-8">
          <form class="space-y-4">
            <input type="text" placeholder="Your name" class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2">
            <input type="email" placeholder="your@email.com" class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2">
            <textarea rows="5" placeholder="Your message..." class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2"></textarea>
            <button type="submit" class="w-full py-4 rounded-lg text-white font-bold text-lg hover:shadow-xl transition gradient-primary">
              Send Message
            </button>
          </form>
        </div>
      </div>
    </div>
  </section>

  <footer class="bg-gray-900 text-white py-12 px-4">
    <div class="max-w-7xl mx-auto text-center">
      <p class="text-gray-400">&copy; {{ year }} {{ app_name }}. All rights reserved.</p>
    </div>
  </footer>
{{ scroll_script | raw }}
</body>
</html>
"##;
