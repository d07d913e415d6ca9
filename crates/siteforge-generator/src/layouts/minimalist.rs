//! Minimalist: centered light typography, numbered services, selected work.

use siteforge_core::IndustryProfile;

use crate::{
    html::Result,
    sections::SectionPlan,
    template::{TemplateContext, TemplateRegistry},
};

const SERVICE_LIMIT: usize = 4;

pub(super) fn render(
    templates: &TemplateRegistry,
    mut ctx: TemplateContext,
    profile: &IndustryProfile,
    plan: &SectionPlan,
) -> Result<String> {
    let mut services_html = String::new();
    for (i, feature) in profile.features.iter().take(SERVICE_LIMIT).enumerate() {
        let item = TemplateContext::new()
            .with_var("number", format!("{:02}", i + 1))
            .with_var("title", feature.title)
            .with_var("description", feature.description);
        services_html.push_str(&templates.render("minimalist.service", &item)?);
    }
    ctx.insert("services", services_html);

    let mut work_html = String::new();
    for (i, image) in profile.images.features.iter().enumerate() {
        let feature = profile.features.get(i);
        let item = TemplateContext::new()
            .with_var("image", *image)
            .with_var("number", (i + 1).to_string())
            .with_var("title", feature.map_or("Project", |f| f.title))
            .with_var(
                "description",
                feature.map_or("Design & Development", |f| f.description),
            );
        work_html.push_str(&templates.render("minimalist.work_item", &item)?);
    }
    ctx.insert("work", work_html);

    if let Some(stats) = plan.stats {
        let mut items = String::new();
        for stat in stats {
            let item = TemplateContext::new()
                .with_var("value", stat.value)
                .with_var("label", stat.label);
            items.push_str(&templates.render("minimalist.stat", &item)?);
        }
        let section = TemplateContext::new().with_var("items", items);
        ctx.insert("stats_section", templates.render("minimalist.stats", &section)?);
    }

    Ok(templates.render("minimalist", &ctx)?)
}

pub(super) const SERVICE_TEMPLATE: &str = r##"
        <div class="border-t border-gray-200 pt-8">
          <div class="flex items-start justify-between mb-4">
            <h3 class="text-3xl font-light">{{ title }}</h3>
            <span class="text-5xl font-light text-gray-300">{{ number }}</span>
          </div>
          <p class="text-xl text-gray-600 font-light">{{ description }}</p>
        </div>"##;

pub(super) const WORK_ITEM_TEMPLATE: &str = r##"
        <div class="group cursor-pointer">
          <div class="overflow-hidden rounded-2xl mb-4">
            <img src="{{ image | attr }}" alt="Project {{ number }}" class="w-full h-96 object-cover transform group-hover:scale-105 transition duration-700">
          </div>
          <h3 class="text-2xl font-light mb-2">{{ title }} {{ number }}</h3>
          <p class="text-gray-600">{{ description }}</p>
        </div>"##;

pub(super) const STATS_TEMPLATE: &str = r##"
  <section id="stats" class="py-32 px-4">
    <div class="max-w-6xl mx-auto">
      <div class="grid md:grid-cols-4 gap-12 text-center">{{ items | raw }}
      </div>
    </div>
  </section>
"##;

pub(super) const STAT_TEMPLATE: &str = r##"
        <div>
          <div class="text-6xl font-light mb-4 text-gradient">{{ value }}</div>
          <div class="text-lg text-gray-600 font-light">{{ label }}</div>
        </div>"##;

pub(super) const PAGE_TEMPLATE: &str = r##"{{ head | raw }}
<body class="antialiased bg-white">

  <nav class="fixed w-full top-0 z-50 bg-white border-b border-gray-100">
    <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
      <div class="flex justify-between items-center h-24">
        <span class="text-3xl font-light tracking-tight">{{ app_name }}</span>
        <div class="hidden md:flex space-x-12">
          <a href="#home" class="text-gray-600 hover:text-gray-900 transition">Home</a>
          <a href="#services" class="text-gray-600 hover:text-gray-900 transition">Services</a>
          <a href="#work" class="text-gray-600 hover:text-gray-900 transition">Work</a>
          <a href="#contact" class="text-gray-600 hover:text-gray-900 transition">Contact</a>
        </div>
      </div>
    </div>
  </nav>

  <section id="home" class="pt-48 pb-32 px-4">
    <div class="max-w-4xl mx-auto text-center">
      <h1 class="text-7xl md:text-8xl font-light mb-8 tracking-tight leading-none">
        {{ headline }}
      </h1>
      <p class="text-2xl text-gray-600 mb-12 font-light">{{ subheadline }}</p>
      <button class="px-12 py-4 rounded-full text-white font-medium text-lg hover:shadow-2xl transition gradient-primary">
        {{ cta_primary }}
      </button>
    </div>
  </section>

  <section class="py-32 px-4 bg-gray-50">
    <div class="max-w-6xl mx-auto">
      <img src="{{ hero_image | attr }}" alt="{{ app_name | attr }}" class="rounded-3xl shadow-2xl w-full h-auto object-cover" style="max-height: 700px;">
    </div>
  </section>

  <section id="services" class="py-32 px-4">
    <div class="max-w-4xl mx-auto">
      <h2 class="text-6xl font-light mb-20 text-center">What We Do</h2>
      <div class="space-y-16">{{ services | raw }}
      </div>
    </div>
  </section>

  <section id="work" class="py-32 px-4 bg-gray-50">
    <div class="max-w-6xl mx-auto">
      <h2 class="text-6xl font-light mb-20 text-center">Selected Work</h2>
      <div class="grid md:grid-cols-2 gap-8">{{ work | raw }}
      </div>
    </div>
  </section>
{{ stats_section? | raw }}{{ pricing_section? | raw }}{{ testimonial_section? | raw }}
  <section id="contact" class="py-32 px-4 bg-gray-50">
    <div class="max-w-4xl mx-auto text-center">
      <h2 class="text-6xl font-light mb-8">Let's Work Together</h2>
      <p class="text-2xl text-gray-600 mb-16 font-light">{{ subheadline }}</p>
      <div class="space-y-4 mb-16">
        <a href="mailto:{{ email | attr }}" class="block text-3xl font-light hover:text-gradient transition">
          {{ email }}
        </a>
        <a href="tel:{{ phone_href | attr }}" class="block text-3xl font-light hover:text-gradient transition">
          {{ phone }}
        </a>
      </div>
      <button class="px-12 py-4 rounded-full text-white font-medium text-lg hover:shadow-2xl transition gradient-primary">
        Start a Project
      </button>
    </div>
  </section>

  <footer class="py-12 px-4 border-t border-gray-200">
    <div class="max-w-6xl mx-auto text-center">
      <p class="text-gray-500 font-light">&copy; {{ year }} {{ app_name }}. All rights reserved.</p>
    </div>
  </footer>
{{ scroll_script | raw }}
</body>
</html>
"##;
