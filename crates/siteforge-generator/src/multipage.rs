//! Multi-page bundle: four page fragments in one document plus a
//! query-parameter router.
//!
//! The router is a small state machine over [`Page`]:
//!
//! | event                      | shows                 | history      |
//! |----------------------------|-----------------------|--------------|
//! | click on `?page=<name>`    | `resolve(name)`       | `pushState`  |
//! | `popstate`                 | page named in the URL | untouched    |
//! | initial load               | page named in the URL | `replaceState` |
//!
//! Missing or unknown page names resolve to [`Page::Home`] on both sides.

use std::fmt;

use siteforge_core::{ColorScheme, ContentModel, IndustryProfile, Stat};

use crate::{
    html::{HtmlRenderer, Result},
    template::{TemplateContext, TemplateRegistry},
};

/// One routable page of the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Features,
    About,
    Contact,
}

impl Page {
    /// Every page in navigation order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Features, Page::About, Page::Contact];

    /// Query-parameter value of the page.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Features => "features",
            Self::About => "about",
            Self::Contact => "contact",
        }
    }

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Features => "Features",
            Self::About => "About",
            Self::Contact => "Contact",
        }
    }

    /// Map a query-parameter value to a page. Anything unknown is home.
    #[must_use]
    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(|n| Self::ALL.into_iter().find(|p| p.as_str() == n))
            .unwrap_or(Self::Home)
    }

    /// Element id of the page container.
    #[must_use]
    pub fn element_id(self) -> String {
        format!("page-{}", self.as_str())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const ABOUT_STATS: [Stat; 3] = [
    Stat { value: "500+", label: "Happy Customers" },
    Stat { value: "50+", label: "Countries" },
    Stat { value: "99%", label: "Satisfaction Rate" },
];

const ACTIVE_LINK_CLASS: &str = "text-gray-900 font-bold border-b-2";
const IDLE_LINK_CLASS: &str = "text-gray-700 hover:text-gray-900";

pub(crate) fn render(
    renderer: &HtmlRenderer,
    model: &ContentModel,
    profile: &IndustryProfile,
    palette: &ColorScheme,
) -> Result<String> {
    let templates = renderer.templates();
    let base = renderer.base_context(model, profile, palette);
    let footer = templates.render("multipage.footer", &base)?;

    let mut pages_html = String::new();
    for page in Page::ALL {
        let body = render_body(templates, &base, page, profile)?;
        let mut ctx = base.clone();
        ctx.insert("element_id", page.element_id());
        ctx.insert("page_class", if page == Page::Home { "page active" } else { "page" });
        ctx.insert("label", page.label());
        ctx.insert("nav", render_nav(templates, &base, page, palette)?);
        ctx.insert("body", body);
        ctx.insert("footer", footer.clone());
        pages_html.push_str(&templates.render("multipage.page", &ctx)?);
    }

    let mut ctx = base.clone();
    ctx.insert("pages", pages_html);
    ctx.insert("router", router_script(templates, model)?);
    Ok(templates.render("multipage", &ctx)?)
}

/// The router script for a site called `model.app_name`.
pub fn router_script(templates: &TemplateRegistry, model: &ContentModel) -> Result<String> {
    let pages = Page::ALL
        .iter()
        .map(|p| format!("'{}'", p.as_str()))
        .collect::<Vec<_>>()
        .join(", ");
    let titles = Page::ALL
        .iter()
        .map(|p| format!("{}: '{}'", p.as_str(), p.label()))
        .collect::<Vec<_>>()
        .join(", ");
    let ctx = TemplateContext::new()
        .with_var("app_name", &model.app_name)
        .with_var("pages", pages)
        .with_var("titles", titles)
        .with_var("default_page", Page::resolve(None).as_str());
    Ok(templates.render("multipage.router", &ctx)?)
}

fn render_nav(
    templates: &TemplateRegistry,
    base: &TemplateContext,
    current: Page,
    palette: &ColorScheme,
) -> Result<String> {
    let mut links = String::new();
    for page in Page::ALL {
        let active = page == current;
        let ctx = TemplateContext::new()
            .with_var("name", page.as_str())
            .with_var("label", page.label())
            .with_var("class", if active { ACTIVE_LINK_CLASS } else { IDLE_LINK_CLASS })
            .with_var(
                "style",
                if active { format!("border-color: {}", palette.primary) } else { String::new() },
            );
        links.push_str(&templates.render("multipage.nav_link", &ctx)?);
    }
    let mut ctx = base.clone();
    ctx.insert("links", links);
    Ok(templates.render("multipage.nav", &ctx)?)
}

fn render_body(
    templates: &TemplateRegistry,
    base: &TemplateContext,
    page: Page,
    profile: &IndustryProfile,
) -> Result<String> {
    let mut ctx = base.clone();
    match page {
        Page::Home => {}
        Page::Features => {
            let mut cards = String::new();
            for (i, feature) in profile.features.iter().enumerate() {
                let card = TemplateContext::new()
                    .with_var("number", (i + 1).to_string())
                    .with_var("title", feature.title)
                    .with_var("description", feature.description);
                cards.push_str(&templates.render("multipage.feature", &card)?);
            }
            ctx.insert("features", cards);
        }
        Page::About => {
            let stats: &[Stat] = match profile.stats {
                Some(stats) if stats.len() >= 3 => &stats[..3],
                _ => &ABOUT_STATS,
            };
            let mut stats_html = String::new();
            for stat in stats {
                let item = TemplateContext::new()
                    .with_var("value", stat.value)
                    .with_var("label", stat.label);
                stats_html.push_str(&templates.render("multipage.stat", &item)?);
            }
            let mut reasons = String::new();
            for feature in profile.features.iter().take(4) {
                let item = TemplateContext::new()
                    .with_var("title", feature.title)
                    .with_var("description", feature.description);
                reasons.push_str(&templates.render("multipage.reason", &item)?);
            }
            ctx.insert("stats", stats_html);
            ctx.insert("reasons", reasons);
        }
        Page::Contact => {}
    }
    let name = format!("multipage.{}", page.as_str());
    Ok(templates.render(&name, &ctx)?)
}

const DOCUMENT_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ lang | attr }}">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{{ app_name }}</title>
  <meta name="description" content="{{ description | attr }}">
  <script src="{{ css_framework_url | attr }}"></script>
  <style>
    .gradient-primary {
      background: linear-gradient(135deg, {{ primary | raw }}, {{ secondary | raw }});
    }
    .text-gradient {
      background: linear-gradient(135deg, {{ primary | raw }}, {{ secondary | raw }});
      -webkit-background-clip: text;
      -webkit-text-fill-color: transparent;
      background-clip: text;
    }
    .page { display: none; }
    .page.active { display: block; }
  </style>
</head>
<body class="antialiased" style="background: {{ background | attr }}; color: {{ text | attr }};">
{{ pages | raw }}
{{ router | raw }}
</body>
</html>
"##;

const PAGE_TEMPLATE: &str = r##"
  <!-- {{ label }} Page -->
  <div id="{{ element_id | attr }}" class="{{ page_class | attr }}">
{{ nav | raw }}{{ body | raw }}{{ footer | raw }}
  </div>
"##;

const NAV_TEMPLATE: &str = r##"
    <nav class="fixed w-full top-0 z-50 bg-white/95 backdrop-blur-lg border-b border-gray-200 shadow-sm">
      <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
        <div class="flex justify-between items-center h-20">
          <div class="flex items-center space-x-3">
            <div class="w-10 h-10 rounded-lg flex items-center justify-center text-white font-bold text-xl gradient-primary">
              {{ app_initial }}
            </div>
            <span class="text-2xl font-bold text-gradient">{{ app_name }}</span>
          </div>
          <div class="hidden md:flex space-x-8">{{ links | raw }}
          </div>
          <a href="?page=contact" class="px-6 py-2.5 rounded-lg text-white font-semibold hover:shadow-lg transition gradient-primary">
            {{ cta_primary }}
          </a>
        </div>
      </div>
    </nav>
"##;

const NAV_LINK_TEMPLATE: &str = r##"
            <a href="?page={{ name | attr }}" class="{{ class | attr }} font-medium transition pb-1" style="{{ style | attr }}">{{ label }}</a>"##;

const FOOTER_TEMPLATE: &str = r##"
    <footer class="py-12 px-4 bg-gray-50 border-t border-gray-200 mt-20">
      <div class="max-w-7xl mx-auto">
        <div class="grid md:grid-cols-4 gap-8 mb-8">
          <div>
            <div class="flex items-center space-x-2 mb-4">
              <div class="w-8 h-8 rounded-lg flex items-center justify-center text-white font-bold gradient-primary">
                {{ app_initial }}
              </div>
              <span class="text-xl font-bold text-gradient">{{ app_name }}</span>
            </div>
            <p class="text-gray-600">{{ subheadline }}</p>
          </div>
          <div>
            <h4 class="font-bold mb-4">Navigation</h4>
            <ul class="space-y-2 text-gray-600">
              <li><a href="?page=home" class="hover:text-gray-900 transition">Home</a></li>
              <li><a href="?page=features" class="hover:text-gray-900 transition">Features</a></li>
              <li><a href="?page=about" class="hover:text-gray-900 transition">About</a></li>
              <li><a href="?page=contact" class="hover:text-gray-900 transition">Contact</a></li>
            </ul>
          </div>
          <div>
            <h4 class="font-bold mb-4">Contact</h4>
            <ul class="space-y-2 text-gray-600">
              <li>{{ contact_email }}</li>
              <li>{{ phone }}</li>
            </ul>
          </div>
          <div>
            <h4 class="font-bold mb-4">Follow Us</h4>
            <div class="flex space-x-4 text-gray-600">
              <a href="#" class="hover:text-gray-900 transition">Twitter</a>
              <a href="#" class="hover:text-gray-900 transition">LinkedIn</a>
            </div>
          </div>
        </div>
        <div class="text-center text-gray-600 pt-8 border-t border-gray-200">
          <p>&copy; {{ year }} {{ app_name }}. All rights reserved.</p>
        </div>
      </div>
    </footer>"##;

const HOME_TEMPLATE: &str = r##"
    <section class="pt-32 pb-20 px-4">
      <div class="max-w-7xl mx-auto">
        <div class="text-center">
          <h1 class="text-6xl md:text-7xl font-bold mb-6 leading-tight">
            {{ headline }}
            <span class="block text-gradient mt-2">{{ app_name }}</span>
          </h1>
          <p class="text-xl md:text-2xl text-gray-600 mb-10 max-w-3xl mx-auto">
            {{ subheadline }}
          </p>
          <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
            <a href="?page=contact" class="px-8 py-4 rounded-xl text-white font-bold text-lg hover:shadow-2xl transition gradient-primary">
              {{ cta_primary }}
            </a>
            <a href="?page=features" class="px-8 py-4 rounded-xl font-semibold text-lg border-2 transition hover:bg-gray-50" style="border-color: {{ primary | attr }}; color: {{ primary | attr }};">
              {{ cta_secondary }}
            </a>
          </div>
        </div>
      </div>
    </section>

    <section class="py-20 px-4 bg-gray-50">
      <div class="max-w-7xl mx-auto text-center">
        <h2 class="text-4xl font-bold mb-4">Welcome to <span class="text-gradient">{{ app_name }}</span></h2>
        <p class="text-xl text-gray-600 max-w-3xl mx-auto mb-12">{{ description }}</p>
        <a href="?page=features" class="inline-block px-8 py-4 rounded-xl text-white font-bold text-lg hover:shadow-2xl transition gradient-primary">
          Explore Features
        </a>
      </div>
    </section>
"##;

const FEATURES_TEMPLATE: &str = r##"
    <section class="pt-32 pb-20 px-4">
      <div class="max-w-7xl mx-auto">
        <div class="text-center mb-16">
          <h1 class="text-5xl md:text-6xl font-bold mb-4">
            Our <span class="text-gradient">Features</span>
          </h1>
          <p class="text-xl text-gray-600">Everything you need to succeed</p>
        </div>
        <div class="grid md:grid-cols-3 gap-8">{{ features | raw }}
        </div>
      </div>
    </section>
"##;

const FEATURE_TEMPLATE: &str = r##"
          <div class="bg-white rounded-2xl p-8 border border-gray-200 hover:shadow-xl transition">
            <div class="w-16 h-16 rounded-xl flex items-center justify-center text-white text-2xl font-bold mb-6 gradient-primary">
              {{ number }}
            </div>
            <h3 class="text-2xl font-bold mb-3">{{ title }}</h3>
            <p class="text-gray-600">{{ description }}</p>
          </div>"##;

const ABOUT_TEMPLATE: &str = r##"
    <section class="pt-32 pb-20 px-4">
      <div class="max-w-7xl mx-auto">
        <div class="text-center mb-16">
          <h1 class="text-5xl md:text-6xl font-bold mb-4">
            About <span class="text-gradient">{{ app_name }}</span>
          </h1>
          <p class="text-xl text-gray-600">Our story and mission</p>
        </div>

        <div class="max-w-4xl mx-auto space-y-12">
          <div class="bg-white rounded-2xl p-12 border border-gray-200 shadow-sm">
            <h2 class="text-3xl font-bold mb-6">Our Mission</h2>
            <p class="text-lg text-gray-600 leading-relaxed">
              {{ subheadline }}. We're dedicated to providing the best experience for our customers and helping them achieve their goals.
            </p>
          </div>

          <div class="grid md:grid-cols-3 gap-8 text-center">{{ stats | raw }}
          </div>

          <div class="bg-gray-50 rounded-2xl p-12">
            <h2 class="text-3xl font-bold mb-6">Why Choose Us</h2>
            <ul class="space-y-4 text-lg text-gray-600">{{ reasons | raw }}
            </ul>
          </div>
        </div>
      </div>
    </section>
"##;

const STAT_TEMPLATE: &str = r##"
            <div class="bg-white rounded-2xl p-8 border border-gray-200">
              <div class="text-5xl font-bold mb-2 text-gradient">{{ value }}</div>
              <div class="text-xl text-gray-600">{{ label }}</div>
            </div>"##;

const REASON_TEMPLATE: &str = r##"
              <li class="flex items-start">
                <span class="text-2xl mr-4 gradient-primary text-white px-3 py-1 rounded-lg">&#10003;</span>
                <div>
                  <span class="font-bold text-gray-900">{{ title }}:</span> {{ description }}
                </div>
              </li>"##;

const CONTACT_TEMPLATE: &str = r##"
    <section class="pt-32 pb-20 px-4">
      <div class="max-w-7xl mx-auto">
        <div class="text-center mb-16">
          <h1 class="text-5xl md:text-6xl font-bold mb-4">
            Get In <span class="text-gradient">Touch</span>
          </h1>
          <p class="text-xl text-gray-600">We'd love to hear from you</p>
        </div>

        <div class="grid md:grid-cols-2 gap-12 max-w-6xl mx-auto">
          <div>
            <h2 class="text-3xl font-bold mb-8">Contact Information</h2>
            <div class="space-y-6">
              <div class="flex items-start space-x-4">
                <div class="w-12 h-12 rounded-lg flex items-center justify-center text-white font-bold text-2xl gradient-primary">&#128231;</div>
                <div>
                  <h3 class="font-bold text-lg mb-1">Email</h3>
                  <p class="text-gray-600">{{ contact_email }}</p>
                </div>
              </div>
              <div class="flex items-start space-x-4">
                <div class="w-12 h-12 rounded-lg flex items-center justify-center text-white font-bold text-2xl gradient-primary">&#128222;</div>
                <div>
                  <h3 class="font-bold text-lg mb-1">Phone</h3>
                  <p class="text-gray-600">{{ phone }}</p>
                </div>
              </div>
              <div class="flex items-start space-x-4">
                <div class="w-12 h-12 rounded-lg flex items-center justify-center text-white font-bold text-2xl gradient-primary">&#128205;</div>
                <div>
                  <h3 class="font-bold text-lg mb-1">Address</h3>
                  <p class="text-gray-600">123 Business Street, Suite 100<br>San Francisco, CA 94105</p>
                </div>
              </div>
            </div>
          </div>

          <div class="bg-white rounded-2xl p-8 border border-gray-200 shadow-lg">
            <h2 class="text-2xl font-bold mb-6">Send Us a Message</h2>
            <form class="space-y-4" onsubmit="event.preventDefault(); alert('Thank you for your message! We will get back to you soon.');">
              <div>
                <label class="block text-sm font-semibold mb-2">Name</label>
                <input type="text" required class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-opacity-50" placeholder="Your name">
              </div>
              <div>
                <label class="block text-sm font-semibold mb-2">Email</label>
                <input type="email" required class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-opacity-50" placeholder="your@email.com">
              </div>
              <div>
                <label class="block text-sm font-semibold mb-2">Message</label>
                <textarea rows="4" required class="w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-opacity-50" placeholder="Your message..."></textarea>
              </div>
              <button type="submit" class="w-full py-3 rounded-lg text-white font-bold hover:shadow-lg transition gradient-primary">
                Send Message
              </button>
            </form>
          </div>
        </div>
      </div>
    </section>
"##;

const ROUTER_TEMPLATE: &str = r##"  <script>
    (function () {
      var PAGES = [{{ pages | raw }}];
      var TITLES = { {{ titles | raw }} };
      var DEFAULT_PAGE = '{{ default_page | js }}';
      var SITE_NAME = '{{ app_name | js }}';

      function resolve(name) {
        return PAGES.indexOf(name) === -1 ? DEFAULT_PAGE : name;
      }

      function pageFromUrl() {
        return resolve(new URLSearchParams(window.location.search).get('page'));
      }

      function urlFor(name) {
        var url = new URL(window.location.href);
        url.searchParams.set('page', name);
        return url;
      }

      function show(name) {
        document.querySelectorAll('.page').forEach(function (page) {
          page.classList.remove('active');
        });
        var target = document.getElementById('page-' + name);
        if (target) {
          target.classList.add('active');
        }
        document.title = TITLES[name] + ' | ' + SITE_NAME;
        window.scrollTo(0, 0);
      }

      // Navigation is the only transition that adds a history entry.
      function navigate(name) {
        var page = resolve(name);
        show(page);
        window.history.pushState({ page: page }, '', urlFor(page));
      }

      document.addEventListener('click', function (e) {
        var link = e.target.closest('a[href^="?page="]');
        if (!link) {
          return;
        }
        e.preventDefault();
        navigate(new URL(link.href).searchParams.get('page'));
      });

      window.addEventListener('popstate', function () {
        show(pageFromUrl());
      });

      function init() {
        var page = pageFromUrl();
        show(page);
        window.history.replaceState({ page: page }, '', urlFor(page));
      }

      if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', init);
      } else {
        init();
      }
    })();
  </script>"##;

/// Every multi-page template, keyed by registry name.
pub(crate) static TEMPLATES: &[(&str, &str)] = &[
    ("multipage", DOCUMENT_TEMPLATE),
    ("multipage.page", PAGE_TEMPLATE),
    ("multipage.nav", NAV_TEMPLATE),
    ("multipage.nav_link", NAV_LINK_TEMPLATE),
    ("multipage.footer", FOOTER_TEMPLATE),
    ("multipage.home", HOME_TEMPLATE),
    ("multipage.features", FEATURES_TEMPLATE),
    ("multipage.feature", FEATURE_TEMPLATE),
    ("multipage.about", ABOUT_TEMPLATE),
    ("multipage.stat", STAT_TEMPLATE),
    ("multipage.reason", REASON_TEMPLATE),
    ("multipage.contact", CONTACT_TEMPLATE),
    ("multipage.router", ROUTER_TEMPLATE),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn render(prompt: &str) -> String {
        let renderer = HtmlRenderer::default();
        let model = ContentModel::from_prompt(prompt);
        renderer.render_multipage(&model, model.palette()).unwrap()
    }

    /// Text of the handler registered for `event`, up to its closing `});`.
    fn handler<'a>(html: &'a str, event: &str) -> &'a str {
        let start = html
            .find(&format!("addEventListener('{event}'"))
            .unwrap_or_else(|| panic!("no {event} handler"));
        let end = html[start..].find("});").expect("handler end");
        &html[start..start + end]
    }

    #[test]
    fn test_resolve() {
        assert_eq!(Page::resolve(Some("features")), Page::Features);
        assert_eq!(Page::resolve(Some("contact")), Page::Contact);
        assert_eq!(Page::resolve(Some("pricing")), Page::Home);
        assert_eq!(Page::resolve(Some("")), Page::Home);
        assert_eq!(Page::resolve(None), Page::Home);
    }

    /// Session history as the emitted router drives it: clicks push the
    /// resolved page, back pops, reloads read the page from the URL.
    struct History {
        entries: Vec<String>,
        index: usize,
    }

    impl History {
        /// Initial load of `url`; the router replaces the entry with the
        /// resolved page.
        fn open(url: &str) -> Self {
            let page = Page::resolve(page_param(url));
            Self {
                entries: vec![format!("?page={page}")],
                index: 0,
            }
        }

        fn click(&mut self, name: &str) {
            let page = Page::resolve(Some(name));
            self.entries.truncate(self.index + 1);
            self.entries.push(format!("?page={page}"));
            self.index += 1;
        }

        fn back(&mut self) {
            self.index = self.index.saturating_sub(1);
        }

        fn forward(&mut self) {
            self.index = (self.index + 1).min(self.entries.len() - 1);
        }

        /// The page popstate shows for the current entry.
        fn shown(&self) -> Page {
            Page::resolve(page_param(&self.entries[self.index]))
        }
    }

    fn page_param(url: &str) -> Option<&str> {
        let query = url.split_once('?')?.1;
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("page="))
    }

    #[test]
    fn test_history_back_returns_home() {
        let mut history = History::open("index.html");
        assert_eq!(history.shown(), Page::Home);

        history.click("features");
        assert_eq!(history.shown(), Page::Features);
        history.back();
        assert_eq!(history.shown(), Page::Home);
        history.forward();
        assert_eq!(history.shown(), Page::Features);
    }

    #[test]
    fn test_history_click_after_back_drops_forward_entries() {
        let mut history = History::open("index.html?page=about");
        history.click("contact");
        history.click("features");
        history.back();
        history.back();
        assert_eq!(history.shown(), Page::About);

        history.click("home");
        history.forward();
        assert_eq!(history.shown(), Page::Home);
        history.back();
        assert_eq!(history.shown(), Page::About);
    }

    #[test]
    fn test_history_unknown_pages_resolve_home() {
        let mut history = History::open("index.html?lang=en&page=pricing");
        assert_eq!(history.shown(), Page::Home);

        history.click("features");
        history.click("blog");
        assert_eq!(history.shown(), Page::Home);
        history.back();
        assert_eq!(history.shown(), Page::Features);
    }

    #[test]
    fn test_router_defaults_to_resolved_page() {
        let html = render("a saas tool called Flowly");
        assert!(html.contains(&format!("var DEFAULT_PAGE = '{}';", Page::resolve(None))));
    }

    #[test]
    fn test_four_pages_home_active() {
        let html = render("a saas tool called Flowly");
        for page in Page::ALL {
            assert!(html.contains(&format!("id=\"{}\"", page.element_id())), "{page}");
        }
        assert!(html.contains("id=\"page-home\" class=\"page active\""));
        assert!(html.contains("id=\"page-about\" class=\"page\""));
        assert_eq!(html.matches("class=\"page active\"").count(), 1);
    }

    #[test]
    fn test_active_nav_link_per_page() {
        let html = render("a saas tool called Flowly");
        // One highlighted link per page fragment.
        assert_eq!(html.matches("text-gray-900 font-bold border-b-2").count(), 4);
        assert!(html.contains("style=\"border-color: #3B82F6\">Features</a>"));
    }

    #[test]
    fn test_router_contract() {
        let html = render("a saas tool called Flowly");
        assert!(html.contains("var PAGES = ['home', 'features', 'about', 'contact'];"));
        assert!(html.contains("var DEFAULT_PAGE = 'home';"));

        let click = handler(&html, "click");
        assert!(click.contains("navigate("));
        let navigate = &html[html.find("function navigate").expect("navigate")..];
        assert!(navigate[..navigate.find("}\n").expect("end")].contains("pushState"));

        let popstate = handler(&html, "popstate");
        assert!(popstate.contains("show(pageFromUrl())"));
        assert!(!popstate.contains("pushState"));
        assert!(!popstate.contains("navigate"));

        let init = &html[html.find("function init").expect("init")..];
        let init = &init[..init.find("}\n").expect("end")];
        assert!(init.contains("replaceState"));
        assert!(!init.contains("pushState"));

        assert_eq!(html.matches("pushState").count(), 1);
    }

    #[test]
    fn test_site_name_is_js_escaped() {
        let html = render("a saas tool called Flow</script>");
        assert!(html.contains("var SITE_NAME = 'Flow\\u003C/script\\u003E';"));
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn test_about_uses_profile_stats() {
        let html = render("a saas tool");
        assert!(html.contains("50K+"));
        let html = render("a medical clinic");
        assert!(html.contains("Happy Customers"));
    }
}
