//! SiteForge Generator Library
//!
//! Renders content models into complete documents.
//!
//! # Modules
//!
//! - [`escape`] - Context-specific escaping (HTML, attributes, PHP, JS, XML)
//! - [`template`] - Template system with escaped variable interpolation
//! - [`html`] - Renderer entry points and shared page variables
//! - [`layouts`] - The three single-page layouts
//! - [`sections`] - Optional stats, pricing and testimonial blocks
//! - [`multipage`] - Four-page bundle with a query-parameter router
//! - [`gallery`] - Showcase pages driven by theme text
//! - [`wordpress`] - WordPress theme emitter
//! - [`file_map`] - Ordered multi-file output
//! - [`build`] - Build orchestration

pub mod build;
pub mod escape;
pub mod file_map;
pub mod gallery;
pub mod html;
pub mod layouts;
pub mod multipage;
pub mod sections;
pub mod template;
pub mod wordpress;

pub use build::{BuildError, BuildStats, Builder, OutputKind};
pub use file_map::SiteFileMap;
pub use gallery::GalleryTemplate;
pub use html::{HtmlError, HtmlRenderer, RenderOptions};
pub use layouts::Layout;
pub use multipage::Page;
pub use template::{Template, TemplateContext, TemplateRegistry};
pub use wordpress::{ThemeCustomization, WordPressTheme};
