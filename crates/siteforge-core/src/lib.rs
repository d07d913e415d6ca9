//! SiteForge Core Library
//!
//! Industry profiles, color palettes, prompt classification, the content
//! model and configuration for the SiteForge site generator.

pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod palette;
pub mod profile;

pub use classify::{ProfileScore, classify, score};
pub use config::Config;
pub use error::{CoreError, Result};
pub use model::{ContentModel, detect_features, extract_app_name};
pub use palette::{ColorScheme, PALETTES, palette};
pub use profile::{Feature, Hero, ImageSet, IndustryProfile, PROFILES, Stat, Testimonial, profile};
