//! SiteForge CLI Library
//!
//! Command implementations for the `siteforge` binary. The binary only
//! parses arguments; everything it does is reachable from here.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (classify, profiles, generate, batch, wordpress, gallery)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use siteforge::cmd;
//!
//! cmd::generate::run(
//!     Path::new("siteforge.toml"),
//!     "a bakery called Sweet Crumb",
//!     Some(Path::new("index.html")),
//!     None,
//!     false,
//! )
//! .unwrap();
//! ```

pub mod cmd;

pub use siteforge_core::{Config, ContentModel};
pub use siteforge_generator::{BuildStats, Builder, OutputKind, WordPressTheme};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    // Logs go to stderr so generated HTML on stdout stays clean.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
