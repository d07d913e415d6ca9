//! Error types for the SiteForge core library.
//!
//! Classification and palette lookup never fail; unknown inputs resolve to
//! the registry defaults. Errors only arise while loading configuration.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    /// The configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The configuration file is not valid TOML for [`crate::Config`].
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A field holds a value the generators cannot use.
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Layered file and environment loading failed.
    #[error("layered configuration error: {0}")]
    Layered(#[from] config::ConfigError),
}

impl CoreError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_invalid_names_field() {
        let err = CoreError::invalid("render.lang", "cannot be empty");
        assert_eq!(err.to_string(), "invalid render.lang: cannot be empty");
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = toml::from_str::<toml::Table>("x = ").unwrap_err();
        let err = CoreError::Parse {
            path: PathBuf::from("siteforge.toml"),
            source,
        };
        assert!(err.to_string().contains("siteforge.toml"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let err: CoreError = std::io::Error::other("disk full").into();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
