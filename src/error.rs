// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsdError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid config: {source} (path: {path})")]
    Config {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Invalid ignore pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Reference query error: {0}")]
    Query(String),

    #[error("Invalid layer order: {0}")]
    Order(String),
}

pub type Result<T> = std::result::Result<T, FsdError>;

// Bare `?` on io::Error loses the path; prefer mapping to `Io` explicitly.
impl From<std::io::Error> for FsdError {
    fn from(source: std::io::Error) -> Self {
        FsdError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Loop errors from walkdir carry no io::Error of their own.
impl From<walkdir::Error> for FsdError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map_or_else(|| PathBuf::from("<unknown>"), ToOwned::to_owned);
        let source = e
            .into_io_error()
            .unwrap_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "filesystem loop detected")
            });
        FsdError::Io { source, path }
    }
}
