//! Error types.

use std::path::PathBuf;

use crate::routes::SiteRoute;

/// Content could not be loaded or failed validation.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("failed to read content file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The YAML did not match the content schema (including missing fields).
    #[error("invalid content document: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A table has the wrong number of records.
    #[error("{table} must have exactly {expected} entries, found {found}")]
    Count {
        table: &'static str,
        expected: usize,
        found: usize,
    },

    /// A record has an empty required field.
    #[error("{table}[{index}] has an empty {field}")]
    EmptyField {
        table: &'static str,
        index: usize,
        field: &'static str,
    },

    /// The 404 quick links do not cover the expected destinations.
    #[error("404 quick links must point to {expected:?}, found {found:?}")]
    QuickLinks {
        expected: Vec<SiteRoute>,
        found: Vec<SiteRoute>,
    },
}

/// Failures while starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("content error: {0}")]
    Content(#[from] ContentError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
