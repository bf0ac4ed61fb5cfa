//! Error types
//!
//! Every failure in the app ends up as one of these. The UI layer decides
//! how each one degrades (error message in the grid, empty gallery, log line).

use thiserror::Error;

/// Failures while talking to the static file server
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("cannot build URL from {base} and {path}: {source}")]
    Url {
        base: String,
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid listing manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("cannot decode image {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: image::ImageError,
    },

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Failures while loading configuration at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Toml {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid base URL {url}: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
