//! Error types.
//!
//! Decoders return [`DecodeError`] directly. Everything above them (config
//! loading, the indexing activity, the CLI) funnels into [`Error`].

use std::path::PathBuf;

use thiserror::Error;

/// Failure to decode a cloud id or a cloud auth string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The payload segment is not standard padded base64, or not UTF-8 once decoded.
    #[error("base64 decoding failed on {payload}: {reason}")]
    InvalidEncoding { payload: String, reason: String },

    /// The decoded payload has fewer `$`-separated fields than required.
    #[error("expected at least 3 parts in {decoded}, found {found}")]
    MalformedPayload { decoded: String, found: usize },

    /// The credential string has no `:` between username and password.
    ///
    /// The descriptor is kept for the caller but never rendered by `Display`.
    #[error("cloud auth doesn't contain `:` to split between username and password")]
    MissingDelimiter { descriptor: String },
}

/// Configuration file and settings errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("no cloud id given (pass it, set ELASTICLOUD_CLOUD_ID, or add [cloud] id to the config)")]
    MissingCloudId,

    #[error("no cloud auth given (pass it, set ELASTICLOUD_CLOUD_AUTH, or add [cloud] auth to the config)")]
    MissingCloudAuth,
}

/// Errors raised while handing a document to the indexing client.
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("index name is empty")]
    MissingIndex,

    #[error("index request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
