//! Error types shared across the crate.
//!
//! None of these are fatal to a running session: storage errors degrade to
//! "not durable", image errors degrade to "no photo".

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the key-value snapshot storage.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not determine data directory")]
    NoDataDir,

    #[error("storage quota exceeded: {needed} bytes needed, limit is {limit}")]
    QuotaExceeded { needed: usize, limit: usize },
}

/// Failures of the catalog's persistence operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("snapshot is not valid json: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("snapshot is inconsistent: {0}")]
    InvalidSnapshot(String),

    #[error("no ids left: highest id in use is {0}")]
    IdsExhausted(u64),
}

/// Failures while acquiring a photo for a new record.
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("image is {size} bytes, limit is {limit}")]
    TooLarge { size: u64, limit: u64 },

    #[error("not an image: {0}")]
    NotAnImage(String),

    #[error("invalid image url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported url scheme '{0}', expected http, https or an image data uri")]
    UnsupportedScheme(String),

    #[error("camera capture is not available")]
    CameraUnavailable,
}

/// Failures loading the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
