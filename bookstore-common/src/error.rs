//! Error types for the back-office crates

use thiserror::Error;

/// Failures reading the book catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
    #[error("Malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}
