use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while converting a file.
///
/// The pipeline is total, so these come from file access or from a panic
/// caught while the rules were running.
#[derive(Debug, Error)]
pub enum ConvertError {
  #[error("The file {} was not found.", .path.display())]
  NotFound { path: PathBuf },

  #[error(
    "An error occurred while reading or writing {}: {source}",
    .path.display()
  )]
  Io {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("An unexpected error occurred: {0}")]
  Unexpected(String),
}

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Failed to read config file {}: {source}", .path.display())]
  Read {
    path:   PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to parse JSON config from {}: {source}", .path.display())]
  Json {
    path:   PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("Failed to parse TOML config from {}: {source}", .path.display())]
  Toml {
    path:   PathBuf,
    #[source]
    source: toml::de::Error,
  },

  #[error("Unsupported config file format: {}", .0.display())]
  UnsupportedFormat(PathBuf),

  #[error("Configuration error: {0}")]
  Invalid(String),
}
