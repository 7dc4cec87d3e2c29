use std::{
  fs,
  path::{Path, PathBuf},
};

use log::{debug, info};
use mdpipe_core::{ListMode, PipelineOptions};
use serde::{Deserialize, Serialize};

use crate::{cli::Cli, error::ConfigError};

/// File names probed in the working directory when no config file is given.
pub const DISCOVERED_CONFIG_FILES: [&str; 2] = ["mdpipe.toml", "mdpipe.json"];

/// Configuration for a conversion run.
///
/// Every field is optional so that layers (config files, `--config`
/// overrides, CLI flags) can be merged in order, each one only replacing what
/// it actually sets. Accessors resolve unset fields to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
  /// Enable debug logging.
  pub verbose: Option<bool>,

  /// Propagate conversion failures as a non-zero exit status.
  pub strict: Option<bool>,

  /// Strategy used by the list rule.
  pub list_mode: Option<ListMode>,
}

impl Config {
  /// Load configuration from a file (TOML or JSON, chosen by extension).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if its
  /// extension is neither `toml` nor `json`.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content =
      fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
      })?;

    let extension = path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_lowercase);

    match extension.as_deref() {
      Some("json") => {
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
          path: path.to_path_buf(),
          source,
        })
      },
      Some("toml") => {
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
          path: path.to_path_buf(),
          source,
        })
      },
      _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
  }

  /// Load configuration from files and `KEY=VALUE` overrides.
  ///
  /// Files are merged in order. Without any file, a config discovered in the
  /// working directory is used if present.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded or an override is invalid.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = Self::default();

    if config_files.is_empty() {
      if let Some(discovered) = Self::find_config_file() {
        info!("Using discovered config file: {}", discovered.display());
        config = Self::from_file(&discovered)?;
      }
    } else {
      for path in config_files {
        config.merge(Self::from_file(path)?);
      }
      if config_files.len() > 1 {
        info!("Loaded and merged {} config files", config_files.len());
      }
    }

    for raw in config_overrides {
      config.apply_override(raw)?;
    }

    debug!("Resolved configuration: {config:?}");
    Ok(config)
  }

  /// Look for a config file in the working directory.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    Self::find_config_file_in(&cwd)
  }

  /// Look for one of [`DISCOVERED_CONFIG_FILES`] inside `dir`.
  #[must_use]
  pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    DISCOVERED_CONFIG_FILES
      .iter()
      .map(|name| dir.join(name))
      .find(|candidate| candidate.is_file())
  }

  /// Overlay `other` on top of `self`; fields set in `other` win.
  pub fn merge(&mut self, other: Self) {
    if other.verbose.is_some() {
      self.verbose = other.verbose;
    }
    if other.strict.is_some() {
      self.strict = other.strict;
    }
    if other.list_mode.is_some() {
      self.list_mode = other.list_mode;
    }
  }

  /// Apply a single `KEY=VALUE` override.
  ///
  /// # Errors
  ///
  /// Returns an error for a malformed pair, an unknown key or a value that
  /// does not parse for its key.
  pub fn apply_override(&mut self, raw: &str) -> Result<(), ConfigError> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
      ConfigError::Invalid(format!(
        "Invalid config override '{raw}', expected KEY=VALUE"
      ))
    })?;
    let (key, value) = (key.trim(), value.trim());

    match key {
      "verbose" => self.verbose = Some(parse_bool(key, value)?),
      "strict" => self.strict = Some(parse_bool(key, value)?),
      "list_mode" => {
        self.list_mode = Some(
          value
            .parse()
            .map_err(|e| ConfigError::Invalid(format!("{key}: {e}")))?,
        );
      },
      _ => {
        return Err(ConfigError::Invalid(format!(
          "Unknown config key '{key}'"
        )));
      },
    }
    Ok(())
  }

  /// Merge explicit CLI flags on top of the loaded configuration.
  ///
  /// Boolean flags can only switch a setting on; leaving them out keeps the
  /// configured value.
  ///
  /// # Errors
  ///
  /// Returns an error if `--list-mode` holds an unknown mode.
  pub fn merge_with_cli(mut self, cli: &Cli) -> Result<Self, ConfigError> {
    if cli.verbose {
      self.verbose = Some(true);
    }
    if cli.strict {
      self.strict = Some(true);
    }
    if let Some(mode) = &cli.list_mode {
      self.list_mode = Some(
        mode
          .parse()
          .map_err(|e| ConfigError::Invalid(format!("--list-mode: {e}")))?,
      );
    }
    Ok(self)
  }

  #[must_use]
  pub fn is_verbose(&self) -> bool {
    self.verbose.unwrap_or(false)
  }

  #[must_use]
  pub fn is_strict(&self) -> bool {
    self.strict.unwrap_or(false)
  }

  /// Pipeline options derived from this configuration.
  #[must_use]
  pub fn pipeline_options(&self) -> PipelineOptions {
    PipelineOptions::with_list_mode(self.list_mode.unwrap_or_default())
  }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
  value.parse().map_err(|_| {
    ConfigError::Invalid(format!(
      "{key}: expected 'true' or 'false', got '{value}'"
    ))
  })
}

#[cfg(test)]
mod tests {
  use mdpipe_core::ListMode;

  use super::Config;

  #[test]
  fn test_defaults() {
    let config = Config::default();
    assert!(!config.is_verbose());
    assert!(!config.is_strict());
    assert_eq!(config.pipeline_options().list_mode, ListMode::Greedy);
  }

  #[test]
  fn test_merge_only_overrides_set_fields() {
    let mut base = Config {
      verbose:   Some(true),
      strict:    Some(true),
      list_mode: None,
    };
    base.merge(Config {
      strict: Some(false),
      list_mode: Some(ListMode::Grouped),
      ..Default::default()
    });
    assert_eq!(base, Config {
      verbose:   Some(true),
      strict:    Some(false),
      list_mode: Some(ListMode::Grouped),
    });
  }

  #[test]
  fn test_overrides() {
    let mut config = Config::default();
    assert!(config.apply_override("strict=true").is_ok());
    assert!(config.apply_override(" list_mode = grouped ").is_ok());
    assert!(config.is_strict());
    assert_eq!(config.list_mode, Some(ListMode::Grouped));
  }

  #[test]
  fn test_bad_overrides() {
    let mut config = Config::default();
    assert!(config.apply_override("strict").is_err());
    assert!(config.apply_override("strict=maybe").is_err());
    assert!(config.apply_override("list_mode=tree").is_err());
    assert!(config.apply_override("colour=blue").is_err());
    assert_eq!(config, Config::default());
  }
}
