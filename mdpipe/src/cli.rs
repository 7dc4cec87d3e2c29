use std::path::PathBuf;

use clap::Parser;
use mdpipe_core::ListMode;

/// Command line interface for mdpipe
#[derive(Parser, Debug)]
#[command(author, version, about = "Convert Markdown to HTML")]
pub struct Cli {
  /// Path to the input Markdown file
  pub input_file: PathBuf,

  /// Path for the output HTML file
  pub output_file: PathBuf,

  /// Enable verbose logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times). Later files override earlier ones
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,

  /// How list items are grouped into list elements.
  #[arg(long = "list-mode", value_parser = ListMode::NAMES)]
  pub list_mode: Option<String>,

  /// Exit with an error status when the conversion fails instead of only
  /// logging it.
  #[arg(long)]
  pub strict: bool,
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]
  use clap::Parser;

  use super::Cli;

  #[test]
  fn test_positional_paths() {
    let cli = Cli::try_parse_from(["mdpipe", "in.md", "out.html"])
      .expect("two positionals should parse");
    assert_eq!(cli.input_file.to_str(), Some("in.md"));
    assert_eq!(cli.output_file.to_str(), Some("out.html"));
    assert!(!cli.verbose);
    assert!(!cli.strict);
    assert!(cli.list_mode.is_none());
  }

  #[test]
  fn test_flags() {
    let cli = Cli::try_parse_from([
      "mdpipe",
      "-v",
      "--strict",
      "--list-mode",
      "grouped",
      "-c",
      "a.toml",
      "-c",
      "b.json",
      "--config",
      "strict=false",
      "in.md",
      "out.html",
    ])
    .expect("flags should parse");
    assert!(cli.verbose);
    assert!(cli.strict);
    assert_eq!(cli.list_mode.as_deref(), Some("grouped"));
    assert_eq!(cli.config_files.len(), 2);
    assert_eq!(cli.config_overrides, vec!["strict=false".to_owned()]);
  }

  #[test]
  fn test_missing_output_is_rejected() {
    assert!(Cli::try_parse_from(["mdpipe", "in.md"]).is_err());
  }

  #[test]
  fn test_unknown_list_mode_is_rejected() {
    assert!(
      Cli::try_parse_from(["mdpipe", "--list-mode", "tree", "a", "b"])
        .is_err()
    );
  }
}
