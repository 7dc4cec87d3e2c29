//! Construction-time options for [`Pipeline`](crate::Pipeline).
//!
//! The defaults reproduce the plain greedy rule semantics. Anything else is an
//! explicit opt-in.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How the list rule groups items into `<ul>` / `<ol>` elements.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
  /// Wrap the single greedy span from the first to the last item, once per
  /// list kind. Disjoint lists merge and unordered lists also get an `<ol>`.
  #[default]
  Greedy,
  /// Scan line by line and wrap every run of same-kind items on its own.
  Grouped,
}

impl ListMode {
  /// All accepted names, for CLI value parsers and error messages.
  pub const NAMES: [&'static str; 2] = ["greedy", "grouped"];

  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Greedy => "greedy",
      Self::Grouped => "grouped",
    }
  }
}

impl fmt::Display for ListMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error returned when parsing an unknown [`ListMode`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown list mode '{0}', expected one of: greedy, grouped")]
pub struct ParseListModeError(pub String);

impl FromStr for ListMode {
  type Err = ParseListModeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "greedy" => Ok(Self::Greedy),
      "grouped" => Ok(Self::Grouped),
      _ => Err(ParseListModeError(s.to_owned())),
    }
  }
}

/// Options for building a [`Pipeline`](crate::Pipeline).
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(default)]
pub struct PipelineOptions {
  /// Strategy used by the list rule.
  pub list_mode: ListMode,
}

impl PipelineOptions {
  /// Options with the given list strategy.
  #[must_use]
  pub const fn with_list_mode(list_mode: ListMode) -> Self {
    Self { list_mode }
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::expect_used, reason = "Fine in tests")]
  use super::{ListMode, ParseListModeError, PipelineOptions};

  #[test]
  fn test_defaults_are_greedy() {
    assert_eq!(PipelineOptions::default().list_mode, ListMode::Greedy);
  }

  #[test]
  fn test_parse_list_mode() {
    assert_eq!("greedy".parse::<ListMode>(), Ok(ListMode::Greedy));
    assert_eq!(" Grouped ".parse::<ListMode>(), Ok(ListMode::Grouped));
    assert_eq!(
      "nested".parse::<ListMode>(),
      Err(ParseListModeError("nested".to_owned()))
    );
  }

  #[test]
  fn test_names_round_trip_through_display() {
    for name in ListMode::NAMES {
      let mode: ListMode = name.parse().expect("known name should parse");
      assert_eq!(mode.to_string(), name);
    }
  }
}
