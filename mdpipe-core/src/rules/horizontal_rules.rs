//! Thematic breaks made of hyphens.
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::compile_pattern;

static RULE_LINE: LazyLock<Regex> =
  LazyLock::new(|| compile_pattern("RULE_LINE", r"(?m)^-{3,}$"));

/// Replace every line made only of three or more hyphens with `<hr>`.
#[must_use]
pub fn convert_horizontal_rules(text: &str) -> String {
  RULE_LINE.replace_all(text, "<hr>").into_owned()
}
