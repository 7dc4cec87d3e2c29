//! Paragraph splitting on blank lines.
//!
//! This rule runs last and knows nothing about block elements, so headers,
//! lists and rules produced earlier end up inside `<p>` tags whenever they sit
//! next to a blank line.
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::compile_pattern;

/// An empty or whitespace-only line. Only horizontal whitespace is matched so
/// that every blank line yields exactly one separator.
static BLANK_LINE: LazyLock<Regex> =
  LazyLock::new(|| compile_pattern("BLANK_LINE", r"(?m)^[^\S\n]*$"));

/// Replace blank lines with `</p><p>` and wrap the whole document in `<p>`.
#[must_use]
pub fn convert_paragraphs(text: &str) -> String {
  let text = BLANK_LINE.replace_all(text, "</p><p>");
  format!("<p>{text}</p>")
}
