//! Strong and emphasis spans.
//!
//! Bold has to run before italic: once `**text**` is rewritten to `<strong>`,
//! the italic pattern only sees the single asterisks that are left.
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::compile_pattern;

static BOLD_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| compile_pattern("BOLD_PATTERN", r"\*\*(.+?)\*\*"));

static ITALIC_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| compile_pattern("ITALIC_PATTERN", r"\*(.+?)\*"));

/// Replace `**text**` with `<strong>text</strong>`.
#[must_use]
pub fn convert_bold(text: &str) -> String {
  BOLD_PATTERN
    .replace_all(text, "<strong>${1}</strong>")
    .into_owned()
}

/// Replace `*text*` with `<em>text</em>`.
#[must_use]
pub fn convert_italic(text: &str) -> String {
  ITALIC_PATTERN.replace_all(text, "<em>${1}</em>").into_owned()
}
