//! `>` quoted lines.
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::compile_pattern;

static QUOTE_LINE: LazyLock<Regex> =
  LazyLock::new(|| compile_pattern("QUOTE_LINE", r"(?m)^>\s(.+)$"));

/// A closing tag followed, after optional whitespace, by an opening one.
static ADJACENT_QUOTES: LazyLock<Regex> = LazyLock::new(|| {
  compile_pattern("ADJACENT_QUOTES", r"</blockquote>\s*<blockquote>")
});

/// Wrap quoted lines in `<blockquote>` and merge consecutive ones.
///
/// The merge is textual: the tag pair between two quoted lines collapses
/// into a single newline.
#[must_use]
pub fn convert_blockquotes(text: &str) -> String {
  let text = QUOTE_LINE.replace_all(text, "<blockquote>${1}</blockquote>");
  ADJACENT_QUOTES.replace_all(&text, "\n").into_owned()
}
