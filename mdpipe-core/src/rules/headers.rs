//! ATX header lines (`#` through `######`).
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::compile_pattern;

/// One pattern per header level, deepest level first.
///
/// Checking `######` before `#` keeps a deep header from being read as a
/// shallower one followed by literal hashes.
static HEADER_PATTERNS: LazyLock<Vec<(usize, Regex)>> = LazyLock::new(|| {
  (1..=6)
    .rev()
    .map(|level| {
      let pattern = format!(r"(?m)^#{{{level}}} (.+)$");
      (level, compile_pattern("HEADER_PATTERN", &pattern))
    })
    .collect()
});

/// Rewrite every `#`-prefixed line into an `<hN>` element.
#[must_use]
pub fn convert_headers(text: &str) -> String {
  let mut text = text.to_owned();
  for (level, re) in HEADER_PATTERNS.iter() {
    let replacement = format!("<h{level}>${{1}}</h{level}>");
    text = re.replace_all(&text, replacement.as_str()).into_owned();
  }
  text
}
