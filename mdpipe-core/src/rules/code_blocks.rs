//! Fenced code blocks delimited by triple backticks.
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::compile_pattern;

/// Shortest span between two fences, newlines included.
static FENCED_BLOCK: LazyLock<Regex> =
  LazyLock::new(|| compile_pattern("FENCED_BLOCK", r"(?s)```(.+?)```"));

/// Wrap every fenced span in `<pre><code>`.
///
/// Content is not escaped, and a language tag on the opening fence is kept
/// as part of the content. Rules that run earlier in the pipeline have
/// already seen (and may have rewritten) the fenced text.
#[must_use]
pub fn convert_code_blocks(text: &str) -> String {
  FENCED_BLOCK
    .replace_all(text, "<pre><code>${1}</code></pre>")
    .into_owned()
}
