//! Inline `[label](url)` links.
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::compile_pattern;

static LINK_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| compile_pattern("LINK_PATTERN", r"\[(.+?)\]\((.+?)\)"));

/// Replace `[label](url)` with `<a href="url">label</a>`.
///
/// Nested brackets or parentheses are not supported; both parts end at the
/// first closing delimiter.
#[must_use]
pub fn convert_links(text: &str) -> String {
  LINK_PATTERN
    .replace_all(text, r#"<a href="${2}">${1}</a>"#)
    .into_owned()
}

#[cfg(test)]
mod tests {
  use super::convert_links;

  #[test]
  fn test_basic_link() {
    assert_eq!(
      convert_links("[text](http://x.com)"),
      r#"<a href="http://x.com">text</a>"#
    );
  }

  #[test]
  fn test_two_links_on_one_line() {
    assert_eq!(
      convert_links("[a](/a) or [b](/b)"),
      r#"<a href="/a">a</a> or <a href="/b">b</a>"#
    );
  }

  #[test]
  fn test_url_stops_at_first_paren() {
    assert_eq!(
      convert_links("[wiki](https://en.wikipedia.org/wiki/Rust_(language))"),
      r#"<a href="https://en.wikipedia.org/wiki/Rust_(language">wiki</a>)"#
    );
  }

  #[test]
  fn test_empty_label_is_not_a_link() {
    assert_eq!(convert_links("[](http://x.com)"), "[](http://x.com)");
  }
}
