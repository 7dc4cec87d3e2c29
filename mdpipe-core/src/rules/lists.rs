//! Unordered (`-`, `*`, `+`) and ordered (`1.`) list items.
//!
//! Two strategies are available. [`convert_lists`] rewrites item lines and
//! then wraps the single greedy span from the first `<li>` to the last
//! `</li>` in the document, once for `<ul>` and once for `<ol>`. Disjoint
//! lists therefore merge, and an unordered list also ends up inside an `<ol>`
//! because the ordered pass sees the items produced by the unordered one.
//!
//! [`convert_lists_grouped`] scans line by line and wraps each run of
//! consecutive items of the same kind in its own list element.
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::compile_pattern;

static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
  compile_pattern("UNORDERED_ITEM", r"(?m)^\s*[-*+]\s(.+)$")
});

static ORDERED_ITEM: LazyLock<Regex> =
  LazyLock::new(|| compile_pattern("ORDERED_ITEM", r"(?m)^\s*\d+\.\s(.+)$"));

/// Greedy span from the first `<li>` to the last `</li>`.
static LIST_ITEMS_SPAN: LazyLock<Regex> =
  LazyLock::new(|| compile_pattern("LIST_ITEMS_SPAN", r"(?s)(<li>.*</li>)"));

static UNORDERED_LINE: LazyLock<Regex> = LazyLock::new(|| {
  compile_pattern("UNORDERED_LINE", r"^[^\S\n]*[-*+]\s(.+)$")
});

static ORDERED_LINE: LazyLock<Regex> =
  LazyLock::new(|| compile_pattern("ORDERED_LINE", r"^[^\S\n]*\d+\.\s(.+)$"));

/// Rewrite list items and wrap them with one greedy match per list kind.
#[must_use]
pub fn convert_lists(text: &str) -> String {
  let text = UNORDERED_ITEM.replace_all(text, "<li>${1}</li>");
  let text = LIST_ITEMS_SPAN.replace_all(&text, "<ul>${1}</ul>");

  let text = ORDERED_ITEM.replace_all(&text, "<li>${1}</li>");
  LIST_ITEMS_SPAN
    .replace_all(&text, "<ol>${1}</ol>")
    .into_owned()
}

/// Kind of list a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
  Unordered,
  Ordered,
}

impl ListKind {
  const fn open_tag(self) -> &'static str {
    match self {
      Self::Unordered => "<ul>",
      Self::Ordered => "<ol>",
    }
  }

  const fn close_tag(self) -> &'static str {
    match self {
      Self::Unordered => "</ul>",
      Self::Ordered => "</ol>",
    }
  }
}

/// Scanner state for [`convert_lists_grouped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
  Outside,
  Inside(ListKind),
}

/// Classify a single line, returning the item text if it is a list item.
fn classify_line(line: &str) -> Option<(ListKind, &str)> {
  if let Some(caps) = UNORDERED_LINE.captures(line) {
    return caps.get(1).map(|m| (ListKind::Unordered, m.as_str()));
  }
  ORDERED_LINE
    .captures(line)
    .and_then(|caps| caps.get(1))
    .map(|m| (ListKind::Ordered, m.as_str()))
}

/// Rewrite list items, wrapping each run of same-kind items separately.
///
/// The opening tag is prepended to the first item of a run and the closing
/// tag appended to its last item, so line structure is preserved.
#[must_use]
pub fn convert_lists_grouped(text: &str) -> String {
  let mut lines: Vec<String> = Vec::new();
  let mut state = ListState::Outside;

  for line in text.split('\n') {
    match (state, classify_line(line)) {
      (ListState::Inside(current), Some((kind, item))) if current == kind => {
        lines.push(format!("<li>{item}</li>"));
      },
      (_, Some((kind, item))) => {
        close_list(&mut lines, state);
        lines.push(format!("{}<li>{item}</li>", kind.open_tag()));
        state = ListState::Inside(kind);
      },
      (_, None) => {
        close_list(&mut lines, state);
        lines.push(line.to_owned());
        state = ListState::Outside;
      },
    }
  }
  close_list(&mut lines, state);

  lines.join("\n")
}

fn close_list(lines: &mut [String], state: ListState) {
  if let ListState::Inside(kind) = state {
    if let Some(last) = lines.last_mut() {
      last.push_str(kind.close_tag());
    }
  }
}
