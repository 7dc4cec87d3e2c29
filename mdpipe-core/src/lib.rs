//! # mdpipe-core
//!
//! Converts Markdown into an HTML fragment by running a fixed, ordered
//! sequence of regex rewrite rules over the raw text. There is no syntax tree:
//! every rule sees the whole document as produced by the rule before it.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = mdpipe_core::convert("# Hi\n\nThis is **bold** and *italic*.");
//!
//! assert!(html.contains("<h1>Hi</h1>"));
//! assert!(html.contains("<em>italic</em>"));
//! assert!(html.contains("</p><p>"));
//! ```
//!
//! ## Rule order
//!
//! 1. headers
//! 2. bold
//! 3. italic
//! 4. links
//! 5. lists
//! 6. code blocks
//! 7. blockquotes
//! 8. horizontal rules
//! 9. paragraphs
//!
//! This is not a `CommonMark` parser. Interacting constructs (emphasis inside
//! code blocks, lists inside quotes) come out however the rule order happens
//! to treat them, and converting the output a second time is not a no-op.
//!
//! ## Options
//!
//! ```rust
//! use mdpipe_core::{ListMode, Pipeline, PipelineOptions};
//!
//! let pipeline =
//!   Pipeline::with_options(PipelineOptions::with_list_mode(ListMode::Grouped));
//! let html = pipeline.convert("- a\n\ntext\n\n- b");
//! assert_eq!(html.matches("<ul>").count(), 2);
//! ```
use std::sync::LazyLock;

pub mod options;
pub mod pipeline;
pub mod rules;
pub mod utils;

pub use crate::{
  options::{ListMode, ParseListModeError, PipelineOptions},
  pipeline::{Pipeline, Rule, RuleFn, RuleStage},
};

static DEFAULT_PIPELINE: LazyLock<Pipeline> = LazyLock::new(Pipeline::new);

/// Convert Markdown with the default pipeline.
///
/// Shorthand for `Pipeline::new().convert(markdown)` that reuses one shared
/// pipeline.
#[must_use]
pub fn convert(markdown: &str) -> String {
  DEFAULT_PIPELINE.convert(markdown)
}
