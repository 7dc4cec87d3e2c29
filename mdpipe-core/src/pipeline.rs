//! The ordered rule pipeline.
//!
//! A [`Pipeline`] owns a fixed list of [`Rule`]s built once at construction.
//! [`Pipeline::convert`] threads a document through every rule in order, each
//! rule seeing the output of the one before it. The order is load-bearing:
//! bold must precede italic, and paragraphs must come last.
//!
//! # Examples
//!
//! ```
//! use mdpipe_core::Pipeline;
//!
//! let pipeline = Pipeline::new();
//! let html = pipeline.convert("# Hi\n\nThis is **bold**.");
//! assert!(html.contains("<h1>Hi</h1>"));
//! assert!(html.contains("<strong>bold</strong>"));
//! ```
use log::{debug, trace};

use crate::{
  options::{ListMode, PipelineOptions},
  rules,
};

/// Signature shared by every rule.
pub type RuleFn = fn(&str) -> String;

/// A named, pure document transformation.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
  name:      &'static str,
  transform: RuleFn,
}

impl Rule {
  #[must_use]
  pub const fn new(name: &'static str, transform: RuleFn) -> Self {
    Self { name, transform }
  }

  /// Stable identifier of the rule.
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  /// Run the rule over a whole document.
  #[must_use]
  pub fn apply(&self, text: &str) -> String {
    (self.transform)(text)
  }
}

/// Snapshot of the document right after one rule ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleStage {
  /// Name of the rule that produced `output`.
  pub rule:   &'static str,
  /// Document after the rule was applied.
  pub output: String,
}

/// Fixed, ordered sequence of rules.
///
/// Immutable after construction, so a single pipeline can be shared across
/// threads and used for any number of documents.
#[derive(Debug, Clone)]
pub struct Pipeline {
  options: PipelineOptions,
  rules:   Vec<Rule>,
}

impl Pipeline {
  /// Pipeline with default options.
  #[must_use]
  pub fn new() -> Self {
    Self::with_options(PipelineOptions::default())
  }

  /// Pipeline whose rule variants are chosen by `options`.
  #[must_use]
  pub fn with_options(options: PipelineOptions) -> Self {
    let lists: RuleFn = match options.list_mode {
      ListMode::Greedy => rules::convert_lists,
      ListMode::Grouped => rules::convert_lists_grouped,
    };

    let rules = vec![
      Rule::new(rules::HEADERS, rules::convert_headers),
      Rule::new(rules::BOLD, rules::convert_bold),
      Rule::new(rules::ITALIC, rules::convert_italic),
      Rule::new(rules::LINKS, rules::convert_links),
      Rule::new(rules::LISTS, lists),
      Rule::new(rules::CODE_BLOCKS, rules::convert_code_blocks),
      Rule::new(rules::BLOCKQUOTES, rules::convert_blockquotes),
      Rule::new(rules::HORIZONTAL_RULES, rules::convert_horizontal_rules),
      Rule::new(rules::PARAGRAPHS, rules::convert_paragraphs),
    ];
    debug!(
      "Built pipeline with {} rules (list mode: {})",
      rules.len(),
      options.list_mode
    );

    Self { options, rules }
  }

  /// Options this pipeline was built with.
  #[must_use]
  pub const fn options(&self) -> &PipelineOptions {
    &self.options
  }

  /// Rules in application order.
  #[must_use]
  pub fn rules(&self) -> &[Rule] {
    &self.rules
  }

  /// Rule names in application order.
  #[must_use]
  pub fn rule_names(&self) -> Vec<&'static str> {
    self.rules.iter().map(Rule::name).collect()
  }

  /// Convert a Markdown document to an HTML fragment.
  ///
  /// Never fails; a document without any Markdown syntax comes back wrapped
  /// in a paragraph.
  #[must_use]
  pub fn convert(&self, markdown: &str) -> String {
    self.rules.iter().fold(markdown.to_owned(), |text, rule| {
      let output = rule.apply(&text);
      trace!(
        "Rule '{}': {} -> {} bytes",
        rule.name(),
        text.len(),
        output.len()
      );
      output
    })
  }

  /// Run the pipeline and keep the document produced by every rule.
  ///
  /// The last stage's output is identical to [`Pipeline::convert`].
  #[must_use]
  pub fn stages(&self, markdown: &str) -> Vec<RuleStage> {
    let mut stages: Vec<RuleStage> = Vec::with_capacity(self.rules.len());
    for rule in &self.rules {
      let input = stages
        .last()
        .map_or(markdown, |stage| stage.output.as_str());
      let output = rule.apply(input);
      stages.push(RuleStage {
        rule: rule.name(),
        output,
      });
    }
    stages
  }
}

impl Default for Pipeline {
  fn default() -> Self {
    Self::new()
  }
}
