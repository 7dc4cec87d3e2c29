//! The individual rewrite rules, one Markdown construct each.
//!
//! Every rule is a pure `&str -> String` function and is total: when its
//! pattern finds nothing to match the input comes back unchanged.
mod blockquotes;
mod code_blocks;
mod emphasis;
mod headers;
mod horizontal_rules;
mod links;
mod lists;
mod paragraphs;

pub use blockquotes::convert_blockquotes;
pub use code_blocks::convert_code_blocks;
pub use emphasis::{convert_bold, convert_italic};
pub use headers::convert_headers;
pub use horizontal_rules::convert_horizontal_rules;
pub use links::convert_links;
pub use lists::{convert_lists, convert_lists_grouped};
pub use paragraphs::convert_paragraphs;

pub const HEADERS: &str = "headers";
pub const BOLD: &str = "bold";
pub const ITALIC: &str = "italic";
pub const LINKS: &str = "links";
pub const LISTS: &str = "lists";
pub const CODE_BLOCKS: &str = "code_blocks";
pub const BLOCKQUOTES: &str = "blockquotes";
pub const HORIZONTAL_RULES: &str = "horizontal_rules";
pub const PARAGRAPHS: &str = "paragraphs";

/// Rule names in the order the pipeline applies them.
pub const RULE_ORDER: [&str; 9] = [
  HEADERS,
  BOLD,
  ITALIC,
  LINKS,
  LISTS,
  CODE_BLOCKS,
  BLOCKQUOTES,
  HORIZONTAL_RULES,
  PARAGRAPHS,
];
