//! Regex helpers shared by the rules.
use log::error;
use regex::Regex;

/// Compile a rule pattern, falling back to [`never_matching_regex`] and
/// logging the failure instead of panicking.
///
/// Every rule must stay total over its input, so a pattern that fails to
/// compile degrades into a rule that leaves the document untouched.
pub(crate) fn compile_pattern(name: &str, pattern: &str) -> Regex {
  Regex::new(pattern).unwrap_or_else(|e| {
    error!(
      "Failed to compile {name} regex: {e}\n Falling back to never matching \
       regex."
    );
    never_matching_regex()
  })
}

/// Create a regex that never matches anything.
///
/// The pattern asserts something impossible, so it is guaranteed to compile
/// and can never match, not even the empty string.
#[must_use]
pub fn never_matching_regex() -> Regex {
  #[allow(
    clippy::expect_used,
    reason = "This pattern is guaranteed to be valid"
  )]
  Regex::new(r"[^\s\S]").expect("regex pattern [^\\s\\S] should always compile")
}
