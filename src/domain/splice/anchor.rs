use std::sync::LazyLock;

use regex::Regex;

use super::syntax::{self, Dialect};
use super::{NormalizedText, SpliceError};

/// Anchor for the root layout: the JSX `return` of the document shell.
pub const ROOT_ANCHOR: &str = "return ( <html";

static ROOT_ANCHOR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"return ?\( ?<html\b").expect("root anchor pattern is valid"));

/// Locate the root layout anchor and return its byte offset in `source`.
///
/// The search runs over the whitespace-normalized text so line breaks and
/// indentation between `return`, `(` and `<html` do not matter. Matches
/// inside comments or string literals are skipped.
pub fn locate_root_anchor(source: &str, dialect: Dialect) -> Result<Option<usize>, SpliceError> {
    let normalized = NormalizedText::new(source);
    let tree = syntax::parse(source, dialect)?;
    Ok(ROOT_ANCHOR_PATTERN
        .find_iter(normalized.as_str())
        .map(|m| normalized.origin(m.start()))
        .find(|&offset| !syntax::in_comment_or_string(&tree, offset)))
}
