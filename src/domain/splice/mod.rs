//! Idempotent insertion of generated fragments into existing source files.
//!
//! Inserted regions are wrapped in sentinel comments; a file that already
//! carries the sentinel (or the verbatim fragment) is never touched again.

mod anchor;
mod imports;
mod normalize;
mod sentinel;
pub mod syntax;

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::AppError;

pub use anchor::{ROOT_ANCHOR, locate_root_anchor};
pub use imports::ensure_navigation_imports;
pub use normalize::NormalizedText;
pub use sentinel::{NAVIGATION, PUSH_SUBSCRIPTION, Sentinel, WORKER_REGISTRATION};
pub use syntax::Dialect;

/// Splicing failure, independent of which file was being edited.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    #[error("anchor `{0}` not found")]
    AnchorNotFound(&'static str),
    #[error("spliced source no longer parses")]
    Malformed,
    #[error("{0}")]
    Parser(String),
}

impl SpliceError {
    /// Attach the file being edited.
    pub fn at(self, path: impl Into<PathBuf>) -> AppError {
        let path = path.into();
        match self {
            SpliceError::AnchorNotFound(anchor) => {
                AppError::AnchorNotFound { path, anchor: anchor.to_string() }
            }
            SpliceError::Malformed => AppError::MalformedSplice(path),
            SpliceError::Parser(details) => {
                AppError::ParseError { what: path.display().to_string(), details }
            }
        }
    }
}

/// Result of a splice attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// New file content with the fragment inserted.
    Inserted(String),
    /// The fragment is already present; nothing to write.
    AlreadyPresent,
}

/// Insert the navigation `fragment` into a root layout, right before its `return ( <html`.
///
/// Also ensures the imports the fragment depends on. The result is re-parsed;
/// if the original parsed cleanly and the result does not, nothing is returned.
pub fn splice_root_layout(
    source: &str,
    fragment: &str,
    dialect: Dialect,
) -> Result<SpliceOutcome, SpliceError> {
    if NAVIGATION.is_present(source) || contains_verbatim(source, fragment) {
        return Ok(SpliceOutcome::AlreadyPresent);
    }

    let anchor = locate_root_anchor(source, dialect)?.ok_or(SpliceError::AnchorNotFound(ROOT_ANCHOR))?;
    let with_fragment = insert_before(source, anchor, NAVIGATION, fragment);
    let with_imports = ensure_navigation_imports(&with_fragment, dialect)?;
    let result = tidy(&with_imports);

    if syntax::has_errors(source, dialect)? {
        log::warn!("root layout already had syntax errors; skipping post-splice validation");
    } else if syntax::has_errors(&result, dialect)? {
        return Err(SpliceError::Malformed);
    }

    Ok(SpliceOutcome::Inserted(result))
}

/// Append `fragment` to the end of `source` unless `sentinel` or the verbatim text is present.
pub fn append_fragment(source: &str, fragment: &str, sentinel: Sentinel) -> SpliceOutcome {
    if sentinel.is_present(source) || contains_verbatim(source, fragment) {
        return SpliceOutcome::AlreadyPresent;
    }

    let eol = line_ending(source);
    let block = sentinel.wrap(fragment, "").replace('\n', eol);
    let body = source.trim_end();
    if body.is_empty() {
        SpliceOutcome::Inserted(block)
    } else {
        SpliceOutcome::Inserted(format!("{body}{eol}{eol}{block}"))
    }
}

/// CRLF if the source uses it anywhere, LF otherwise.
fn line_ending(source: &str) -> &'static str {
    if source.contains("\r\n") { "\r\n" } else { "\n" }
}

fn contains_verbatim(source: &str, fragment: &str) -> bool {
    let fragment = fragment.trim();
    !fragment.is_empty() && source.contains(fragment)
}

/// Insert the wrapped fragment immediately before byte offset `anchor`, using the anchor line's indentation.
fn insert_before(source: &str, anchor: usize, sentinel: Sentinel, fragment: &str) -> String {
    let line_start = source[..anchor].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &source[line_start..anchor];
    let indent: String = prefix.chars().take_while(|c| c.is_whitespace()).collect();
    let block = sentinel.wrap(fragment, &indent);

    if prefix.trim().is_empty() {
        format!("{}{}{}", &source[..line_start], block, &source[line_start..])
    } else {
        format!("{}\n{}{}{}", &source[..anchor], block, indent, &source[anchor..])
    }
}

/// Strip trailing whitespace, collapse consecutive blank lines and end with exactly one newline.
///
/// Line endings follow the source (CRLF if it has any).
pub fn tidy(source: &str) -> String {
    let eol = line_ending(source);
    let mut out = String::with_capacity(source.len());
    let mut previous_blank = false;

    for line in source.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            if previous_blank {
                continue;
            }
            previous_blank = true;
        } else {
            previous_blank = false;
        }
        out.push_str(line);
        out.push_str(eol);
    }

    while out.ends_with(&format!("{eol}{eol}")) {
        out.truncate(out.len() - eol.len());
    }
    out
}
