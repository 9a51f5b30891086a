//! Reading a relation back from the text that [`RelationTree::print`] and the `Display` impl
//! produce: one `x - y` pair per line.
//!
//! # Examples
//!
//! ```
//! use relation::RelationTree;
//!
//! let tree: RelationTree<String, String> = "Canada - English\nCanada - French\n".parse().unwrap();
//!
//! assert!(tree.contains(&"Canada".to_string(), &"French".to_string()));
//! assert_eq!(tree.to_string(), "Canada - English\nCanada - French\n");
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::tree::RelationTree;

/// Separates the two elements of a pair on a line.
pub const SEPARATOR: &str = " - ";

/// Why a relation couldn't be read. Every variant carries the 1-based line it happened on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRelationError {
    /// The line has no `" - "` in it.
    #[error("line {line}: expected `x - y`, found {text:?}")]
    MissingSeparator {
        /// Where it happened.
        line: usize,
        /// The offending line.
        text: String,
    },
    /// The text before the separator didn't parse as an `X`.
    #[error("line {line}: invalid first element {text:?}: {reason}")]
    InvalidX {
        /// Where it happened.
        line: usize,
        /// The text that failed to parse.
        text: String,
        /// The element type's own error message.
        reason: String,
    },
    /// The text after the separator didn't parse as a `Y`.
    #[error("line {line}: invalid second element {text:?}: {reason}")]
    InvalidY {
        /// Where it happened.
        line: usize,
        /// The text that failed to parse.
        text: String,
        /// The element type's own error message.
        reason: String,
    },
}

/// Parses a single `x - y` line. The pair is split at the first separator, so only `y` may
/// itself contain `" - "`.
fn parse_pair<X, Y>(line: usize, text: &str) -> Result<(X, Y), ParseRelationError>
where
    X: FromStr,
    X::Err: fmt::Display,
    Y: FromStr,
    Y::Err: fmt::Display,
{
    let (x, y) = text
        .split_once(SEPARATOR)
        .ok_or_else(|| ParseRelationError::MissingSeparator {
            line,
            text: text.to_string(),
        })?;

    let x = x.parse::<X>().map_err(|e| ParseRelationError::InvalidX {
        line,
        text: x.to_string(),
        reason: e.to_string(),
    })?;
    let y = y.parse::<Y>().map_err(|e| ParseRelationError::InvalidY {
        line,
        text: y.to_string(),
        reason: e.to_string(),
    })?;

    Ok((x, y))
}

impl<X, Y> FromStr for RelationTree<X, Y>
where
    X: FromStr + Ord,
    X::Err: fmt::Display,
    Y: FromStr + Ord,
    Y::Err: fmt::Display,
{
    type Err = ParseRelationError;

    /// Blank lines are skipped and `\r\n` line endings are accepted. Repeated pairs collapse
    /// into one, exactly as repeated inserts would.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tree = Self::new();
        for (index, text) in s.lines().enumerate() {
            if text.trim().is_empty() {
                continue;
            }
            let (x, y) = parse_pair(index + 1, text)?;
            tree.insert(x, y);
        }

        Ok(tree)
    }
}
