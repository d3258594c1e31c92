//! Error types for selector parsing and stylesheet reading.

use thiserror::Error;

/// Errors that can occur while parsing selectors or reading rendered CSS.
///
/// # Examples
///
/// ```rust
/// use cssel::parser::parse_selector;
///
/// // A dangling combinator is not a selector
/// assert!(parse_selector(".c1 >").is_err());
/// ```
#[derive(Error, Debug)]
pub enum CsselError {
    /// Invalid selector or rule syntax was encountered.
    ///
    /// The string contains details about what was unexpected and where.
    #[error("CSS syntax error: {0}")]
    InvalidSyntax(String),

    /// The stylesheet text contained no rules at all.
    #[error("stylesheet contains no rules")]
    Empty,

    /// A rule index past the end of the stylesheet was requested.
    #[error("no rule at index {0}")]
    MissingRule(usize),

    /// An I/O error occurred while reading a stylesheet file.
    #[error("I/O error reading stylesheet")]
    Io(#[from] std::io::Error),
}
