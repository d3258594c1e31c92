//! Error types for selector synthesis and symbol configuration.
//!
//! Every failure surfaces synchronously from the call that caused it. A
//! synthesis pass either yields all of its rules or none of them.

use cssel::CsselError;
use thiserror::Error;

/// Errors that can occur while configuring symbols or synthesizing selectors.
///
/// # Examples
///
/// ```rust
/// use csstyle::{CsstyleError, SymbolTable, Synthesizer, option};
///
/// // An option needs something to modify
/// let result = Synthesizer::new(&SymbolTable::default()).synthesize(&option(["o1"]).body("top: 0;"));
/// assert!(matches!(result, Err(CsstyleError::InvalidNesting { .. })));
/// ```
#[derive(Error, Debug)]
pub enum CsstyleError {
    /// A declaration appeared where its structure cannot apply.
    ///
    /// `path` is the chain of declarations leading to the offender, e.g.
    /// `component(c1) > option(o1)`.
    #[error("invalid nesting at `{path}`: {reason}")]
    InvalidNesting { path: String, reason: String },

    /// A symbol was configured for a kind that does not exist.
    #[error("unknown symbol kind: {0}")]
    UnknownSymbolKind(String),

    /// An identifier holds a character that cannot be written as a CSS escape.
    #[error("cannot escape identifier {ident:?}")]
    EscapeFailure { ident: String },

    /// A raw selector fragment could not be parsed.
    #[error("invalid selector fragment: {0}")]
    InvalidSelector(#[from] CsselError),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CsstyleError>;
