//! CSS identifier escaping.
//!
//! Symbols such as `.`, `+`, `@` or a custom `/` end up inside class names,
//! so every identifier the synthesizer builds passes through [`escape_ident`]
//! exactly once, when the identifier is constructed. Escaping already-built
//! selector text would double the backslashes.

use std::fmt::Write;

use crate::error::{CsstyleError, Result};

/// Escapes an identifier for use after `.` or `#`.
///
/// - ASCII letters, digits, `-`, `_` and non-ASCII characters pass through.
/// - Any other printable ASCII character becomes `\` + character.
/// - A leading `-` followed by `-`, a digit or nothing is escaped
///   (`--o1` -> `\--o1`, `-` -> `\-`).
/// - A leading digit becomes a hex escape (`1a` -> `\31 a`).
///
/// Whitespace, control characters and the empty string fail with
/// [`CsstyleError::EscapeFailure`].
///
/// ```rust
/// use csstyle::escape::escape_ident;
///
/// assert_eq!(escape_ident("c1.p1").unwrap(), r"c1\.p1");
/// assert_eq!(escape_ident("--o1").unwrap(), r"\--o1");
/// assert_eq!(escape_ident("+t1").unwrap(), r"\+t1");
/// ```
pub fn escape_ident(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(failure(raw));
    }

    let mut escaped = String::with_capacity(raw.len() + 4);
    let mut chars = raw.chars().peekable();
    let mut first = true;

    while let Some(c) = chars.next() {
        if c.is_whitespace() || c.is_control() {
            return Err(failure(raw));
        }

        if first && c.is_ascii_digit() {
            // Hex escapes end at a space so a following hex digit is not absorbed
            let _ = write!(escaped, "\\{:x} ", c as u32);
        } else if first
            && c == '-'
            && chars.peek().is_none_or(|n| *n == '-' || n.is_ascii_digit())
        {
            escaped.push_str("\\-");
        } else if needs_escape(c) {
            escaped.push('\\');
            escaped.push(c);
        } else {
            escaped.push(c);
        }
        first = false;
    }

    Ok(escaped)
}

fn needs_escape(c: char) -> bool {
    c.is_ascii() && !(c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn failure(raw: &str) -> CsstyleError {
    CsstyleError::EscapeFailure {
        ident: raw.to_string(),
    }
}
