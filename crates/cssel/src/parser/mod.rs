//! Selector and rule parsing.
//!
//! - [`parse_selector`]: one complex selector, consuming the whole input
//! - [`parse_selector_group`]: a comma-separated list, consuming the whole input
//! - [`parse_selector_list`]: the streaming `nom` parser behind both
//! - [`parse_ident`]: identifiers, CSS escapes included
//! - [`parse_string`], [`parse_parenthesised`]: opaque runs skipped when
//!   splitting on `,`, `;` or `)`
//!
//! ## Submodules
//!
//! - [`selectors`]: simple, compound and complex selector parsers
//! - [`rules`]: `selector { body }` blocks of rendered stylesheets
//!
//! ## Example
//!
//! ```rust
//! use cssel::parser::parse_selector;
//! use cssel::Selector;
//!
//! let complex = parse_selector(r"html .c1.\--o1").unwrap();
//! assert_eq!(complex.parts.len(), 2);
//! assert_eq!(
//!     complex.parts[1].compound.selectors[1],
//!     Selector::Class(r"\--o1".to_string())
//! );
//! ```

pub mod rules;
pub mod selectors;

pub use crate::parser::rules::{parse_rule, parse_rules, split_declarations, strip_comments};
pub use crate::parser::selectors::{
    parse_complex_selector, parse_compound_selector, parse_simple_selector,
};

use crate::CsselError;
use crate::selector::{ComplexSelector, SelectorList};

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{is_not, take_while_m_n, take_while1},
    character::complete::{char, multispace0, satisfy},
    combinator::{opt, recognize},
    multi::{many0, many0_count, many1_count},
    sequence::{delimited, pair, preceded, tuple},
};

/// Parses an identifier, keeping escape sequences verbatim.
///
/// Accepts letters, digits, `-`, `_`, non-ASCII characters, and escapes:
/// `\` followed by one to six hex digits and an optional space, or `\`
/// followed by any other character.
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    recognize(many1_count(alt((take_while1(is_ident_char), parse_escape))))(input)
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn parse_escape(input: &str) -> IResult<&str, &str> {
    recognize(preceded(
        char('\\'),
        alt((
            recognize(pair(
                take_while_m_n(1, 6, |c: char| c.is_ascii_hexdigit()),
                opt(char(' ')),
            )),
            recognize(satisfy(|c| c != '\n' && c != '\r' && c != '\x0c')),
        )),
    ))(input)
}

/// Parses a quoted string, quotes and escapes included.
pub fn parse_string(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(delimited(
            char('"'),
            many0_count(alt((parse_escape, is_not("\"\\")))),
            char('"'),
        )),
        recognize(delimited(
            char('\''),
            many0_count(alt((parse_escape, is_not("'\\")))),
            char('\''),
        )),
    ))(input)
}

/// Parses a `( ... )` group, nested groups and strings included.
pub fn parse_parenthesised(input: &str) -> IResult<&str, &str> {
    recognize(delimited(char('('), parse_group_content, char(')')))(input)
}

/// Everything up to the `)` that closes the current group.
pub(crate) fn parse_group_content(input: &str) -> IResult<&str, &str> {
    recognize(many0_count(alt((
        parse_string,
        parse_parenthesised,
        parse_escape,
        is_not("()\"'\\"),
    ))))(input)
}

/// Parses a comma-separated list of selectors (e.g., ".c1, .c2").
pub fn parse_selector_list(input: &str) -> IResult<&str, SelectorList> {
    let (input, _) = multispace0(input)?;
    let (input, first) = parse_complex_selector(input)?;
    let (input, rest) = many0(preceded(
        tuple((multispace0, char(','), multispace0)),
        parse_complex_selector,
    ))(input)?;

    let mut selectors = vec![first];
    selectors.extend(rest);
    Ok((input, SelectorList::new(selectors)))
}

/// Parses exactly one complex selector; trailing input is an error.
pub fn parse_selector(source: &str) -> Result<ComplexSelector, CsselError> {
    let (remaining, complex) = parse_complex_selector(source.trim())
        .map_err(|e| CsselError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(CsselError::InvalidSyntax(format!(
            "Unexpected tokens after selector: {}",
            remaining.trim()
        )));
    }

    Ok(complex)
}

/// Parses a full selector group; trailing input is an error.
pub fn parse_selector_group(source: &str) -> Result<SelectorList, CsselError> {
    let (remaining, list) =
        parse_selector_list(source).map_err(|e| CsselError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(CsselError::InvalidSyntax(format!(
            "Unexpected tokens at end of selector list: {}",
            remaining.trim()
        )));
    }

    Ok(list)
}
