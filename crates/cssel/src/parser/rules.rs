//! Rule block parsing for rendered stylesheets.
//!
//! Rendered CSS only needs to be split into `selector { body }` blocks, so
//! the selector text and the body are taken verbatim (trimmed) and the
//! selector is parsed separately by the reader.
//!
//! Block comments (`/* */`) are stripped before splitting. Strings and
//! parenthesised groups inside a body are opaque, so `content: "}"` or
//! `url(data:image/png;base64,...)` neither close a block nor split it.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{is_not, take_until},
    character::complete::{char, multispace0},
    combinator::recognize,
    multi::{many0, many0_count},
    sequence::delimited,
};

use crate::parser::{parse_parenthesised, parse_string};

/// A `selector { body }` block with both sides trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleBlock<'a> {
    pub selector: &'a str,
    pub body: &'a str,
}

/// Parses one rule block.
pub fn parse_rule(input: &str) -> IResult<&str, RuleBlock<'_>> {
    let (input, _) = multispace0(input)?;
    let (input, selector) = take_until("{")(input)?;
    let (input, body) = delimited(char('{'), parse_block_content, char('}'))(input)?;

    Ok((
        input,
        RuleBlock {
            selector: selector.trim(),
            body: body.trim(),
        },
    ))
}

/// Parses every rule block in order, returning any unparsed tail.
pub fn parse_rules(input: &str) -> IResult<&str, Vec<RuleBlock<'_>>> {
    let (input, rules) = many0(parse_rule)(input)?;
    let (input, _) = multispace0(input)?;
    Ok((input, rules))
}

fn parse_block_content(input: &str) -> IResult<&str, &str> {
    recognize(many0_count(alt((
        parse_string,
        parse_parenthesised,
        is_not("}\"'("),
    ))))(input)
}

/// One declaration: everything up to a `;` outside strings and groups.
fn parse_declaration(input: &str) -> IResult<&str, &str> {
    recognize(many0_count(alt((
        parse_string,
        parse_parenthesised,
        is_not(";\"'("),
    ))))(input)
}

/// Splits a rule body on top-level `;`, trimming each declaration and
/// dropping empty ones.
///
/// Unbalanced text (an unclosed string or group) is kept whole as the last
/// declaration.
pub fn split_declarations(body: &str) -> Vec<&str> {
    let mut declarations = Vec::new();
    let mut rest = body;

    while !rest.is_empty() {
        match parse_declaration(rest) {
            Ok((tail, declaration)) if tail.starts_with(';') => {
                declarations.push(declaration);
                rest = &tail[1..];
            }
            Ok((tail, declaration)) if tail.is_empty() => {
                declarations.push(declaration);
                rest = tail;
            }
            _ => {
                declarations.push(rest);
                rest = "";
            }
        }
    }

    declarations
        .into_iter()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .collect()
}

/// Removes block comments from stylesheet text.
pub fn strip_comments(source: &str) -> String {
    let mut clean_source = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            while let Some(inner) = chars.next() {
                if inner == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    break;
                }
            }
            continue;
        }
        clean_source.push(c);
    }
    clean_source
}
