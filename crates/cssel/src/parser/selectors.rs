use crate::parser::{parse_group_content, parse_ident, parse_selector_list};
use crate::selector::{
    Combinator, ComplexSelector, CompoundSelector, PseudoArgument, Selector, SelectorPart,
};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until},
    character::complete::{char, multispace0},
    combinator::{all_consuming, cut, map},
    multi::many0,
    sequence::{delimited, preceded, terminated},
};

/// Pseudo-elements that CSS2 allowed with a single colon.
const LEGACY_PSEUDO_ELEMENTS: [&str; 4] = ["before", "after", "first-line", "first-letter"];

/// Pseudo-classes whose argument is a selector list.
const SELECTOR_LIST_PSEUDO_CLASSES: [&str; 4] = ["not", "is", "has", "where"];

/// Parses a simple selector: Type, .Class, #ID, :pseudo, :pseudo(arg), ::pseudo, [attr], `&` or `*`.
pub fn parse_simple_selector(input: &str) -> IResult<&str, Selector> {
    alt((
        map(preceded(char('#'), parse_ident), |s| {
            Selector::Id(s.to_string())
        }),
        map(preceded(char('.'), parse_ident), |s| {
            Selector::Class(s.to_string())
        }),
        map(preceded(tag("::"), parse_ident), |s| {
            Selector::PseudoElement(s.to_string())
        }),
        parse_pseudo_function,
        map(preceded(char(':'), parse_ident), |s| {
            if LEGACY_PSEUDO_ELEMENTS.contains(&s.to_ascii_lowercase().as_str()) {
                Selector::PseudoElement(s.to_string())
            } else {
                Selector::PseudoClass(s.to_string())
            }
        }),
        map(char('&'), |_| Selector::Parent),
        map(char('*'), |_| Selector::Universal),
        parse_attribute_selector,
        map(parse_ident, |s| Selector::Type(s.to_string())),
    ))(input)
}

/// Parses a compound selector (e.g., "html#app" or ".c1.\--o1").
pub fn parse_compound_selector(input: &str) -> IResult<&str, CompoundSelector> {
    let (input, first) = parse_simple_selector(input)?;
    // No whitespace between tokens: whitespace is a descendant combinator
    let (input, rest) = many0(parse_simple_selector)(input)?;

    let mut selectors = vec![first];
    selectors.extend(rest);
    Ok((input, CompoundSelector::new(selectors)))
}

/// Parses a complex selector with combinators (e.g., "#app .\+t1 > .c1").
pub fn parse_complex_selector(input: &str) -> IResult<&str, ComplexSelector> {
    let (mut input, mut current_compound) = parse_compound_selector(input)?;
    let mut parts = Vec::new();

    loop {
        let (rem, ws) = multispace0(input)?;

        let combinator_match: IResult<&str, Combinator> = alt((
            map(char('>'), |_| Combinator::Child),
            map(char('+'), |_| Combinator::AdjacentSibling),
            map(char('~'), |_| Combinator::GeneralSibling),
        ))(rem);

        if let Ok((after_op, found_combinator)) = combinator_match {
            let (after_ws, _) = multispace0(after_op)?;
            match parse_compound_selector(after_ws) {
                Ok((next_input, next_compound)) => {
                    parts.push(SelectorPart::new(current_compound, found_combinator));
                    current_compound = next_compound;
                    input = next_input;
                    continue;
                }
                Err(_) => break,
            }
        }

        // Whitespace followed by another compound is a descendant combinator
        if !ws.is_empty() {
            match parse_compound_selector(rem) {
                Ok((next_input, next_compound)) => {
                    parts.push(SelectorPart::new(current_compound, Combinator::Descendant));
                    current_compound = next_compound;
                    input = next_input;
                    continue;
                }
                Err(_) => break,
            }
        }

        break;
    }

    // The last part always has Combinator::None
    parts.push(SelectorPart::new(current_compound, Combinator::None));
    Ok((input, ComplexSelector::new(parts)))
}

fn parse_pseudo_function(input: &str) -> IResult<&str, Selector> {
    let (input, name) = preceded(char(':'), parse_ident)(input)?;
    let (input, _) = char('(')(input)?;
    // Past the `(` this can only be a functional pseudo-class
    let (input, content) = cut(terminated(parse_group_content, char(')')))(input)?;

    let argument = if SELECTOR_LIST_PSEUDO_CLASSES.contains(&name.to_ascii_lowercase().as_str()) {
        let (_, list) = cut(all_consuming(terminated(parse_selector_list, multispace0)))(content)?;
        PseudoArgument::Selectors(list)
    } else {
        PseudoArgument::Text(content.trim().to_string())
    };

    Ok((input, Selector::PseudoFunction(name.to_string(), argument)))
}

fn parse_attribute_selector(input: &str) -> IResult<&str, Selector> {
    let (input, content) = delimited(char('['), take_until("]"), char(']'))(input)?;

    if let Some(idx) = content.find('=') {
        let name = content[..idx].trim();
        let value = content[idx + 1..].trim();
        Ok((
            input,
            Selector::Attribute(name.to_string(), value.to_string()),
        ))
    } else {
        Ok((
            input,
            Selector::Attribute(content.trim().to_string(), "".to_string()),
        ))
    }
}
