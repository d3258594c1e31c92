//! # cssel - CSS selectors and specificity
//!
//! A small selector toolkit: a structured selector model, a `nom` parser for
//! selector text (CSS escapes included), and a reader that pulls rules out of
//! rendered stylesheets and recomputes their specificity.
//!
//! ## Quick Start
//!
//! ```rust
//! use cssel::parser::parse_selector;
//!
//! let selector = parse_selector(r"html#app .\+t1 .c1\.p1.\--o1").unwrap();
//! assert_eq!(selector.specificity().to_string(), "0,1,3,1");
//! assert_eq!(selector.to_string(), r"html#app .\+t1 .c1\.p1.\--o1");
//! ```
//!
//! ## Supported Selectors
//!
//! - Type selectors: `html`, `div`
//! - Class selectors: `.c1`, `.c1\.p1` (escapes kept verbatim)
//! - ID selectors: `#app`
//! - Universal selector: `*`
//! - Pseudo-classes: `:hover`, `:nth-child(2n + 1)`, `:not(.x, #y)`;
//!   pseudo-elements: `::before`, `:before`
//! - Attribute selectors: `[type=text]`, `[disabled]`
//! - Parent reference: `&`
//! - Combinators: descendant (space), child (`>`), adjacent (`+`), general sibling (`~`)
//!
//! ## Modules
//!
//! - [`selector`]: selector data structures and [`Specificity`]
//! - [`parser`]: selector and rule parsing
//! - [`reader`]: rendered stylesheet inspection
//! - [`error`]: error types

pub mod error;
pub mod parser;
pub mod reader;
pub mod selector;

pub use error::CsselError;
pub use reader::{ReadRule, StyleReader, calculate, read_rules};
pub use selector::{
    Combinator, ComplexSelector, CompoundSelector, PseudoArgument, Selector, SelectorList,
    SelectorPart, Specificity,
};
