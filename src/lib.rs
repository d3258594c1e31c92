//! csstyle-rs: naming-convention selectors with specificity you can check.
//!
//! Re-exports the two workspace crates:
//!
//! - [`csstyle`]: declaration trees, symbols, synthesis, policies, rendering
//! - [`cssel`]: the selector model, parser and stylesheet reader used to
//!   verify what the synthesizer emits
//!
//! ```rust
//! use csstyle_rs::{Stylesheet, SymbolTable, component, option, render};
//! use csstyle_rs::cssel::StyleReader;
//!
//! let sheet = Stylesheet::new().declare(component(["c1"]).child(option(["o1"]).body("top: 0;")));
//! let css = render(&sheet.compile(&SymbolTable::default()).unwrap());
//!
//! let rule = StyleReader::new(css).selector(0).unwrap();
//! assert_eq!(rule.value, r"html .c1.\--o1");
//! assert_eq!(rule.score.to_string(), "0,0,2,1");
//! ```

pub mod log_init;

pub use cssel;
pub use csstyle;

pub use csstyle::{
    CsstyleError, Declaration, DeclarationKind, GroupedRule, Policy, Result, SelectorResult,
    Stylesheet, SymbolKind, SymbolTable, Synthesizer, component, location, option, part, raw,
    render, sibling, tweak,
};
pub use log_init::init_logger;
