//! # csstyle - naming-convention selectors
//!
//! Builds CSS selectors for the csstyle convention from declaration trees and
//! scores them. Components, parts, options, tweaks and locations nest the way
//! their styles do; the synthesizer turns each nesting chain into one selector
//! with the specificity the convention promises.
//!
//! ## Quick Start
//!
//! ```rust
//! use csstyle::{SymbolTable, Synthesizer, component, option, part, render};
//!
//! let tree = component(["c1"])
//!     .child(part(["p1"]).body("top: 0;"))
//!     .child(option(["o1"]).body("left: 1;"));
//!
//! let rules = Synthesizer::new(&SymbolTable::default()).synthesize(&tree).unwrap();
//! assert_eq!(rules[0].selector_text(), r".c1\.p1");
//! assert_eq!(rules[1].selector_text(), r"html .c1.\--o1");
//! assert_eq!(rules[1].specificities()[0].to_string(), "0,0,2,1");
//!
//! let css = render(&rules);
//! assert!(css.starts_with(".c1\\.p1 {\n  top: 0;\n}\n"));
//! ```
//!
//! ## Symbols
//!
//! The prefix or separator for every kind lives in a [`SymbolTable`]. A
//! [`Synthesizer`] snapshots the table it is built from, so reconfiguring a
//! table never changes a pass already underway.
//!
//! | kind | default |
//! |------|---------|
//! | component | (none) |
//! | part | `.` |
//! | option | `--` |
//! | tweak | `+` |
//! | location | `@` |
//! | root id | `app` |
//!
//! ## Modules
//!
//! - [`declaration`]: declaration trees and their builders
//! - [`symbols`]: configurable prefixes and separators
//! - [`synthesize`]: the selector synthesizer
//! - [`specificity`]: structural scoring
//! - [`policy`]: one body shared by many selector groups
//! - [`stylesheet`]: ordered compilation units
//! - [`render`]: CSS text output
//! - [`escape`]: CSS identifier escaping
//! - [`error`]: error types

pub mod declaration;
pub mod error;
pub mod escape;
pub mod policy;
pub mod render;
pub mod rule;
pub mod specificity;
pub mod stylesheet;
pub mod symbols;
pub mod synthesize;

pub use declaration::{
    Declaration, DeclarationKind, component, location, option, part, raw, sibling, tweak,
};
pub use error::{CsstyleError, Result};
pub use escape::escape_ident;
pub use policy::{Policy, group};
pub use render::render;
pub use rule::{GroupedRule, SelectorResult};
pub use specificity::{Tally, score};
pub use stylesheet::{Item, Stylesheet};
pub use symbols::{SymbolKind, SymbolTable};
pub use synthesize::{ScopeFlags, Synthesizer};
