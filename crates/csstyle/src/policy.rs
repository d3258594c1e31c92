//! Policies: one body shared by several selector groups.
//!
//! A [`Policy`] names a literal body and lists its targets explicitly. Each
//! target is a declaration chain; the selectors of its leaves join the
//! policy's rule in declared target order:
//!
//! ```rust
//! use csstyle::{Policy, Synthesizer, component, part};
//!
//! let policy = Policy::new("offset", "left: 1;")
//!     .target(component(["c3"]).child(part(["p1"])))
//!     .target(component(["c3"]))
//!     .target(component(["c2"]));
//!
//! let rule = Synthesizer::default().policy(&policy).unwrap().unwrap();
//! assert_eq!(rule.selector_text(), r".c3\.p1, .c3, .c2");
//! assert_eq!(rule.body(), "left: 1;");
//! ```

use crate::declaration::Declaration;
use crate::rule::{GroupedRule, SelectorResult};

/// A named body with explicit targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Policy {
    name: String,
    body: String,
    targets: Vec<Declaration>,
}

impl Policy {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            targets: Vec::new(),
        }
    }

    pub fn target(mut self, target: Declaration) -> Self {
        self.targets.push(target);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn targets(&self) -> &[Declaration] {
        &self.targets
    }
}

/// Attaches `body` to every result, keeping their order.
pub fn group(results: Vec<SelectorResult>, body: &str) -> GroupedRule {
    let selectors = results
        .into_iter()
        .map(|result| result.with_body(body))
        .collect();
    GroupedRule::new(selectors, body)
}
