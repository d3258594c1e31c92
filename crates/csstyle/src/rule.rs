//! Synthesized selectors and the rules that group them.

use cssel::{ComplexSelector, Specificity};

use crate::specificity::{Tally, score};

/// One synthesized selector with its score and the body it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorResult {
    selector: ComplexSelector,
    text: String,
    tally: Tally,
    body: String,
}

impl SelectorResult {
    pub fn new(selector: ComplexSelector, tally: Tally, body: impl Into<String>) -> Self {
        Self {
            text: selector.to_string(),
            selector,
            tally,
            body: body.into(),
        }
    }

    /// The selector as CSS text, escapes applied.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selector(&self) -> &ComplexSelector {
        &self.selector
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn specificity(&self) -> Specificity {
        score(self)
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub(crate) fn with_body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }
}

/// Selectors sharing one literal body, rendered as a single CSS rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupedRule {
    selectors: Vec<SelectorResult>,
    body: String,
}

impl GroupedRule {
    pub fn new(selectors: Vec<SelectorResult>, body: impl Into<String>) -> Self {
        Self {
            selectors,
            body: body.into(),
        }
    }

    pub fn selectors(&self) -> &[SelectorResult] {
        &self.selectors
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Comma-joined selector text, e.g. `.c1, .c2`.
    pub fn selector_text(&self) -> String {
        self.selectors
            .iter()
            .map(SelectorResult::text)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn specificities(&self) -> Vec<Specificity> {
        self.selectors.iter().map(SelectorResult::specificity).collect()
    }
}
