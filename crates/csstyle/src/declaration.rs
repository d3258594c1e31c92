//! The declaration tree.
//!
//! A [`Declaration`] is one naming construct with its names, an optional
//! literal body, and nested declarations:
//!
//! ```rust
//! use csstyle::{component, option, part};
//!
//! // component(c1, c2) { part(p1) { option(o1) { top: 0; } } }
//! let tree = component(["c1", "c2"])
//!     .child(part(["p1"]).child(option(["o1"]).body("top: 0;")));
//!
//! assert_eq!(tree.names(), ["c1", "c2"]);
//! assert_eq!(tree.children().len(), 1);
//! ```
//!
//! Several names on one declaration form a comma group; the synthesizer
//! expands the cross product of every group along a path.

use std::fmt;

/// The closed set of declaration kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// A block: `.c1`.
    Component,
    /// A sub-element named after its block: `.c1\.p1`.
    Part,
    /// A modifier class on the current element: `.c1.\--o1`.
    Option,
    /// A root-scoped override: `#app .\+t1`.
    Tweak,
    /// A placement context: `.\@l1`.
    Location,
    /// Ordinary selector text such as `&:hover` or `.class`.
    Raw,
    /// Repeats the current element behind an adjacent-sibling combinator.
    Sibling,
}

impl DeclarationKind {
    pub fn name(&self) -> &'static str {
        match self {
            DeclarationKind::Component => "component",
            DeclarationKind::Part => "part",
            DeclarationKind::Option => "option",
            DeclarationKind::Tweak => "tweak",
            DeclarationKind::Location => "location",
            DeclarationKind::Raw => "raw",
            DeclarationKind::Sibling => "sibling",
        }
    }
}

/// One node of the declaration tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    kind: DeclarationKind,
    names: Vec<String>,
    body: Option<String>,
    children: Vec<Declaration>,
}

impl Declaration {
    pub fn new<I, S>(kind: DeclarationKind, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind,
            names: names.into_iter().map(Into::into).collect(),
            body: None,
            children: Vec::new(),
        }
    }

    /// Sets the literal declaration body emitted for this node's selectors.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn child(mut self, child: Declaration) -> Self {
        self.children.push(child);
        self
    }

    pub fn children_from(mut self, children: impl IntoIterator<Item = Declaration>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn kind(&self) -> DeclarationKind {
        self.kind
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn children(&self) -> &[Declaration] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Short form used in error paths, e.g. `option(o1, o2)`.
impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind.name(), self.names.join(", "))
    }
}

pub fn component<I, S>(names: I) -> Declaration
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Declaration::new(DeclarationKind::Component, names)
}

pub fn part<I, S>(names: I) -> Declaration
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Declaration::new(DeclarationKind::Part, names)
}

pub fn option<I, S>(names: I) -> Declaration
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Declaration::new(DeclarationKind::Option, names)
}

pub fn tweak<I, S>(names: I) -> Declaration
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Declaration::new(DeclarationKind::Tweak, names)
}

pub fn location<I, S>(names: I) -> Declaration
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Declaration::new(DeclarationKind::Location, names)
}

/// Ordinary selector text. A leading `&` glues the fragment onto the
/// current element; anything else nests it as a descendant.
pub fn raw(fragment: impl Into<String>) -> Declaration {
    Declaration::new(DeclarationKind::Raw, [fragment.into()])
}

/// The current element again, as its own adjacent sibling.
pub fn sibling() -> Declaration {
    Declaration::new(DeclarationKind::Sibling, Vec::<String>::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(option(["o1", "o2"]).to_string(), "option(o1, o2)");
        assert_eq!(raw("&:hover").to_string(), "raw(&:hover)");
        assert_eq!(sibling().to_string(), "sibling()");
    }

    #[test]
    fn test_builders_keep_declared_order() {
        let tree = component(["c1"])
            .body("top: 0;")
            .child(part(["p1", "p2"]))
            .children_from([option(["o1"]), tweak(["t1"])]);

        assert_eq!(tree.kind(), DeclarationKind::Component);
        assert_eq!(tree.body_text(), Some("top: 0;"));
        let kinds: Vec<_> = tree.children().iter().map(|c| c.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                DeclarationKind::Part,
                DeclarationKind::Option,
                DeclarationKind::Tweak
            ]
        );
        assert!(tree.children()[0].is_leaf());
    }
}
