//! Selector data structures and the standard specificity count.
//!
//! A selector is modelled the way it reads left to right:
//!
//! - [`Selector`]: one simple selector token (`html`, `.c1`, `#app`, `:hover`,
//!   `:not(.x)`)
//! - [`CompoundSelector`]: tokens applying to a single element (`html#app`)
//! - [`SelectorPart`]: a compound plus the combinator that follows it
//! - [`ComplexSelector`]: a chain of parts (`#app .\+t1 .c1`)
//! - [`SelectorList`]: a comma-separated group of complex selectors
//!
//! Identifier text is stored exactly as it appears in CSS source, escapes
//! included, so `Display` reproduces valid selector text without re-escaping.

use std::fmt;

/// CSS specificity as `(inline, ids, classes, types)`.
///
/// Compared lexicographically in field order, so `(0,1,0,0) > (0,0,99,99)`.
/// Formats as `a,b,c,d`, the notation used by specificity calculators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    pub inline: u32,
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

impl Specificity {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(inline: u32, ids: u32, classes: u32, types: u32) -> Self {
        Self {
            inline,
            ids,
            classes,
            types,
        }
    }

    /// Component-wise sum of two specificities.
    pub fn add(self, other: Self) -> Self {
        Self {
            inline: self.inline + other.inline,
            ids: self.ids + other.ids,
            classes: self.classes + other.classes,
            types: self.types + other.types,
        }
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.inline, self.ids, self.classes, self.types
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Type(String),
    Class(String),
    Id(String),
    Universal,
    PseudoClass(String),
    /// A pseudo-class with an argument, e.g. `:nth-child(2n + 1)` or `:not(.x)`.
    PseudoFunction(String, PseudoArgument),
    PseudoElement(String),
    /// The `&` parent reference used in nested fragments.
    Parent,
    Attribute(String, String),
}

/// The argument of a functional pseudo-class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PseudoArgument {
    /// A selector list, as taken by `:not`, `:is`, `:has` and `:where`.
    Selectors(SelectorList),
    /// Any other argument, kept verbatim.
    Text(String),
}

impl PseudoArgument {
    /// Specificity contributed by `:name(argument)`.
    ///
    /// `:where` counts nothing, other selector-list functions count their
    /// most specific argument, and everything else counts as one pseudo-class.
    pub fn specificity(&self, name: &str) -> Specificity {
        match self {
            PseudoArgument::Selectors(_) if name.eq_ignore_ascii_case("where") => Specificity::ZERO,
            PseudoArgument::Selectors(list) => list
                .selectors
                .iter()
                .map(ComplexSelector::specificity)
                .max()
                .unwrap_or_default(),
            PseudoArgument::Text(_) => Specificity::new(0, 0, 1, 0),
        }
    }
}

impl fmt::Display for PseudoArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PseudoArgument::Selectors(list) => write!(f, "{list}"),
            PseudoArgument::Text(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Type(name) => write!(f, "{name}"),
            Selector::Class(name) => write!(f, ".{name}"),
            Selector::Id(name) => write!(f, "#{name}"),
            Selector::Universal => write!(f, "*"),
            Selector::PseudoClass(name) => write!(f, ":{name}"),
            Selector::PseudoFunction(name, argument) => write!(f, ":{name}({argument})"),
            Selector::PseudoElement(name) => write!(f, "::{name}"),
            Selector::Parent => write!(f, "&"),
            Selector::Attribute(name, value) if value.is_empty() => write!(f, "[{name}]"),
            Selector::Attribute(name, value) => write!(f, "[{name}={value}]"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompoundSelector {
    pub selectors: Vec<Selector>,
}

impl CompoundSelector {
    pub fn new(selectors: Vec<Selector>) -> Self {
        Self { selectors }
    }

    /// Returns true if the compound holds a `&` parent reference.
    pub fn has_parent_ref(&self) -> bool {
        self.selectors.iter().any(|s| matches!(s, Selector::Parent))
    }

    pub fn specificity(&self) -> Specificity {
        let mut spec = Specificity::default();
        for s in &self.selectors {
            match s {
                Selector::Id(_) => spec.ids += 1,
                // Attributes have the same specificity as classes and pseudo-classes
                Selector::Class(_) | Selector::PseudoClass(_) | Selector::Attribute(_, _) => {
                    spec.classes += 1;
                }
                Selector::PseudoFunction(name, argument) => {
                    spec = spec.add(argument.specificity(name));
                }
                Selector::Type(_) | Selector::PseudoElement(_) => spec.types += 1,
                Selector::Universal | Selector::Parent => {}
            }
        }
        spec
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.selectors {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    None,
    Descendant,
    Child,
    AdjacentSibling, // +
    GeneralSibling,  // ~
}

impl Combinator {
    /// The separator written between two compounds.
    pub fn as_str(&self) -> &'static str {
        match self {
            Combinator::None => "",
            Combinator::Descendant => " ",
            Combinator::Child => " > ",
            Combinator::AdjacentSibling => " + ",
            Combinator::GeneralSibling => " ~ ",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorPart {
    pub compound: CompoundSelector,
    pub combinator: Combinator,
}

impl SelectorPart {
    pub fn new(compound: CompoundSelector, combinator: Combinator) -> Self {
        Self {
            compound,
            combinator,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComplexSelector {
    pub parts: Vec<SelectorPart>,
}

impl ComplexSelector {
    pub fn new(parts: Vec<SelectorPart>) -> Self {
        Self { parts }
    }

    pub fn specificity(&self) -> Specificity {
        self.parts
            .iter()
            .map(|p| p.compound.specificity())
            .fold(Specificity::default(), Specificity::add)
    }
}

impl fmt::Display for ComplexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            write!(f, "{}{}", part.compound, part.combinator.as_str())?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorList {
    pub selectors: Vec<ComplexSelector>,
}

impl SelectorList {
    pub fn new(selectors: Vec<ComplexSelector>) -> Self {
        Self { selectors }
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{selector}")?;
        }
        Ok(())
    }
}
