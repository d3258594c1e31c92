//! Structural specificity scoring.
//!
//! The synthesizer knows what it emits, so it keeps a running [`Tally`] of
//! ids, class-like tokens and element-like tokens as the selector is built
//! instead of re-parsing the finished text. Engine-native tokens are counted
//! by what they are (a Component is one class, the boost is one element, the
//! root id is one id); raw fragments and repeated sibling compounds are
//! counted token by token with [`Tally::count`]. A functional pseudo-class
//! counts like the standard algorithm says: `:where(...)` adds nothing,
//! `:not`, `:is` and `:has` add their most specific argument, anything else
//! (`:nth-child(2)`) adds one class.
//!
//! `inline` is always 0: no inline styles are ever produced.

use cssel::{ComplexSelector, CompoundSelector, PseudoArgument, Selector, Specificity};

use crate::rule::SelectorResult;

/// Token counts for one selector under construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub ids: u32,
    pub classes: u32,
    pub types: u32,
}

impl Tally {
    pub fn add_id(&mut self) {
        self.ids += 1;
    }

    pub fn add_class(&mut self) {
        self.classes += 1;
    }

    pub fn add_type(&mut self) {
        self.types += 1;
    }

    /// Counts one token by its CSS category.
    pub fn count(&mut self, token: &Selector) {
        match token {
            Selector::Id(_) => self.add_id(),
            Selector::Class(_) | Selector::Attribute(_, _) | Selector::PseudoClass(_) => {
                self.add_class()
            }
            Selector::PseudoFunction(name, PseudoArgument::Selectors(list)) => {
                if name.eq_ignore_ascii_case("where") {
                    return;
                }
                if let Some(most) = list
                    .selectors
                    .iter()
                    .map(Tally::of_complex)
                    .max_by_key(Tally::specificity)
                {
                    self.absorb(most);
                }
            }
            Selector::PseudoFunction(_, PseudoArgument::Text(_)) => self.add_class(),
            Selector::Type(_) | Selector::PseudoElement(_) => self.add_type(),
            Selector::Universal | Selector::Parent => {}
        }
    }

    fn of_complex(complex: &ComplexSelector) -> Tally {
        let mut tally = Tally::default();
        for part in &complex.parts {
            tally.count_compound(&part.compound);
        }
        tally
    }

    fn absorb(&mut self, other: Tally) {
        self.ids += other.ids;
        self.classes += other.classes;
        self.types += other.types;
    }

    pub fn count_compound(&mut self, compound: &CompoundSelector) {
        for token in &compound.selectors {
            self.count(token);
        }
    }

    pub fn specificity(&self) -> Specificity {
        Specificity::new(0, self.ids, self.classes, self.types)
    }
}

/// The specificity of a synthesized selector, from its tally.
pub fn score(result: &SelectorResult) -> Specificity {
    result.tally().specificity()
}
