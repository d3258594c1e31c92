//! Compilation units.
//!
//! A [`Stylesheet`] is an ordered list of declaration trees and policies.
//! [`Stylesheet::compile`] turns all of them into grouped rules in document
//! order using one symbol snapshot; if any item fails, nothing is returned.

use crate::declaration::Declaration;
use crate::error::Result;
use crate::policy::Policy;
use crate::rule::GroupedRule;
use crate::symbols::SymbolTable;
use crate::synthesize::Synthesizer;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    Declaration(Declaration),
    Policy(Policy),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    items: Vec<Item>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(mut self, declaration: Declaration) -> Self {
        self.items.push(Item::Declaration(declaration));
        self
    }

    pub fn policy(mut self, policy: Policy) -> Self {
        self.items.push(Item::Policy(policy));
        self
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn compile(&self, symbols: &SymbolTable) -> Result<Vec<GroupedRule>> {
        let synthesizer = Synthesizer::new(symbols);
        let mut rules = Vec::new();

        for item in &self.items {
            match item {
                Item::Declaration(declaration) => {
                    rules.extend(synthesizer.synthesize(declaration)?);
                }
                Item::Policy(policy) => {
                    rules.extend(synthesizer.policy(policy)?);
                }
            }
        }

        log::debug!(
            "compiled {} rules from {} items",
            rules.len(),
            self.items.len()
        );
        Ok(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{component, part};
    use crate::error::CsstyleError;
    use crate::symbols::SymbolKind;

    #[test]
    fn test_items_compile_in_document_order() {
        let sheet = Stylesheet::new()
            .policy(Policy::new("offset", "left: 1;").target(component(["c2"])))
            .declare(component(["c2"]).body("top: 0;"));

        let rules = sheet.compile(&SymbolTable::default()).unwrap();
        let bodies: Vec<&str> = rules.iter().map(GroupedRule::body).collect();
        assert_eq!(bodies, vec!["left: 1;", "top: 0;"]);
    }

    #[test]
    fn test_compile_uses_given_symbols() {
        let sheet = Stylesheet::new().declare(component(["c1"]).child(part(["p1"]).body("x: 1;")));
        let mut symbols = SymbolTable::default();
        symbols.set(SymbolKind::Part, "__");

        let rules = sheet.compile(&symbols).unwrap();
        assert_eq!(rules[0].selector_text(), ".c1__p1");
    }

    #[test]
    fn test_compile_fails_wholesale() {
        let mut sheet = Stylesheet::new().declare(component(["c1"]).body("a: 1;"));
        sheet.push(Item::Declaration(part(["p1"]).body("b: 2;")));
        assert!(matches!(
            sheet.compile(&SymbolTable::default()),
            Err(CsstyleError::InvalidNesting { .. })
        ));
    }
}
