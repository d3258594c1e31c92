//! Selector synthesis.
//!
//! The [`Synthesizer`] walks a [`Declaration`] tree and turns every node that
//! carries a body into a [`GroupedRule`]. The walk threads an explicit
//! context per selector under construction:
//!
//! - the compound path built so far (compounds never span a combinator)
//! - the *base* identifier a Part extends, unescaped (`c1`, `c1.p1`, `+t1`)
//! - whether the last compound is *pristine*, i.e. holds only the base class
//! - [`ScopeFlags`] for effects applied to the whole selector at the end
//! - the running specificity [`Tally`]
//!
//! ## Composition rules
//!
//! | declaration | effect on the selector |
//! |-------------|------------------------|
//! | Component `c1` | new descendant compound `.c1` |
//! | Part `p1` | replaces a pristine compound with `.c1\.p1`, else new compound |
//! | Option `o1` | appends `.\--o1` to the current compound, boosts |
//! | Tweak `t1` | new compound `.\+t1`, `#app` prefix |
//! | Location `l1` | new compound `.\@l1` |
//! | Raw `&:hover` / `.x` | glued onto / nested under the current compound, cancels the boost |
//! | Raw `&-x` | extends the last class of the current compound (`.c1-x`) |
//! | Sibling | ` + ` and a copy of the current compound |
//!
//! The boost is a single `html` element token at the front of the selector,
//! glued to the root id when there is one (`html#app`).
//!
//! ## Expansion
//!
//! Every name of a declaration is applied to every context produced by its
//! parent, outer names first, so `component(c1, c2) > option(o1, o2)` yields
//! `c1 o1`, `c1 o2`, `c2 o1`, `c2 o2`.

use bitflags::bitflags;
use cssel::parser::parse_selector;
use cssel::{Combinator, ComplexSelector, CompoundSelector, Selector, SelectorPart};

use crate::declaration::{Declaration, DeclarationKind};
use crate::error::{CsstyleError, Result};
use crate::escape::escape_ident;
use crate::policy::{Policy, group};
use crate::rule::{GroupedRule, SelectorResult};
use crate::specificity::Tally;
use crate::symbols::{SymbolKind, SymbolTable};

/// Element used to raise the specificity of option rules.
const BOOST_ELEMENT: &str = "html";

bitflags! {
    /// Whole-selector effects collected while descending.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ScopeFlags: u8 {
        /// A Tweak was applied: the selector starts with the root id
        const ROOT_ID = 0b0000_0001;
        /// An Option was applied: the selector starts with `html`
        const BOOSTED = 0b0000_0010;
        /// A raw fragment was applied: no `html` prefix
        const RAW     = 0b0000_0100;
    }
}

impl ScopeFlags {
    /// True when the `html` prefix is emitted.
    pub fn emits_boost(self) -> bool {
        self.contains(ScopeFlags::BOOSTED) && !self.contains(ScopeFlags::RAW)
    }
}

/// State of one selector under construction.
#[derive(Clone, Debug, Default)]
struct Context {
    parts: Vec<SelectorPart>,
    base: Option<String>,
    pristine: bool,
    flags: ScopeFlags,
    tally: Tally,
    trail: Vec<String>,
}

impl Context {
    fn path(&self) -> String {
        self.trail.join(" > ")
    }

    fn invalid(&self, reason: &str) -> CsstyleError {
        CsstyleError::InvalidNesting {
            path: self.path(),
            reason: reason.to_string(),
        }
    }

    /// Starts a new compound behind `combinator`.
    fn push_compound(&mut self, combinator: Combinator, compound: CompoundSelector) {
        if let Some(last) = self.parts.last_mut() {
            last.combinator = combinator;
        }
        self.parts.push(SelectorPart::new(compound, Combinator::None));
    }
}

/// True when a type or universal selector sits after the first token.
fn misplaced_element(tokens: &[Selector]) -> bool {
    tokens
        .iter()
        .skip(1)
        .any(|t| matches!(t, Selector::Type(_) | Selector::Universal))
}

#[derive(Default)]
struct Output {
    rules: Vec<GroupedRule>,
    leaves: Vec<SelectorResult>,
}

/// Turns declaration trees into selectors using one symbol snapshot.
#[derive(Clone, Debug, Default)]
pub struct Synthesizer {
    symbols: SymbolTable,
}

impl Synthesizer {
    /// Snapshots `symbols`; later changes to the caller's table do not
    /// affect this synthesizer.
    pub fn new(symbols: &SymbolTable) -> Self {
        Self {
            symbols: symbols.clone(),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// One rule per declaration carrying a body, in pre-order.
    pub fn synthesize(&self, declaration: &Declaration) -> Result<Vec<GroupedRule>> {
        Ok(self.run(declaration)?.rules)
    }

    /// The selectors of the tree's leaves, in declared order.
    pub fn selectors(&self, declaration: &Declaration) -> Result<Vec<SelectorResult>> {
        Ok(self.run(declaration)?.leaves)
    }

    /// The rule a policy produces, or `None` when it has no targets.
    pub fn policy(&self, policy: &Policy) -> Result<Option<GroupedRule>> {
        let mut results = Vec::new();
        for target in policy.targets() {
            results.extend(self.selectors(target)?);
        }

        if results.is_empty() {
            log::debug!("policy `{}` has no targets", policy.name());
            return Ok(None);
        }
        Ok(Some(group(results, policy.body())))
    }

    fn run(&self, declaration: &Declaration) -> Result<Output> {
        let mut output = Output::default();
        self.walk(declaration, &[Context::default()], &mut output)?;
        Ok(output)
    }

    fn walk(&self, decl: &Declaration, parents: &[Context], out: &mut Output) -> Result<()> {
        let contexts = self.expand(decl, parents)?;

        if decl.body_text().is_some() || decl.is_leaf() {
            let body = decl.body_text().unwrap_or_default();
            let results = contexts
                .iter()
                .map(|ctx| self.finish(ctx, body))
                .collect::<Result<Vec<_>>>()?;

            if decl.is_leaf() {
                out.leaves.extend(results.iter().cloned());
            }
            if decl.body_text().is_some() {
                let rule = GroupedRule::new(results, body);
                log::debug!("rule `{}` from {}", rule.selector_text(), decl);
                out.rules.push(rule);
            }
        }

        for child in decl.children() {
            self.walk(child, &contexts, out)?;
        }
        Ok(())
    }

    /// Applies every name of `decl` to every parent context, outer-major.
    fn expand(&self, decl: &Declaration, parents: &[Context]) -> Result<Vec<Context>> {
        let names: Vec<&str> = match decl.kind() {
            DeclarationKind::Sibling => vec![""],
            _ => decl.names().iter().map(String::as_str).collect(),
        };

        let mut contexts = Vec::with_capacity(parents.len() * names.len());
        for parent in parents {
            let mut scoped = parent.clone();
            scoped.trail.push(decl.to_string());

            if names.is_empty() {
                return Err(scoped.invalid("declaration has no names"));
            }

            for name in &names {
                let mut ctx = scoped.clone();
                self.apply(decl.kind(), name, &mut ctx)?;
                log::trace!("{} -> {:?}", ctx.path(), ctx.parts);
                contexts.push(ctx);
            }
        }
        Ok(contexts)
    }

    fn apply(&self, kind: DeclarationKind, name: &str, ctx: &mut Context) -> Result<()> {
        match kind {
            DeclarationKind::Component => {
                let ident = format!("{}{name}", self.symbols.get(SymbolKind::Component));
                self.open_block(ctx, ident)
            }
            DeclarationKind::Tweak => {
                let ident = format!("{}{name}", self.symbols.get(SymbolKind::Tweak));
                ctx.flags.insert(ScopeFlags::ROOT_ID);
                self.open_block(ctx, ident)
            }
            DeclarationKind::Location => {
                let ident = format!("{}{name}", self.symbols.get(SymbolKind::Location));
                self.open_block(ctx, ident)
            }
            DeclarationKind::Part => self.apply_part(name, ctx),
            DeclarationKind::Option => self.apply_option(name, ctx),
            DeclarationKind::Raw => self.apply_raw(name, ctx),
            DeclarationKind::Sibling => {
                let Some(last) = ctx.parts.last() else {
                    return Err(ctx.invalid("sibling needs an element to repeat"));
                };
                let compound = last.compound.clone();
                ctx.tally.count_compound(&compound);
                ctx.push_compound(Combinator::AdjacentSibling, compound);
                Ok(())
            }
        }
    }

    /// Component, Tweak and Location each start a new element.
    fn open_block(&self, ctx: &mut Context, ident: String) -> Result<()> {
        let class = Selector::Class(escape_ident(&ident)?);
        ctx.push_compound(Combinator::Descendant, CompoundSelector::new(vec![class]));
        ctx.tally.add_class();
        ctx.base = Some(ident);
        ctx.pristine = true;
        Ok(())
    }

    fn apply_part(&self, name: &str, ctx: &mut Context) -> Result<()> {
        let Some(base) = ctx.base.as_deref() else {
            return Err(ctx.invalid("part needs an enclosing component, part, tweak or location"));
        };
        let ident = format!("{base}{}{name}", self.symbols.get(SymbolKind::Part));
        let compound = CompoundSelector::new(vec![Selector::Class(escape_ident(&ident)?)]);

        if ctx.pristine {
            // The part class stands in for its block's class on the same element
            if let Some(last) = ctx.parts.last_mut() {
                last.compound = compound;
            }
        } else {
            ctx.push_compound(Combinator::Descendant, compound);
            ctx.tally.add_class();
        }

        ctx.base = Some(ident);
        ctx.pristine = true;
        Ok(())
    }

    fn apply_option(&self, name: &str, ctx: &mut Context) -> Result<()> {
        if ctx.base.is_none() {
            return Err(ctx.invalid("option needs an enclosing component, part, tweak or location"));
        }
        let ident = format!("{}{name}", self.symbols.get(SymbolKind::Option));
        let class = Selector::Class(escape_ident(&ident)?);

        // A base always comes with the compound it was opened on
        if let Some(last) = ctx.parts.last_mut() {
            last.compound.selectors.push(class);
        }
        ctx.tally.add_class();
        ctx.flags.insert(ScopeFlags::BOOSTED);
        ctx.pristine = false;
        Ok(())
    }

    fn apply_raw(&self, fragment: &str, ctx: &mut Context) -> Result<()> {
        let complex = parse_selector(fragment)?;
        let mut parts = complex.parts.into_iter();
        let Some(first) = parts.next() else {
            return Ok(());
        };
        let rest: Vec<SelectorPart> = parts.collect();

        if rest.iter().any(|p| p.compound.has_parent_ref()) {
            return Err(ctx.invalid("`&` may only open a fragment"));
        }
        if rest.iter().any(|p| misplaced_element(&p.compound.selectors)) {
            return Err(ctx.invalid("element selectors must open their compound"));
        }

        if first.compound.has_parent_ref() {
            self.glue(first, ctx)?;
        } else {
            if misplaced_element(&first.compound.selectors) {
                return Err(ctx.invalid("element selectors must open their compound"));
            }
            ctx.tally.count_compound(&first.compound);
            ctx.push_compound(Combinator::Descendant, first.compound);
            if let Some(last) = ctx.parts.last_mut() {
                last.combinator = first.combinator;
            }
        }

        for part in rest {
            ctx.tally.count_compound(&part.compound);
            ctx.parts.push(part);
        }

        ctx.flags.insert(ScopeFlags::RAW);
        ctx.pristine = false;
        Ok(())
    }

    /// Applies a compound opened by `&` to the current compound.
    ///
    /// An identifier right after `&` extends the last class (`&-x` on `.c1`
    /// gives `.c1-x`); every other token is appended as is.
    fn glue(&self, first: SelectorPart, ctx: &mut Context) -> Result<()> {
        if ctx.parts.is_empty() {
            return Err(ctx.invalid("`&` has no parent selector"));
        }

        let mut tokens = first.compound.selectors.into_iter();
        if tokens.next() != Some(Selector::Parent) {
            return Err(ctx.invalid("`&` must open its compound"));
        }
        let mut tokens: Vec<Selector> = tokens.collect();
        if tokens.contains(&Selector::Parent) {
            return Err(ctx.invalid("`&` may appear once per fragment"));
        }

        if let Some(Selector::Type(suffix)) = tokens.first().cloned() {
            tokens.remove(0);
            self.extend_last_class(&suffix, ctx)?;
        }
        if tokens
            .iter()
            .any(|t| matches!(t, Selector::Type(_) | Selector::Universal))
        {
            return Err(ctx.invalid("element selectors cannot follow `&`"));
        }

        for token in &tokens {
            ctx.tally.count(token);
        }
        if let Some(last) = ctx.parts.last_mut() {
            last.compound.selectors.extend(tokens);
            last.combinator = first.combinator;
        }
        Ok(())
    }

    fn extend_last_class(&self, suffix: &str, ctx: &mut Context) -> Result<()> {
        let extends_class = matches!(
            ctx.parts.last().and_then(|p| p.compound.selectors.last()),
            Some(Selector::Class(_))
        );
        if !extends_class {
            return Err(ctx.invalid("a suffix after `&` needs a class to extend"));
        }

        // The suffix is parsed CSS text, escapes already in place
        if let Some(Selector::Class(name)) = ctx
            .parts
            .last_mut()
            .and_then(|p| p.compound.selectors.last_mut())
        {
            name.push_str(suffix);
        }
        Ok(())
    }

    /// Materializes the scope prefix and freezes the selector.
    fn finish(&self, ctx: &Context, body: &str) -> Result<SelectorResult> {
        let mut tally = ctx.tally;
        let mut scope = Vec::new();

        if ctx.flags.emits_boost() {
            scope.push(Selector::Type(BOOST_ELEMENT.to_string()));
            tally.add_type();
        }
        if ctx.flags.contains(ScopeFlags::ROOT_ID) {
            let root = escape_ident(self.symbols.get(SymbolKind::RootId))?;
            scope.push(Selector::Id(root));
            tally.add_id();
        }

        let mut parts = Vec::with_capacity(ctx.parts.len() + 1);
        if !scope.is_empty() {
            parts.push(SelectorPart::new(
                CompoundSelector::new(scope),
                Combinator::Descendant,
            ));
        }
        parts.extend(ctx.parts.iter().cloned());

        Ok(SelectorResult::new(ComplexSelector::new(parts), tally, body))
    }
}
