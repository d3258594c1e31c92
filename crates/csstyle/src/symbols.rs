//! Symbol configuration.
//!
//! Each naming kind has one active symbol: a class prefix (Component, Option,
//! Tweak, Location), the Part separator, or the root id name. A
//! [`SymbolTable`] is an ordinary value owned by the caller; a
//! [`Synthesizer`](crate::Synthesizer) clones it when constructed, so a pass
//! always sees one consistent set of symbols no matter what happens to the
//! caller's table afterwards.
//!
//! Two levels of reset are available:
//!
//! - [`SymbolTable::restore`] returns to the last [`SymbolTable::save`]d baseline
//! - [`SymbolTable::reset_all`] returns to the built-in defaults
//!
//! ```rust
//! use csstyle::{SymbolKind, SymbolTable};
//!
//! let mut symbols = SymbolTable::default();
//! symbols.set(SymbolKind::Part, "/");
//! symbols.save();
//!
//! symbols.set(SymbolKind::Part, "|");
//! assert_eq!(symbols.get(SymbolKind::Part), "|");
//!
//! symbols.restore();
//! assert_eq!(symbols.get(SymbolKind::Part), "/");
//!
//! symbols.reset_all();
//! assert_eq!(symbols.get(SymbolKind::Part), ".");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::CsstyleError;

/// A configurable naming kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Component,
    Part,
    Option,
    Tweak,
    Location,
    RootId,
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 6] = [
        SymbolKind::Component,
        SymbolKind::Part,
        SymbolKind::Option,
        SymbolKind::Tweak,
        SymbolKind::Location,
        SymbolKind::RootId,
    ];

    /// The built-in symbol for this kind.
    pub fn default_symbol(&self) -> &'static str {
        match self {
            SymbolKind::Component => "",
            SymbolKind::Part => ".",
            SymbolKind::Option => "--",
            SymbolKind::Tweak => "+",
            SymbolKind::Location => "@",
            SymbolKind::RootId => "app",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SymbolKind::Component => "component",
            SymbolKind::Part => "part",
            SymbolKind::Option => "option",
            SymbolKind::Tweak => "tweak",
            SymbolKind::Location => "location",
            SymbolKind::RootId => "root-id",
        }
    }

    fn index(&self) -> usize {
        match self {
            SymbolKind::Component => 0,
            SymbolKind::Part => 1,
            SymbolKind::Option => 2,
            SymbolKind::Tweak => 3,
            SymbolKind::Location => 4,
            SymbolKind::RootId => 5,
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymbolKind {
    type Err = CsstyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "component" => Ok(SymbolKind::Component),
            "part" => Ok(SymbolKind::Part),
            "option" => Ok(SymbolKind::Option),
            "tweak" => Ok(SymbolKind::Tweak),
            "location" => Ok(SymbolKind::Location),
            "root-id" | "root_id" | "root" => Ok(SymbolKind::RootId),
            _ => Err(CsstyleError::UnknownSymbolKind(s.to_string())),
        }
    }
}

type Symbols = [String; 6];

fn defaults() -> Symbols {
    SymbolKind::ALL.map(|kind| kind.default_symbol().to_string())
}

/// The active symbol for every [`SymbolKind`], plus a saved baseline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolTable {
    current: Symbols,
    baseline: Symbols,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self {
            current: defaults(),
            baseline: defaults(),
        }
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: SymbolKind) -> &str {
        &self.current[kind.index()]
    }

    /// Overrides the symbol for `kind`, effective for every later pass.
    pub fn set(&mut self, kind: SymbolKind, symbol: impl Into<String>) -> &mut Self {
        self.current[kind.index()] = symbol.into();
        self
    }

    /// Like [`set`](Self::set), with the kind given by name.
    ///
    /// An unknown name fails with [`CsstyleError::UnknownSymbolKind`] and
    /// leaves the table untouched.
    pub fn set_by_name(
        &mut self,
        kind: &str,
        symbol: impl Into<String>,
    ) -> Result<&mut Self, CsstyleError> {
        let kind: SymbolKind = kind.parse()?;
        Ok(self.set(kind, symbol))
    }

    /// Restores the built-in default for `kind`.
    pub fn reset(&mut self, kind: SymbolKind) -> &mut Self {
        self.current[kind.index()] = kind.default_symbol().to_string();
        self
    }

    /// Restores every built-in default and forgets the saved baseline.
    pub fn reset_all(&mut self) -> &mut Self {
        self.current = defaults();
        self.baseline = defaults();
        self
    }

    /// Records the current symbols as the baseline for [`restore`](Self::restore).
    pub fn save(&mut self) -> &mut Self {
        self.baseline = self.current.clone();
        self
    }

    /// Returns to the last saved baseline (the defaults if nothing was saved).
    pub fn restore(&mut self) -> &mut Self {
        self.current = self.baseline.clone();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let symbols = SymbolTable::default();
        assert_eq!(symbols.get(SymbolKind::Component), "");
        assert_eq!(symbols.get(SymbolKind::Part), ".");
        assert_eq!(symbols.get(SymbolKind::Option), "--");
        assert_eq!(symbols.get(SymbolKind::Tweak), "+");
        assert_eq!(symbols.get(SymbolKind::Location), "@");
        assert_eq!(symbols.get(SymbolKind::RootId), "app");
    }

    #[test]
    fn test_set_and_reset_single_kind() {
        let mut symbols = SymbolTable::default();
        symbols.set(SymbolKind::Tweak, "!").set(SymbolKind::Location, "?");
        assert_eq!(symbols.get(SymbolKind::Tweak), "!");

        symbols.reset(SymbolKind::Tweak);
        assert_eq!(symbols.get(SymbolKind::Tweak), "+");
        assert_eq!(symbols.get(SymbolKind::Location), "?");
    }

    #[test]
    fn test_set_by_name() {
        let mut symbols = SymbolTable::default();
        symbols.set_by_name("Component", "c-").unwrap();
        symbols.set_by_name("root-id", "csstyle").unwrap();
        assert_eq!(symbols.get(SymbolKind::Component), "c-");
        assert_eq!(symbols.get(SymbolKind::RootId), "csstyle");
    }

    #[test]
    fn test_unknown_kind_leaves_table_untouched() {
        let mut symbols = SymbolTable::default();
        let before = symbols.clone();
        let err = symbols.set_by_name("modifier", "__").unwrap_err();
        assert!(matches!(err, CsstyleError::UnknownSymbolKind(ref k) if k == "modifier"));
        assert_eq!(symbols, before);
    }

    #[test]
    fn test_reset_all_forgets_baseline() {
        let mut symbols = SymbolTable::default();
        symbols.set(SymbolKind::Part, "/").save();
        symbols.reset_all();
        symbols.restore();
        assert_eq!(symbols.get(SymbolKind::Part), ".");
    }

    #[test]
    fn test_kind_round_trips_through_name() {
        for kind in SymbolKind::ALL {
            assert_eq!(kind.name().parse::<SymbolKind>().unwrap(), kind);
        }
    }
}
