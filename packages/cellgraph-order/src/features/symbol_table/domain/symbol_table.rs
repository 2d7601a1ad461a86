//! What a single unit supplies and requires

use crate::shared::models::Symbol;
use rustc_hash::FxHashSet;

/// Producer and consumer sets of one unit
///
/// Immutable once built; the dependency graph only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    producers: FxHashSet<Symbol>,
    consumers: FxHashSet<Symbol>,
}

impl SymbolTable {
    pub fn new(producers: FxHashSet<Symbol>, consumers: FxHashSet<Symbol>) -> Self {
        Self {
            producers,
            consumers,
        }
    }

    /// Symbols this unit exports to later units (and to itself)
    pub fn producers(&self) -> &FxHashSet<Symbol> {
        &self.producers
    }

    /// Symbols that must be supplied before this unit can run
    pub fn consumers(&self) -> &FxHashSet<Symbol> {
        &self.consumers
    }

    pub fn produces(&self, symbol: &Symbol) -> bool {
        self.producers.contains(symbol)
    }

    pub fn consumes(&self, symbol: &Symbol) -> bool {
        self.consumers.contains(symbol)
    }

    /// True if the unit only reads what it defines itself
    pub fn is_self_sufficient(&self) -> bool {
        self.consumers.is_subset(&self.producers)
    }

    pub fn is_empty(&self) -> bool {
        self.producers.is_empty() && self.consumers.is_empty()
    }

    /// Producers in a stable order (for reporting)
    pub fn sorted_producers(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self.producers.iter().cloned().collect();
        symbols.sort();
        symbols
    }

    /// Consumers in a stable order (for reporting)
    pub fn sorted_consumers(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self.consumers.iter().cloned().collect();
        symbols.sort();
        symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(symbols: &[Symbol]) -> FxHashSet<Symbol> {
        symbols.iter().cloned().collect()
    }

    #[test]
    fn test_self_sufficient() {
        let table = SymbolTable::new(
            set(&[Symbol::variable("x"), Symbol::variable("y")]),
            set(&[Symbol::variable("x")]),
        );
        assert!(table.is_self_sufficient());
    }

    #[test]
    fn test_not_self_sufficient() {
        let table = SymbolTable::new(set(&[Symbol::variable("y")]), set(&[Symbol::variable("x")]));
        assert!(!table.is_self_sufficient());
        assert!(table.consumes(&Symbol::variable("x")));
        assert!(!table.produces(&Symbol::variable("x")));
    }

    #[test]
    fn test_empty_table() {
        let table = SymbolTable::default();
        assert!(table.is_empty());
        assert!(table.is_self_sufficient());
    }

    #[test]
    fn test_sorted_producers_are_deterministic() {
        let table = SymbolTable::new(
            set(&[
                Symbol::variable("b"),
                Symbol::function("a"),
                Symbol::variable("a"),
            ]),
            FxHashSet::default(),
        );
        assert_eq!(
            table.sorted_producers(),
            vec![
                Symbol::variable("a"),
                Symbol::function("a"),
                Symbol::variable("b"),
            ]
        );
    }
}
