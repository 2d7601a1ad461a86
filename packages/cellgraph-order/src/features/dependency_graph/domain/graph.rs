//! Dependency graph over units
//!
//! Symbols are interned once at construction so the search works on dense
//! `SymbolId`s instead of hashing strings at every step.

use super::accumulator::AccumulatedProducers;
use super::summary::{GraphSummary, UnitSummary};
use crate::features::symbol_table::SymbolTable;
use crate::shared::models::{Symbol, UnitIndex};
use rustc_hash::{FxHashMap, FxHashSet};

/// Dense symbol identifier, valid only for the graph that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u32);

impl SymbolId {
    pub(crate) fn from_index(index: usize) -> Self {
        SymbolId(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Producer/consumer sets of every unit, in document order
///
/// Read-only after construction; share it freely between concurrent
/// searches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    tables: Vec<SymbolTable>,
    symbols: Vec<Symbol>,
    symbol_ids: FxHashMap<Symbol, SymbolId>,
    /// Sorted, deduplicated
    producer_ids: Vec<Vec<SymbolId>>,
    /// Sorted, deduplicated
    consumer_ids: Vec<Vec<SymbolId>>,
}

impl DependencyGraph {
    /// Create graph from per-unit symbol tables (index = document order)
    pub fn from_tables(tables: Vec<SymbolTable>) -> Self {
        let mut symbols = Vec::new();
        let mut symbol_ids = FxHashMap::default();
        let mut producer_ids = Vec::with_capacity(tables.len());
        let mut consumer_ids = Vec::with_capacity(tables.len());

        for table in &tables {
            producer_ids.push(Self::intern_all(
                table.producers(),
                &mut symbols,
                &mut symbol_ids,
            ));
            consumer_ids.push(Self::intern_all(
                table.consumers(),
                &mut symbols,
                &mut symbol_ids,
            ));
        }

        Self {
            tables,
            symbols,
            symbol_ids,
            producer_ids,
            consumer_ids,
        }
    }

    fn intern_all(
        set: &FxHashSet<Symbol>,
        symbols: &mut Vec<Symbol>,
        symbol_ids: &mut FxHashMap<Symbol, SymbolId>,
    ) -> Vec<SymbolId> {
        // Sorted first so ids do not depend on hash iteration order
        let mut sorted: Vec<&Symbol> = set.iter().collect();
        sorted.sort();

        let mut ids: Vec<SymbolId> = sorted
            .into_iter()
            .map(|symbol| {
                *symbol_ids.entry(symbol.clone()).or_insert_with(|| {
                    symbols.push(symbol.clone());
                    SymbolId::from_index(symbols.len() - 1)
                })
            })
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Number of units
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Number of distinct symbols across all units
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn tables(&self) -> &[SymbolTable] {
        &self.tables
    }

    /// # Panics
    /// If `unit` is out of range.
    pub fn table(&self, unit: UnitIndex) -> &SymbolTable {
        &self.tables[unit]
    }

    pub fn producers(&self, unit: UnitIndex) -> &FxHashSet<Symbol> {
        self.tables[unit].producers()
    }

    pub fn consumers(&self, unit: UnitIndex) -> &FxHashSet<Symbol> {
        self.tables[unit].consumers()
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    pub fn symbol_id(&self, symbol: &Symbol) -> Option<SymbolId> {
        self.symbol_ids.get(symbol).copied()
    }

    pub(crate) fn producer_ids(&self, unit: UnitIndex) -> &[SymbolId] {
        &self.producer_ids[unit]
    }

    pub(crate) fn consumer_ids(&self, unit: UnitIndex) -> &[SymbolId] {
        &self.consumer_ids[unit]
    }

    /// Empty accumulator sized for this graph
    pub fn empty_accumulator(&self) -> AccumulatedProducers {
        AccumulatedProducers::with_symbol_count(self.symbols.len())
    }

    /// `consumers(unit) ⊆ accumulated ∪ producers(unit)`
    ///
    /// The unit's own producers count, so a unit that defines and reads the
    /// same name is schedulable without help from earlier units.
    pub fn feasible(&self, unit: UnitIndex, accumulated: &AccumulatedProducers) -> bool {
        let own = &self.producer_ids[unit];
        self.consumer_ids[unit]
            .iter()
            .all(|id| accumulated.contains(*id) || own.binary_search(id).is_ok())
    }

    /// Symbols `unit` still needs given `accumulated`
    pub fn missing(&self, unit: UnitIndex, accumulated: &AccumulatedProducers) -> Vec<&Symbol> {
        let own = &self.producer_ids[unit];
        self.consumer_ids[unit]
            .iter()
            .filter(|id| !accumulated.contains(**id) && own.binary_search(*id).is_err())
            .map(|id| self.symbol(*id))
            .collect()
    }

    /// `accumulated ∪= producers(unit)`
    pub fn fold(&self, accumulated: &mut AccumulatedProducers, unit: UnitIndex) {
        accumulated.add_all(&self.producer_ids[unit]);
    }

    /// Undo one `fold` of the same unit
    pub fn unfold(&self, accumulated: &mut AccumulatedProducers, unit: UnitIndex) {
        accumulated.remove_all(&self.producer_ids[unit]);
    }

    /// Pure variant of [`fold`](Self::fold)
    pub fn folded(
        &self,
        accumulated: &AccumulatedProducers,
        unit: UnitIndex,
    ) -> AccumulatedProducers {
        let mut next = accumulated.clone();
        self.fold(&mut next, unit);
        next
    }

    /// Producers accumulated by running `order` from an empty state
    pub fn accumulate(&self, order: &[UnitIndex]) -> AccumulatedProducers {
        let mut accumulated = self.empty_accumulator();
        for &unit in order {
            self.fold(&mut accumulated, unit);
        }
        accumulated
    }

    /// True if every unit of `order` is feasible after its prefix
    ///
    /// Does not check that `order` is a permutation.
    pub fn respects_dependencies(&self, order: &[UnitIndex]) -> bool {
        let mut accumulated = self.empty_accumulator();
        for &unit in order {
            if unit >= self.len() || !self.feasible(unit, &accumulated) {
                return false;
            }
            self.fold(&mut accumulated, unit);
        }
        true
    }

    /// True if `order` places every unit exactly once and respects dependencies
    pub fn is_valid_order(&self, order: &[UnitIndex]) -> bool {
        if order.len() != self.len() {
            return false;
        }
        let mut seen = vec![false; self.len()];
        for &unit in order {
            if unit >= self.len() || seen[unit] {
                return false;
            }
            seen[unit] = true;
        }
        self.respects_dependencies(order)
    }

    /// Serializable per-unit view
    pub fn summary(&self) -> GraphSummary {
        let units = self
            .tables
            .iter()
            .enumerate()
            .map(|(index, table)| UnitSummary {
                index,
                producers: table.sorted_producers(),
                consumers: table.sorted_consumers(),
                self_sufficient: table.is_self_sufficient(),
            })
            .collect();
        GraphSummary {
            unit_count: self.len(),
            symbol_count: self.symbol_count(),
            units,
        }
    }
}
