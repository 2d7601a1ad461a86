/*
 * Occurrence reduction
 *
 * Reduces the occurrence stream of one unit to its producer/consumer sets.
 *
 * Rules (definitions first, then the rest in discovery order):
 * - built-in names are skipped
 * - var  + Definition       -> producer (name, var)
 * - var  + Store            -> producer (name, var) unless (name, var) was
 *                              already consumed earlier in this unit
 * - var  + Load             -> consumer (name, var)
 * - fun  + Definition/Store -> producer (name, fun) and (name, var)
 * - fun  + Load             -> consumer (name, fun)
 *
 * The Store exception makes `x = x + 1` a consumer of x, not a producer.
 * Changing it changes which notebooks have a valid order; keep it.
 */

use crate::features::symbol_table::domain::SymbolTable;
use crate::shared::constants::is_builtin;
use crate::shared::models::{OccurrenceRecord, OccurrenceRole, Symbol, SymbolKind};
use rustc_hash::FxHashSet;

/// Reduces occurrence records to a [`SymbolTable`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolTableBuilder;

impl SymbolTableBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Reduce the records of one unit
    pub fn reduce(&self, records: &[OccurrenceRecord]) -> SymbolTable {
        let mut producers = FxHashSet::default();
        let mut consumers = FxHashSet::default();

        let definitions = records.iter().filter(|r| r.is_definition());
        let rest = records.iter().filter(|r| !r.is_definition());

        for record in definitions.chain(rest) {
            if is_builtin(&record.name) {
                continue;
            }
            Self::apply(record, &mut producers, &mut consumers);
        }

        SymbolTable::new(producers, consumers)
    }

    fn apply(
        record: &OccurrenceRecord,
        producers: &mut FxHashSet<Symbol>,
        consumers: &mut FxHashSet<Symbol>,
    ) {
        match (record.kind, record.role) {
            (SymbolKind::Variable, OccurrenceRole::Definition) => {
                producers.insert(Symbol::variable(record.name.as_str()));
            }
            (SymbolKind::Variable, OccurrenceRole::Store) => {
                let symbol = Symbol::variable(record.name.as_str());
                if !consumers.contains(&symbol) {
                    producers.insert(symbol);
                }
            }
            (SymbolKind::Variable, OccurrenceRole::Load) => {
                consumers.insert(Symbol::variable(record.name.as_str()));
            }
            (SymbolKind::Function, OccurrenceRole::Definition | OccurrenceRole::Store) => {
                producers.insert(Symbol::function(record.name.as_str()));
                producers.insert(Symbol::variable(record.name.as_str()));
            }
            (SymbolKind::Function, OccurrenceRole::Load) => {
                consumers.insert(Symbol::function(record.name.as_str()));
            }
        }
    }
}
