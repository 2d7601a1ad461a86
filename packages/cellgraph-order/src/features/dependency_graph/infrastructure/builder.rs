//! Dependency graph construction
//!
//! Building never fails because of a single unit: a unit whose occurrence
//! extraction fails contributes empty producer/consumer sets and the rest of
//! the sequence is built as usual.

use crate::features::dependency_graph::domain::DependencyGraph;
use crate::features::symbol_table::{OccurrenceExtractor, SymbolTableBuilder};
use crate::shared::models::OccurrenceRecord;
use tracing::{debug, info, warn};

/// Builds a [`DependencyGraph`] from occurrence streams or source units
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyGraphBuilder {
    reducer: SymbolTableBuilder,
}

impl DependencyGraphBuilder {
    pub fn new() -> Self {
        Self {
            reducer: SymbolTableBuilder::new(),
        }
    }

    /// Build from per-unit occurrence records (index = document order)
    pub fn build<I, R>(&self, units: I) -> DependencyGraph
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[OccurrenceRecord]>,
    {
        let tables: Vec<_> = units
            .into_iter()
            .enumerate()
            .map(|(index, records)| {
                let table = self.reducer.reduce(records.as_ref());
                debug!(
                    unit = index,
                    producers = table.producers().len(),
                    consumers = table.consumers().len(),
                    "unit reduced"
                );
                table
            })
            .collect();

        let graph = DependencyGraph::from_tables(tables);
        info!(
            units = graph.len(),
            symbols = graph.symbol_count(),
            "dependency graph built"
        );
        graph
    }

    /// Build from source text through a language front end
    ///
    /// Units the extractor rejects are logged and treated as empty.
    pub fn build_from_sources<E, S>(&self, extractor: &E, sources: &[S]) -> DependencyGraph
    where
        E: OccurrenceExtractor + ?Sized,
        S: AsRef<str>,
    {
        let units: Vec<Vec<OccurrenceRecord>> = sources
            .iter()
            .enumerate()
            .map(
                |(index, source)| match extractor.extract_occurrences(source.as_ref()) {
                    Ok(records) => records,
                    Err(e) => {
                        warn!(unit = index, error = %e, "occurrence extraction failed, using empty unit");
                        Vec::new()
                    }
                },
            )
            .collect();

        self.build(units)
    }
}
