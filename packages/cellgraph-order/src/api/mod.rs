//! Language-Agnostic Core API
//!
//! The four operations the surrounding notebook tooling calls. Everything
//! here is a thin wrapper over [`DependencyGraphBuilder`] and
//! [`OrderSearchEngine`] with an unbounded configuration (no deadline,
//! strict placement).

use crate::errors::Result;
use crate::features::dependency_graph::{DependencyGraph, DependencyGraphBuilder, UnitAdjacency};
use crate::features::order_search::{OrderOutcome, OrderSearchEngine, RankVector};
use crate::features::symbol_table::OccurrenceExtractor;
use crate::shared::models::{OccurrenceRecord, UnitIndex};

/// Build the dependency graph from per-unit occurrence records
///
/// A unit whose extraction failed upstream should be passed as an empty
/// record list; it then contributes empty sets.
pub fn build<I, R>(units: I) -> DependencyGraph
where
    I: IntoIterator<Item = R>,
    R: AsRef<[OccurrenceRecord]>,
{
    DependencyGraphBuilder::new().build(units)
}

/// Build the dependency graph from source text through a front end
pub fn build_from_sources<E, S>(extractor: &E, sources: &[S]) -> DependencyGraph
where
    E: OccurrenceExtractor + ?Sized,
    S: AsRef<str>,
{
    DependencyGraphBuilder::new().build_from_sources(extractor, sources)
}

/// One order; `Stuck` (shorter than the unit count) if none is complete
pub fn find_one_order(graph: &DependencyGraph) -> OrderOutcome {
    engine().single(graph)
}

/// All maximal orders, at most `cap` of them
///
/// Exactly `cap` results means the enumeration may be incomplete.
pub fn find_all_orders(graph: &DependencyGraph, cap: usize) -> Vec<OrderOutcome> {
    engine().exhaustive_with_cap(graph, cap).into_orders()
}

/// Orders whose positions equal `rank_vector` (1-based, one per unit)
///
/// Returns an error if `rank_vector` has the wrong length or holds a 0
/// rank; an unsatisfiable vector yields an empty list.
pub fn find_rank_constrained_orders(
    graph: &DependencyGraph,
    rank_vector: &[usize],
) -> Result<Vec<Vec<UnitIndex>>> {
    let ranks = RankVector::for_graph(rank_vector.to_vec(), graph)?;
    Ok(engine().rank_constrained(graph, &ranks)?.into_orders())
}

fn engine() -> OrderSearchEngine {
    OrderSearchEngine::unbounded()
}

/// Deterministic in-degree order over the explicit adjacency view
///
/// Convenience only: the adjacency over-approximates the dependency
/// relation, so this can be `Stuck` where [`find_one_order`] is not.
pub fn find_stable_order(graph: &DependencyGraph) -> OrderOutcome {
    UnitAdjacency::from_graph(graph).stable_order()
}

/// Groups of units that read from each other
pub fn find_cycles(graph: &DependencyGraph) -> Vec<Vec<UnitIndex>> {
    UnitAdjacency::from_graph(graph).cycles()
}
