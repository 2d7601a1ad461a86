//! Dependency Graph
//!
//! Ordered per-unit producer/consumer sets plus the feasibility predicate
//! the order search runs on. The search never materialises edges; the
//! petgraph adjacency in `infrastructure::adjacency` is a convenience view
//! for a single stable order and cycle reporting.

pub mod domain;
pub mod infrastructure;

pub use domain::{AccumulatedProducers, DependencyGraph, GraphSummary, SymbolId, UnitSummary};
pub use infrastructure::{DependencyGraphBuilder, UnitAdjacency};
