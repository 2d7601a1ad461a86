//! Dependency graph domain models

mod accumulator;
mod graph;
mod summary;

pub use accumulator::AccumulatedProducers;
pub use graph::{DependencyGraph, SymbolId};
pub use summary::{GraphSummary, UnitSummary};
