//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains (where it needs them):
//! - domain/         - Pure models
//! - ports/          - Interface definitions (traits)
//! - application/    - Services
//! - infrastructure/ - Algorithms and external crates

// Occurrence records -> per-unit producer/consumer sets
pub mod symbol_table;

// Producer/consumer lists, feasibility predicate, petgraph adjacency view
pub mod dependency_graph;

// Single / exhaustive / rank-constrained order search
pub mod order_search;
