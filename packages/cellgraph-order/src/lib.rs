/*
 * Cellgraph Order - notebook cell dependency graph and execution order search
 *
 * Feature-First Hexagonal Architecture:
 * - shared/    : Symbol and occurrence models, built-in name table
 * - features/  : symbol_table → dependency_graph → order_search
 * - config/    : Search limits (presets + YAML)
 * - api/       : The four external operations
 *
 * Data flows one way: occurrence records → producer/consumer sets →
 * feasibility predicate → unit orders. No code is executed here.
 */

#![allow(clippy::should_implement_trait)] // Preset::from_str naming intentional

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Language-agnostic Core API
pub mod api;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use api::{
    build, build_from_sources, find_all_orders, find_cycles, find_one_order,
    find_rank_constrained_orders, find_stable_order,
};
pub use config::{Preset, SearchConfig};
pub use errors::{CellgraphError, Result};
pub use features::dependency_graph::{
    AccumulatedProducers, DependencyGraph, DependencyGraphBuilder, UnitAdjacency,
};
pub use features::order_search::{
    ExhaustiveReport, OrderOutcome, OrderSearchEngine, RankSearchReport, RankVector,
};
pub use features::symbol_table::{OccurrenceExtractor, SymbolTable, SymbolTableBuilder};
pub use shared::models::{OccurrenceRecord, OccurrenceRole, Symbol, SymbolKind, UnitIndex};
