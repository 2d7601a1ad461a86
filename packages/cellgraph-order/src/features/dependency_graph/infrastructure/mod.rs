//! Dependency graph infrastructure

pub mod adjacency;
pub mod builder;

pub use adjacency::UnitAdjacency;
pub use builder::DependencyGraphBuilder;
