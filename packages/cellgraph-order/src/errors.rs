//! Error types for cellgraph-order
//!
//! Unresolvable dependencies are not errors: they come back as stuck orders
//! or empty result lists. Errors are reserved for caller contract violations
//! and for the ambient layers (config, serialization, front ends).

use crate::config::ConfigError;
use crate::shared::models::UnitIndex;
use thiserror::Error;

/// Main error type for cellgraph-order operations
#[derive(Debug, Error)]
pub enum CellgraphError {
    /// Rank vector does not have one entry per unit
    #[error("Rank vector has {found} entries but the graph has {expected} units")]
    RankVectorLength { expected: usize, found: usize },

    /// Rank 0 is not a position (ranks are 1-based)
    #[error("Unit {unit} has rank 0; ranks are 1-based positions")]
    RankOutOfRange { unit: UnitIndex },

    /// A unit has no recorded execution counter
    #[error("Unit {unit} has no execution count; it was never run")]
    MissingExecutionCount { unit: UnitIndex },

    /// Front end could not produce occurrence records for a unit
    #[error("Occurrence extraction failed: {0}")]
    Extraction(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CellgraphError {
    /// Create an extraction error (front ends use this for syntax errors)
    pub fn extraction(message: impl Into<String>) -> Self {
        CellgraphError::Extraction(message.into())
    }
}

/// Result type alias for cellgraph operations
pub type Result<T> = std::result::Result<T, CellgraphError>;
