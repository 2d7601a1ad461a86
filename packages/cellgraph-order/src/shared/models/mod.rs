//! Shared models

pub mod occurrence;
mod symbol;

pub use occurrence::{OccurrenceRecord, OccurrenceRole};
pub use symbol::{Symbol, SymbolKind};

/// Position of a unit (cell) in its document order
pub type UnitIndex = usize;
