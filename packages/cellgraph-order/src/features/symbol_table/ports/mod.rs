//! Symbol table ports

mod occurrence_extractor;

pub use occurrence_extractor::OccurrenceExtractor;
