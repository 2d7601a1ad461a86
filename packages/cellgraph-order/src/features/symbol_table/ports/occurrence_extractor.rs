use crate::errors::Result;
use crate::shared::models::OccurrenceRecord;

/// Language front end boundary
///
/// Turns the source text of one unit into occurrence records. This is the
/// only place a concrete source language enters the crate.
pub trait OccurrenceExtractor: Send + Sync {
    fn extract_occurrences(&self, source: &str) -> Result<Vec<OccurrenceRecord>>;
}

impl<F> OccurrenceExtractor for F
where
    F: Fn(&str) -> Result<Vec<OccurrenceRecord>> + Send + Sync,
{
    fn extract_occurrences(&self, source: &str) -> Result<Vec<OccurrenceRecord>> {
        self(source)
    }
}
