//! Test data builders

use cellgraph_order::{build, DependencyGraph, OccurrenceRecord};

/// Builder for the occurrence records of one unit
#[derive(Debug, Default, Clone)]
pub struct UnitBuilder {
    records: Vec<OccurrenceRecord>,
}

impl UnitBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defines(mut self, name: &str) -> Self {
        self.records.push(OccurrenceRecord::store(name));
        self
    }

    pub fn reads(mut self, name: &str) -> Self {
        self.records.push(OccurrenceRecord::load(name));
        self
    }

    pub fn declares_function(mut self, name: &str) -> Self {
        self.records
            .push(OccurrenceRecord::function_definition(name));
        self
    }

    pub fn calls(mut self, name: &str) -> Self {
        self.records.push(OccurrenceRecord::call(name));
        self
    }

    pub fn updates(mut self, name: &str) -> Self {
        self.records
            .extend(OccurrenceRecord::compound_assignment(name));
        self
    }

    pub fn build(self) -> Vec<OccurrenceRecord> {
        self.records
    }
}

/// Graph from unit builders in document order
pub fn graph_of(units: Vec<UnitBuilder>) -> DependencyGraph {
    build(units.into_iter().map(UnitBuilder::build).collect::<Vec<_>>())
}
