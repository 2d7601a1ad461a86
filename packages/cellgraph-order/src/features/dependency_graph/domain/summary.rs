//! Serializable view of a dependency graph (handed to the execution layer)

use crate::shared::models::{Symbol, UnitIndex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSummary {
    pub index: UnitIndex,
    pub producers: Vec<Symbol>,
    pub consumers: Vec<Symbol>,
    pub self_sufficient: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub unit_count: usize,
    pub symbol_count: usize,
    pub units: Vec<UnitSummary>,
}

impl GraphSummary {
    pub fn to_json(&self) -> crate::errors::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
