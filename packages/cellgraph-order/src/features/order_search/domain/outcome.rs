//! Complete vs stuck orders

use crate::shared::models::UnitIndex;
use serde::{Deserialize, Serialize};

/// Result of walking one maximal path of the search
///
/// `Stuck` holds a partial order after which no remaining unit is feasible:
/// the dependencies of the notebook cannot be fully resolved along it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "order", rename_all = "snake_case")]
pub enum OrderOutcome {
    Complete(Vec<UnitIndex>),
    Stuck(Vec<UnitIndex>),
}

impl OrderOutcome {
    /// `Complete` iff the order places `unit_count` units
    pub fn classify(order: Vec<UnitIndex>, unit_count: usize) -> Self {
        if order.len() >= unit_count {
            Self::Complete(order)
        } else {
            Self::Stuck(order)
        }
    }

    pub fn order(&self) -> &[UnitIndex] {
        match self {
            Self::Complete(order) | Self::Stuck(order) => order,
        }
    }

    pub fn into_order(self) -> Vec<UnitIndex> {
        match self {
            Self::Complete(order) | Self::Stuck(order) => order,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    pub fn is_stuck(&self) -> bool {
        matches!(self, Self::Stuck(_))
    }

    pub fn len(&self) -> usize {
        self.order().len()
    }

    pub fn is_empty(&self) -> bool {
        self.order().is_empty()
    }
}
