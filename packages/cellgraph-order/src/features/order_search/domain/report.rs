//! Search reports

use super::outcome::OrderOutcome;
use crate::shared::models::UnitIndex;
use serde::{Deserialize, Serialize};

/// Exhaustive search result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhaustiveReport {
    /// Maximal paths in discovery order
    pub orders: Vec<OrderOutcome>,
    /// The result cap cut the enumeration short; `orders` is a prefix
    pub truncated: bool,
}

impl ExhaustiveReport {
    pub fn complete_orders(&self) -> impl Iterator<Item = &[UnitIndex]> + '_ {
        self.orders
            .iter()
            .filter(|o| o.is_complete())
            .map(|o| o.order())
    }

    pub fn stuck_orders(&self) -> impl Iterator<Item = &[UnitIndex]> + '_ {
        self.orders
            .iter()
            .filter(|o| o.is_stuck())
            .map(|o| o.order())
    }

    /// True if at least one order places every unit
    pub fn has_complete(&self) -> bool {
        self.orders.iter().any(|o| o.is_complete())
    }

    pub fn into_orders(self) -> Vec<OrderOutcome> {
        self.orders
    }
}

/// Rank-constrained search result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankSearchReport {
    /// Orders whose positional map equals the rank vector
    pub orders: Vec<Vec<UnitIndex>>,
    /// The configured deadline expired before the search finished
    pub timed_out: bool,
}

impl RankSearchReport {
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn into_orders(self) -> Vec<Vec<UnitIndex>> {
        self.orders
    }
}
