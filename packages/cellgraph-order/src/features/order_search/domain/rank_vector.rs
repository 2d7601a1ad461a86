//! Target positions recorded from a previous execution

use crate::errors::{CellgraphError, Result};
use crate::features::dependency_graph::DependencyGraph;
use crate::shared::models::UnitIndex;
use serde::{Deserialize, Serialize};

/// One 1-based target position per unit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankVector(Vec<usize>);

impl RankVector {
    /// Wrap ranks without checking them against a graph
    pub fn new(ranks: Vec<usize>) -> Self {
        Self(ranks)
    }

    /// Wrap ranks, failing unless there is one 1-based rank per unit
    pub fn for_graph(ranks: Vec<usize>, graph: &DependencyGraph) -> Result<Self> {
        let ranks = Self(ranks);
        ranks.check(graph.len())?;
        Ok(ranks)
    }

    /// Length check, then every rank must be at least 1
    pub fn check(&self, unit_count: usize) -> Result<()> {
        self.check_len(unit_count)?;
        match self.0.iter().position(|rank| *rank == 0) {
            Some(unit) => Err(CellgraphError::RankOutOfRange { unit }),
            None => Ok(()),
        }
    }

    pub fn check_len(&self, unit_count: usize) -> Result<()> {
        if self.0.len() != unit_count {
            return Err(CellgraphError::RankVectorLength {
                expected: unit_count,
                found: self.0.len(),
            });
        }
        Ok(())
    }

    /// Ranks from recorded execution counters
    ///
    /// Units are sorted by counter (ties keep document order) and numbered
    /// from 1. Counters need not be contiguous: `[3, 7, 5]` gives `[1, 3, 2]`.
    pub fn from_execution_counts(counts: &[Option<u64>]) -> Result<Self> {
        let mut keyed = Vec::with_capacity(counts.len());
        for (unit, count) in counts.iter().enumerate() {
            let count = count.ok_or(CellgraphError::MissingExecutionCount { unit })?;
            keyed.push((count, unit));
        }
        keyed.sort_by_key(|(count, _)| *count);

        let mut ranks = vec![0; counts.len()];
        for (position, (_, unit)) in keyed.into_iter().enumerate() {
            ranks[unit] = position + 1;
        }
        Ok(Self(ranks))
    }

    /// Positional map of `order` over `unit_count` units (0 = not placed)
    ///
    /// A unit placed more than once gets its last position.
    pub fn from_order(order: &[UnitIndex], unit_count: usize) -> Self {
        let mut ranks = vec![0; unit_count];
        for (position, &unit) in order.iter().enumerate() {
            if let Some(rank) = ranks.get_mut(unit) {
                *rank = position + 1;
            }
        }
        Self(ranks)
    }

    /// Largest target position (0 for an empty vector)
    pub fn max_rank(&self) -> usize {
        self.0.iter().copied().max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, unit: UnitIndex) -> Option<usize> {
        self.0.get(unit).copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for RankVector {
    fn from(ranks: Vec<usize>) -> Self {
        Self(ranks)
    }
}
