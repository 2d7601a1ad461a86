//! Mutable search state carried through the recursion
//!
//! Each top-level search owns one frame; the graph itself is only borrowed.

use crate::features::dependency_graph::{AccumulatedProducers, DependencyGraph};
use crate::shared::models::UnitIndex;

#[derive(Debug, Clone)]
pub struct SearchFrame<'g> {
    graph: &'g DependencyGraph,
    order: Vec<UnitIndex>,
    /// Placement count per unit (> 1 only when re-execution is allowed)
    placements: Vec<u32>,
    accumulated: AccumulatedProducers,
}

impl<'g> SearchFrame<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        Self {
            graph,
            order: Vec::with_capacity(graph.len()),
            placements: vec![0; graph.len()],
            accumulated: graph.empty_accumulator(),
        }
    }

    pub fn order(&self) -> &[UnitIndex] {
        &self.order
    }

    pub fn into_order(self) -> Vec<UnitIndex> {
        self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_placed(&self, unit: UnitIndex) -> bool {
        self.placements[unit] > 0
    }

    pub fn accumulated(&self) -> &AccumulatedProducers {
        &self.accumulated
    }

    /// Feasibility of `unit` after the current prefix
    pub fn can_place(&self, unit: UnitIndex) -> bool {
        self.graph.feasible(unit, &self.accumulated)
    }

    /// Append `unit` and fold its producers in
    pub fn push(&mut self, unit: UnitIndex) {
        self.order.push(unit);
        self.placements[unit] += 1;
        self.graph.fold(&mut self.accumulated, unit);
    }

    /// Undo the last `push`
    pub fn pop(&mut self) -> Option<UnitIndex> {
        let unit = self.order.pop()?;
        self.placements[unit] -= 1;
        self.graph.unfold(&mut self.accumulated, unit);
        Some(unit)
    }
}
