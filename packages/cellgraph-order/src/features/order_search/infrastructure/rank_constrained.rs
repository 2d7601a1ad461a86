//! Rank-constrained search
//!
//! Reconstructs orders whose positions reproduce a recorded rank vector.
//! At every node:
//! 1. derive the positional map of the current prefix (0 = not placed)
//! 2. prune if any placed unit sits later than its target rank
//! 3. once the prefix is `max(rank)` long, accept it iff the positional map
//!    equals the rank vector exactly; never extend past that depth
//! 4. otherwise try every feasible unit
//!
//! Exact equality means every unit must be placed for a solution to exist.
//!
//! With `allow_reexecution` a unit may be placed again after it was already
//! placed (a cell run twice); its position is its latest placement. Depth
//! is still bounded by `max(rank)`.

use super::frame::SearchFrame;
use crate::errors::Result;
use crate::features::dependency_graph::DependencyGraph;
use crate::features::order_search::domain::{RankSearchReport, RankVector};
use crate::shared::models::UnitIndex;
use std::time::Instant;
use tracing::{debug, warn};

pub struct RankConstrainedSearch<'g, 'r> {
    graph: &'g DependencyGraph,
    ranks: &'r RankVector,
    max_rank: usize,
    allow_reexecution: bool,
    deadline: Option<Instant>,
    positions: Vec<usize>,
    found: Vec<Vec<UnitIndex>>,
    timed_out: bool,
}

impl<'g, 'r> RankConstrainedSearch<'g, 'r> {
    /// Fails unless `ranks` holds one 1-based rank per unit
    pub fn new(graph: &'g DependencyGraph, ranks: &'r RankVector) -> Result<Self> {
        ranks.check(graph.len())?;
        Ok(Self {
            graph,
            ranks,
            max_rank: ranks.max_rank(),
            allow_reexecution: false,
            deadline: None,
            positions: vec![0; graph.len()],
            found: Vec::new(),
            timed_out: false,
        })
    }

    pub fn allow_reexecution(mut self, allow: bool) -> Self {
        self.allow_reexecution = allow;
        self
    }

    /// Abort once `deadline` passes; checked before every recursive step
    pub fn deadline(mut self, deadline: Option<Instant>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn run(mut self) -> RankSearchReport {
        if !self.allow_reexecution && self.max_rank > self.graph.len() {
            // Positions never exceed the unit count without re-execution
            debug!(
                max_rank = self.max_rank,
                units = self.graph.len(),
                "rank vector unreachable without re-execution"
            );
            return RankSearchReport::default();
        }

        let mut frame = SearchFrame::new(self.graph);
        self.descend(&mut frame);

        if self.timed_out {
            warn!(
                found = self.found.len(),
                "rank-constrained search hit its deadline"
            );
        }
        debug!(
            units = self.graph.len(),
            max_rank = self.max_rank,
            found = self.found.len(),
            "rank-constrained search finished"
        );
        RankSearchReport {
            orders: self.found,
            timed_out: self.timed_out,
        }
    }

    fn descend(&mut self, frame: &mut SearchFrame<'_>) {
        if self.deadline_passed() {
            self.timed_out = true;
            return;
        }

        if !self.derive_positions(frame.order()) {
            return;
        }

        if frame.len() >= self.max_rank {
            if self.positions.as_slice() == self.ranks.as_slice() {
                self.found.push(frame.order().to_vec());
            }
            return;
        }

        for unit in 0..self.graph.len() {
            if !self.allow_reexecution && frame.is_placed(unit) {
                continue;
            }
            if !frame.can_place(unit) {
                continue;
            }

            frame.push(unit);
            self.descend(frame);
            frame.pop();

            if self.timed_out {
                return;
            }
        }
    }

    /// Steps 1 and 2: rebuild the positional map, false if a unit is late
    fn derive_positions(&mut self, order: &[UnitIndex]) -> bool {
        self.positions.iter_mut().for_each(|p| *p = 0);
        for (index, &unit) in order.iter().enumerate() {
            let position = index + 1;
            self.positions[unit] = position;
            if position > self.ranks.as_slice()[unit] {
                return false;
            }
        }
        true
    }

    fn deadline_passed(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }
}
