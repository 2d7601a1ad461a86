//! Exhaustive search
//!
//! Backtracks over every feasible choice at every step and records each
//! maximal path, complete or stuck. Once `cap` paths are recorded the
//! recursion unwinds without exploring anything else, so a capped result is
//! a prefix of the enumeration in index order.

use super::frame::SearchFrame;
use crate::features::dependency_graph::DependencyGraph;
use crate::features::order_search::domain::{ExhaustiveReport, OrderOutcome};
use tracing::debug;

pub struct ExhaustiveSearch<'g> {
    graph: &'g DependencyGraph,
    cap: usize,
    found: Vec<OrderOutcome>,
    truncated: bool,
}

impl<'g> ExhaustiveSearch<'g> {
    pub fn new(graph: &'g DependencyGraph, cap: usize) -> Self {
        Self {
            graph,
            cap,
            found: Vec::new(),
            truncated: false,
        }
    }

    pub fn run(mut self) -> ExhaustiveReport {
        let mut frame = SearchFrame::new(self.graph);
        self.descend(&mut frame);

        debug!(
            units = self.graph.len(),
            found = self.found.len(),
            cap = self.cap,
            truncated = self.truncated,
            "exhaustive search finished"
        );
        ExhaustiveReport {
            orders: self.found,
            truncated: self.truncated,
        }
    }

    fn descend(&mut self, frame: &mut SearchFrame<'_>) {
        if self.found.len() >= self.cap {
            self.truncated = true;
            return;
        }

        let mut extended = false;
        for unit in 0..self.graph.len() {
            if frame.is_placed(unit) || !frame.can_place(unit) {
                continue;
            }
            if self.found.len() >= self.cap {
                self.truncated = true;
                return;
            }

            frame.push(unit);
            self.descend(frame);
            frame.pop();
            extended = true;
        }

        if !extended {
            self.found.push(OrderOutcome::classify(
                frame.order().to_vec(),
                self.graph.len(),
            ));
        }
    }
}
