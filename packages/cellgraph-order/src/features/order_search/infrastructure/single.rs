//! Single-order search
//!
//! The depth-first search stops at its first maximal path, and the first
//! path always takes the lowest-index feasible unit at each step, so no
//! backtracking ever happens: the walk is greedy. The result is identical
//! to the first entry of the exhaustive enumeration.

use super::frame::SearchFrame;
use crate::features::dependency_graph::DependencyGraph;
use crate::features::order_search::domain::OrderOutcome;

pub fn first_order(graph: &DependencyGraph) -> OrderOutcome {
    let n = graph.len();
    let mut frame = SearchFrame::new(graph);

    while let Some(next) = (0..n).find(|&unit| !frame.is_placed(unit) && frame.can_place(unit)) {
        frame.push(next);
    }

    OrderOutcome::classify(frame.into_order(), n)
}
