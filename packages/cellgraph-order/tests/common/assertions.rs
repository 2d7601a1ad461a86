//! Custom assertions for order verification

use cellgraph_order::{DependencyGraph, OrderOutcome, UnitIndex};

/// Assert that `outcome` is a complete, dependency-respecting permutation
pub fn assert_valid_complete(graph: &DependencyGraph, outcome: &OrderOutcome) {
    assert!(
        outcome.is_complete(),
        "Expected a complete order, got {:?}",
        outcome
    );
    assert!(
        graph.is_valid_order(outcome.order()),
        "Order {:?} violates read-after-write",
        outcome.order()
    );
}

/// Assert that `outcome` is stuck and its prefix is still feasible
pub fn assert_stuck_prefix(graph: &DependencyGraph, outcome: &OrderOutcome) {
    assert!(outcome.is_stuck(), "Expected a stuck order, got {:?}", outcome);
    assert!(outcome.len() < graph.len());
    assert!(
        graph.respects_dependencies(outcome.order()),
        "Stuck prefix {:?} is not feasible",
        outcome.order()
    );
}

/// Every permutation of `0..n` (test oracle, keep n small)
pub fn all_permutations(n: usize) -> Vec<Vec<UnitIndex>> {
    fn extend(
        n: usize,
        current: &mut Vec<UnitIndex>,
        used: &mut Vec<bool>,
        out: &mut Vec<Vec<UnitIndex>>,
    ) {
        if current.len() == n {
            out.push(current.clone());
            return;
        }
        for i in 0..n {
            if !used[i] {
                used[i] = true;
                current.push(i);
                extend(n, current, used, out);
                current.pop();
                used[i] = false;
            }
        }
    }

    let mut out = Vec::new();
    extend(n, &mut Vec::new(), &mut vec![false; n], &mut out);
    out
}
