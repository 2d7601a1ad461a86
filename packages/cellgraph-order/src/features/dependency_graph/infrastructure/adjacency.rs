//! Explicit unit adjacency (petgraph)
//!
//! Edge `j → i` when unit `j` produces something unit `i` consumes and does
//! not produce itself. This over-approximates: a consumer satisfied by any
//! one of several producers gets an edge from each of them. It is only used
//! for the stable order and cycle reporting, never by the order search.
//!
//! A unit needing a symbol that no other unit produces is blocked: it never
//! becomes ready, and neither does anything downstream of it.

use crate::features::dependency_graph::domain::DependencyGraph;
use crate::features::order_search::domain::OrderOutcome;
use crate::shared::models::UnitIndex;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

pub struct UnitAdjacency {
    /// Node weight = unit index
    graph: DiGraph<UnitIndex, ()>,
    nodes: Vec<NodeIndex>,
    /// Some needed symbol has no producer anywhere
    blocked: Vec<bool>,
}

impl UnitAdjacency {
    pub fn from_graph(dependencies: &DependencyGraph) -> Self {
        let n = dependencies.len();
        let mut graph = DiGraph::with_capacity(n, n);
        let nodes: Vec<NodeIndex> = (0..n).map(|unit| graph.add_node(unit)).collect();
        let mut blocked = vec![false; n];

        for consumer in 0..n {
            let own = dependencies.producer_ids(consumer);
            let needed: Vec<_> = dependencies
                .consumer_ids(consumer)
                .iter()
                .filter(|id| own.binary_search(*id).is_err())
                .collect();
            if needed.is_empty() {
                continue;
            }

            let mut supplied = vec![false; needed.len()];
            for producer in (0..n).filter(|p| *p != consumer) {
                let supplies = dependencies.producer_ids(producer);
                let mut edge = false;
                for (slot, id) in needed.iter().enumerate() {
                    if supplies.binary_search(*id).is_ok() {
                        supplied[slot] = true;
                        edge = true;
                    }
                }
                if edge {
                    graph.add_edge(nodes[producer], nodes[consumer], ());
                }
            }
            blocked[consumer] = supplied.contains(&false);
        }

        debug!(
            units = n,
            edges = graph.edge_count(),
            blocked = blocked.iter().filter(|b| **b).count(),
            "unit adjacency materialised"
        );
        Self {
            graph,
            nodes,
            blocked,
        }
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Units that supply something `unit` needs (ascending)
    pub fn dependencies_of(&self, unit: UnitIndex) -> Vec<UnitIndex> {
        self.neighbors(unit, Direction::Incoming)
    }

    /// Units that need something `unit` supplies (ascending)
    pub fn dependents_of(&self, unit: UnitIndex) -> Vec<UnitIndex> {
        self.neighbors(unit, Direction::Outgoing)
    }

    fn neighbors(&self, unit: UnitIndex, direction: Direction) -> Vec<UnitIndex> {
        let Some(&node) = self.nodes.get(unit) else {
            return Vec::new();
        };
        let mut units: Vec<UnitIndex> = self
            .graph
            .neighbors_directed(node, direction)
            .map(|n| self.graph[n])
            .collect();
        units.sort_unstable();
        units.dedup();
        units
    }

    /// Kahn's algorithm, lowest unit index first among ready units
    ///
    /// Units blocked by a cycle or by an unproduced symbol are never placed;
    /// the result is then `Stuck` with the placed prefix.
    pub fn stable_order(&self) -> OrderOutcome {
        let n = self.nodes.len();
        let mut in_degree: Vec<usize> = self
            .nodes
            .iter()
            .map(|node| {
                self.graph
                    .neighbors_directed(*node, Direction::Incoming)
                    .count()
            })
            .collect();

        let mut ready: BinaryHeap<Reverse<UnitIndex>> = in_degree
            .iter()
            .enumerate()
            .filter(|(unit, degree)| **degree == 0 && !self.blocked[*unit])
            .map(|(unit, _)| Reverse(unit))
            .collect();

        let mut order = Vec::with_capacity(n);
        while let Some(Reverse(unit)) = ready.pop() {
            order.push(unit);
            for next in self
                .graph
                .neighbors_directed(self.nodes[unit], Direction::Outgoing)
            {
                let next_unit = self.graph[next];
                in_degree[next_unit] -= 1;
                if in_degree[next_unit] == 0 && !self.blocked[next_unit] {
                    ready.push(Reverse(next_unit));
                }
            }
        }

        OrderOutcome::classify(order, n)
    }

    /// Groups of units that depend on each other (Tarjan SCC, size > 1)
    ///
    /// Each group is sorted, groups are sorted by their first unit.
    pub fn cycles(&self) -> Vec<Vec<UnitIndex>> {
        let mut cycles: Vec<Vec<UnitIndex>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| {
                let mut units: Vec<UnitIndex> = scc.into_iter().map(|n| self.graph[n]).collect();
                units.sort_unstable();
                units
            })
            .collect();
        cycles.sort();
        cycles
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles().is_empty()
    }
}
