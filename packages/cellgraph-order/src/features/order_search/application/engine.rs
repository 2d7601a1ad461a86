//! Order search service
//!
//! Owns a validated [`SearchConfig`] and runs the three search policies
//! against any number of graphs. Holds no per-search state, so one engine
//! can be shared across threads.

use crate::config::{Preset, SearchConfig};
use crate::errors::Result;
use crate::features::dependency_graph::DependencyGraph;
use crate::features::order_search::domain::{
    ExhaustiveReport, OrderOutcome, RankSearchReport, RankVector,
};
use crate::features::order_search::infrastructure::{
    first_order, ExhaustiveSearch, RankConstrainedSearch,
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct OrderSearchEngine {
    config: SearchConfig,
}

impl OrderSearchEngine {
    /// Create engine from a configuration (validated here)
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self {
            config: SearchConfig::from_preset(preset),
        }
    }

    /// Default cap, no deadline, strict placement
    pub fn unbounded() -> Self {
        Self {
            config: SearchConfig::unbounded(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// First maximal path; `Stuck` if dependencies cannot be resolved
    pub fn single(&self, graph: &DependencyGraph) -> OrderOutcome {
        let outcome = first_order(graph);
        if outcome.is_stuck() {
            warn!(
                placed = outcome.len(),
                units = graph.len(),
                "no complete order: dependencies cannot be fully resolved"
            );
        }
        outcome
    }

    /// Every maximal path, up to `max_orders`
    pub fn exhaustive(&self, graph: &DependencyGraph) -> ExhaustiveReport {
        self.exhaustive_with_cap(graph, self.config.max_orders)
    }

    /// Every maximal path, up to `cap`
    pub fn exhaustive_with_cap(&self, graph: &DependencyGraph, cap: usize) -> ExhaustiveReport {
        debug!(units = graph.len(), cap, "exhaustive search started");
        ExhaustiveSearch::new(graph, cap).run()
    }

    /// Orders reproducing `ranks` exactly
    ///
    /// Fails fast unless `ranks` has one 1-based entry per unit.
    pub fn rank_constrained(
        &self,
        graph: &DependencyGraph,
        ranks: &RankVector,
    ) -> Result<RankSearchReport> {
        let search = RankConstrainedSearch::new(graph, ranks)?;
        debug!(
            units = graph.len(),
            max_rank = ranks.max_rank(),
            allow_reexecution = self.config.allow_reexecution,
            "rank-constrained search started"
        );

        let deadline = self.config.rank_deadline(Instant::now());
        Ok(search
            .allow_reexecution(self.config.allow_reexecution)
            .deadline(deadline)
            .run())
    }

    /// One rank search per vector, in input order
    ///
    /// Each search owns its own frame; only the graph is shared.
    pub fn rank_constrained_batch(
        &self,
        graph: &DependencyGraph,
        batch: &[RankVector],
    ) -> Vec<Result<RankSearchReport>> {
        #[cfg(feature = "parallel")]
        if self.config.parallel_batches {
            return batch
                .par_iter()
                .map(|ranks| self.rank_constrained(graph, ranks))
                .collect();
        }

        batch
            .iter()
            .map(|ranks| self.rank_constrained(graph, ranks))
            .collect()
    }
}

impl Default for OrderSearchEngine {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}
