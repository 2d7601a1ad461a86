//! Order search configuration

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use crate::shared::constants::search::{
    DEFAULT_MAX_ORDERS, MAX_ORDERS_LIMIT, MAX_RANK_TIMEOUT_MS,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Preset the remaining fields started from
    pub preset: Preset,

    /// Cap on orders collected by exhaustive search (1..=1_000_000)
    pub max_orders: usize,

    /// Wall-clock budget for one rank-constrained search in ms (0 = unlimited)
    pub rank_timeout_ms: u64,

    /// Let the rank-constrained search place a unit more than once
    pub allow_reexecution: bool,

    /// Run batched rank searches on the rayon pool
    pub parallel_batches: bool,
}

impl SearchConfig {
    pub fn from_preset(preset: Preset) -> Self {
        match preset {
            Preset::Fast => Self {
                preset,
                max_orders: 20,
                rank_timeout_ms: 1_000,
                allow_reexecution: false,
                parallel_batches: true,
            },
            Preset::Balanced => Self {
                preset,
                max_orders: DEFAULT_MAX_ORDERS,
                rank_timeout_ms: 10_000,
                allow_reexecution: false,
                parallel_batches: true,
            },
            Preset::Thorough => Self {
                preset,
                max_orders: 10_000,
                rank_timeout_ms: 0,
                allow_reexecution: false,
                parallel_batches: true,
            },
        }
    }

    /// No deadline, default cap, strict placement
    ///
    /// What the plain `find_*` functions use.
    pub fn unbounded() -> Self {
        Self {
            rank_timeout_ms: 0,
            ..Self::from_preset(Preset::Balanced)
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_orders == 0 || self.max_orders > MAX_ORDERS_LIMIT {
            return Err(ConfigError::range_with_hint(
                "max_orders",
                self.max_orders,
                1,
                MAX_ORDERS_LIMIT,
                "Exhaustive search must be allowed at least one order",
            ));
        }
        if self.rank_timeout_ms > MAX_RANK_TIMEOUT_MS {
            return Err(ConfigError::range_with_hint(
                "rank_timeout_ms",
                self.rank_timeout_ms,
                0,
                MAX_RANK_TIMEOUT_MS,
                "Use 0 for an unlimited rank search",
            ));
        }
        Ok(())
    }

    /// Deadline for a rank search starting at `start`
    pub fn rank_deadline(&self, start: Instant) -> Option<Instant> {
        (self.rank_timeout_ms > 0).then(|| start + Duration::from_millis(self.rank_timeout_ms))
    }

    /// Builder: Set max_orders
    pub fn max_orders(mut self, v: usize) -> Self {
        self.max_orders = v;
        self
    }

    /// Builder: Set rank_timeout_ms
    pub fn rank_timeout_ms(mut self, v: u64) -> Self {
        self.rank_timeout_ms = v;
        self
    }

    /// Builder: Set allow_reexecution
    pub fn allow_reexecution(mut self, v: bool) -> Self {
        self.allow_reexecution = v;
        self
    }

    /// Builder: Set parallel_batches
    pub fn parallel_batches(mut self, v: bool) -> Self {
        self.parallel_batches = v;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}
