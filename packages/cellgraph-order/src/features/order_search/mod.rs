//! Order Search Engine
//!
//! Backtracking search over unit permutations driven by the dependency
//! graph's feasibility predicate. Three policies:
//!
//! - single: first maximal path of the depth-first search
//! - exhaustive: every maximal path, capped by a result count
//! - rank-constrained: orders whose positions reproduce a recorded rank
//!   vector (historical execution order)
//!
//! Nothing here returns an error for unresolvable dependencies; that shows
//! up as `OrderOutcome::Stuck` or as an empty result list.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::OrderSearchEngine;
pub use domain::{ExhaustiveReport, OrderOutcome, RankSearchReport, RankVector};
