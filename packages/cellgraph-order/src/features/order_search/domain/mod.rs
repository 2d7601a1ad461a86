//! Order search domain models

mod outcome;
mod rank_vector;
mod report;

pub use outcome::OrderOutcome;
pub use rank_vector::RankVector;
pub use report::{ExhaustiveReport, RankSearchReport};
