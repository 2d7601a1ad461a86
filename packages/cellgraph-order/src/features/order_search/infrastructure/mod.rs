//! Order search infrastructure (the three search policies)

pub mod exhaustive;
pub mod frame;
pub mod rank_constrained;
pub mod single;

pub use exhaustive::ExhaustiveSearch;
pub use frame::SearchFrame;
pub use rank_constrained::RankConstrainedSearch;
pub use single::first_order;
