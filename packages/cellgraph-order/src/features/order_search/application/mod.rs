//! Order search application layer

mod engine;

pub use engine::OrderSearchEngine;
