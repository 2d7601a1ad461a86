//! Symbol table infrastructure

pub mod reducer;

pub use reducer::*;
