//! Shared module - Common types and utilities
//!
//! Types shared by the symbol table, dependency graph and order search
//! features. Nothing in here knows about a concrete source language.

pub mod constants;
pub mod models;

// Re-exports for convenience
pub use constants::is_builtin;
pub use models::*;
