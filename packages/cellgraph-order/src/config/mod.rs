//! Search Configuration
//!
//! Two tiers, following the preset-then-override pattern:
//! - Level 1: Preset - `SearchConfig::from_preset(Preset::Fast)`
//! - Level 2: Override - builder methods or a YAML file
//!
//! # Examples
//!
//! ```rust,ignore
//! use cellgraph_order::config::{Preset, SearchConfig};
//!
//! let config = SearchConfig::from_preset(Preset::Balanced)
//!     .max_orders(50)
//!     .allow_reexecution(true);
//! config.validate()?;
//!
//! let config = SearchConfig::from_yaml("search.yaml")?;
//! ```
//!
//! YAML schema (v1):
//!
//! ```yaml
//! version: 1
//! preset: balanced
//! overrides:
//!   max_orders: 50
//!   rank_timeout_ms: 2000
//! ```

pub mod error;
pub mod io;
pub mod preset;
pub mod search_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, SearchOverrides};
pub use preset::Preset;
pub use search_config::SearchConfig;
