//! Configuration I/O (YAML loading)

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::search_config::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    /// Base preset
    pub preset: String,

    /// Fine-grained overrides
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<SearchOverrides>,
}

/// Search overrides applied on top of the preset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_orders: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank_timeout_ms: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_reexecution: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_batches: Option<bool>,
}

impl SearchConfig {
    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::from_str(&export.preset)?;
        let mut config = SearchConfig::from_preset(preset);

        if let Some(overrides) = export.overrides {
            if let Some(v) = overrides.max_orders {
                config.max_orders = v;
            }
            if let Some(v) = overrides.rank_timeout_ms {
                config.rank_timeout_ms = v;
            }
            if let Some(v) = overrides.allow_reexecution {
                config.allow_reexecution = v;
            }
            if let Some(v) = overrides.parallel_batches {
                config.parallel_batches = v;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as YAML (only fields that differ from the preset are written)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let base = SearchConfig::from_preset(self.preset);
        let overrides = SearchOverrides {
            max_orders: (self.max_orders != base.max_orders).then_some(self.max_orders),
            rank_timeout_ms: (self.rank_timeout_ms != base.rank_timeout_ms)
                .then_some(self.rank_timeout_ms),
            allow_reexecution: (self.allow_reexecution != base.allow_reexecution)
                .then_some(self.allow_reexecution),
            parallel_batches: (self.parallel_batches != base.parallel_batches)
                .then_some(self.parallel_batches),
        };
        let has_overrides = overrides.max_orders.is_some()
            || overrides.rank_timeout_ms.is_some()
            || overrides.allow_reexecution.is_some()
            || overrides.parallel_batches.is_some();

        let export = ConfigExportV1 {
            version: Some(1),
            preset: self.preset.to_string(),
            overrides: has_overrides.then_some(overrides),
        };
        Ok(serde_yaml::to_string(&export)?)
    }
}
