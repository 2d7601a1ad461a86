//! Search configuration: presets, validation, YAML files

use cellgraph_order::config::ConfigError;
use cellgraph_order::{OrderSearchEngine, Preset, SearchConfig};
use pretty_assertions::assert_eq;
use std::io::Write;
use std::time::Instant;
use tempfile::NamedTempFile;

fn write_yaml(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_preset_limits_are_ordered() {
    let fast = SearchConfig::from_preset(Preset::Fast);
    let balanced = SearchConfig::from_preset(Preset::Balanced);
    let thorough = SearchConfig::from_preset(Preset::Thorough);

    assert!(fast.max_orders < balanced.max_orders);
    assert!(balanced.max_orders < thorough.max_orders);
    assert_eq!(thorough.rank_timeout_ms, 0);
}

#[test]
fn test_unbounded_has_no_deadline() {
    let config = SearchConfig::unbounded();
    assert_eq!(config.max_orders, 200);
    assert!(config.rank_deadline(Instant::now()).is_none());
    assert!(!config.allow_reexecution);
}

#[test]
fn test_fast_preset_sets_a_deadline() {
    let start = Instant::now();
    let deadline = SearchConfig::from_preset(Preset::Fast)
        .rank_deadline(start)
        .unwrap();
    assert_eq!(deadline.duration_since(start).as_millis(), 1_000);
}

#[test]
fn test_out_of_range_values_are_rejected() {
    assert!(matches!(
        SearchConfig::default().max_orders(0).validate(),
        Err(ConfigError::Range { .. })
    ));
    assert!(matches!(
        SearchConfig::default().max_orders(2_000_000).validate(),
        Err(ConfigError::Range { .. })
    ));
    assert!(SearchConfig::default()
        .rank_timeout_ms(u64::MAX)
        .validate()
        .is_err());
}

#[test]
fn test_preset_names_parse_case_insensitively() {
    assert_eq!(Preset::from_str("Thorough").unwrap(), Preset::Thorough);
    assert!(matches!(
        Preset::from_str("exhaustive"),
        Err(ConfigError::UnknownPreset(name)) if name == "exhaustive"
    ));
}

#[test]
fn test_engine_from_yaml_file() {
    let file = write_yaml(
        "version: 1\npreset: fast\noverrides:\n  max_orders: 3\n  allow_reexecution: true\n",
    );
    let config = SearchConfig::from_yaml(file.path()).unwrap();
    assert_eq!(config.preset, Preset::Fast);
    assert_eq!(config.max_orders, 3);
    assert!(config.allow_reexecution);

    let engine = OrderSearchEngine::new(config.clone()).unwrap();
    assert_eq!(engine.config(), &config);
}

#[test]
fn test_yaml_export_reloads_identically() {
    let config = SearchConfig::from_preset(Preset::Thorough)
        .rank_timeout_ms(500)
        .parallel_batches(false);
    let file = write_yaml(&config.to_yaml().unwrap());
    assert_eq!(SearchConfig::from_yaml(file.path()).unwrap(), config);
}

#[test]
fn test_preset_only_yaml_has_no_overrides() {
    let yaml = SearchConfig::from_preset(Preset::Balanced).to_yaml().unwrap();
    assert!(!yaml.contains("overrides"));
}

#[test]
fn test_yaml_with_bad_preset_is_rejected() {
    let file = write_yaml("version: 1\npreset: turbo\n");
    assert!(matches!(
        SearchConfig::from_yaml(file.path()),
        Err(ConfigError::UnknownPreset(_))
    ));
}
