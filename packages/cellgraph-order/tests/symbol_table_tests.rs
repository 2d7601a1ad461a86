//! Symbol table reduction through the public API

mod common;

use cellgraph_order::{
    build_from_sources, OccurrenceExtractor, OccurrenceRecord, Symbol, SymbolTableBuilder,
};
use common::*;
use pretty_assertions::assert_eq;

fn reduce_source(source: &str) -> cellgraph_order::SymbolTable {
    let records = LineExtractor.extract_occurrences(source).unwrap();
    SymbolTableBuilder::new().reduce(&records)
}

#[test]
fn test_import_alias_produces_both_kinds() {
    let table = reduce_source("import numpy as np");
    assert_eq!(
        table.sorted_producers(),
        vec![Symbol::variable("np"), Symbol::function("np")]
    );
    assert!(table.consumers().is_empty());
}

#[test]
fn test_assignment_reads_right_hand_side() {
    let table = reduce_source("total = base + scale(factor)");
    assert!(table.produces(&Symbol::variable("total")));
    assert!(table.consumes(&Symbol::variable("base")));
    assert!(table.consumes(&Symbol::variable("factor")));
    assert!(table.consumes(&Symbol::function("scale")));
    assert!(!table.consumes(&Symbol::variable("scale")));
}

#[test]
fn test_rebinding_from_itself_is_consumer_only() {
    let table = reduce_source("df = clean(df)");
    assert!(table.consumes(&Symbol::variable("df")));
    assert!(!table.produces(&Symbol::variable("df")));
}

#[test]
fn test_compound_assignment_is_consumer_only() {
    let table = reduce_source("x += 1");
    assert_eq!(table.sorted_consumers(), vec![Symbol::variable("x")]);
    assert!(table.producers().is_empty());
}

#[test]
fn test_write_then_read_in_one_unit_is_self_sufficient() {
    let table = reduce_source("x = 1\nprint(x)");
    assert!(table.is_self_sufficient());
    assert_eq!(table.sorted_producers(), vec![Symbol::variable("x")]);
}

#[test]
fn test_definition_precedes_use_regardless_of_line_order() {
    let table = reduce_source("result = helper(1)\ndef helper");
    assert!(table.produces(&Symbol::function("helper")));
    assert!(table.is_self_sufficient());
}

#[test]
fn test_builtins_never_create_dependencies() {
    let table = reduce_source("n = len(range(10))\nprint(n)");
    assert_eq!(table.sorted_producers(), vec![Symbol::variable("n")]);
    assert!(table.is_self_sufficient());
}

#[test]
fn test_class_declaration_is_a_producer() {
    let table = reduce_source("class Model");
    assert!(table.produces(&Symbol::function("Model")));
    assert!(table.produces(&Symbol::variable("Model")));
}

#[test]
fn test_graph_tables_match_per_unit_reduction() {
    let sources = fixture_linear_notebook();
    let graph = build_from_sources(&LineExtractor, &sources);
    for (unit, source) in sources.iter().enumerate() {
        assert_eq!(graph.table(unit), &reduce_source(source), "unit {unit}");
    }
}

#[test]
fn test_records_deserialize_from_front_end_json() {
    let json = r#"[
        {"name": "np", "kind": "function", "role": "definition"},
        {"name": "arr", "kind": "variable", "role": "store"},
        {"name": "np", "kind": "function", "role": "load"}
    ]"#;
    let records: Vec<OccurrenceRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(records[0], OccurrenceRecord::import("np"));
    assert_eq!(records[1], OccurrenceRecord::store("arr"));
    assert_eq!(records[2], OccurrenceRecord::call("np"));

    let table = SymbolTableBuilder::new().reduce(&records);
    assert!(table.is_self_sufficient());
}
