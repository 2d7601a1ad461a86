//! Test fixtures
//!
//! `LineExtractor` is a toy front end for a tiny line-based language, enough
//! to drive `build_from_sources` end to end:
//!
//! ```text
//! import numpy as np      -> import np
//! def train               -> function definition
//! class Model             -> class declaration
//! x = a + f(b)            -> load a, call f, load b, store x
//! x += 1                  -> load x, store x
//! f(x)                    -> call f, load x
//! ```

use cellgraph_order::{CellgraphError, OccurrenceExtractor, OccurrenceRecord, Result};

pub struct LineExtractor;

impl OccurrenceExtractor for LineExtractor {
    fn extract_occurrences(&self, source: &str) -> Result<Vec<OccurrenceRecord>> {
        let mut records = Vec::new();
        for line in source.lines().map(str::trim).filter(|l| !l.is_empty()) {
            extract_line(line, &mut records)?;
        }
        Ok(records)
    }
}

fn extract_line(line: &str, records: &mut Vec<OccurrenceRecord>) -> Result<()> {
    if line.matches('(').count() != line.matches(')').count() {
        return Err(CellgraphError::extraction(format!(
            "unbalanced parentheses: {line}"
        )));
    }

    if let Some(rest) = line.strip_prefix("import ") {
        let name = rest.rsplit(" as ").next().unwrap_or(rest).trim();
        records.push(OccurrenceRecord::import(name));
        return Ok(());
    }
    if let Some(name) = line.strip_prefix("def ") {
        records.push(OccurrenceRecord::function_definition(name.trim()));
        return Ok(());
    }
    if let Some(name) = line.strip_prefix("class ") {
        records.push(OccurrenceRecord::class_declaration(name.trim()));
        return Ok(());
    }
    if let Some((target, value)) = line.split_once("+=") {
        extract_expression(value, records);
        records.extend(OccurrenceRecord::compound_assignment(target.trim()));
        return Ok(());
    }
    if let Some((target, value)) = line.split_once('=') {
        extract_expression(value, records);
        records.push(OccurrenceRecord::store(target.trim()));
        return Ok(());
    }
    extract_expression(line, records);
    Ok(())
}

fn extract_expression(expr: &str, records: &mut Vec<OccurrenceRecord>) {
    let chars: Vec<char> = expr.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_alphabetic() || chars[i] == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let name: String = chars[start..i].iter().collect();
            if chars.get(i) == Some(&'(') {
                records.push(OccurrenceRecord::call(name));
            } else {
                records.push(OccurrenceRecord::load(name));
            }
        } else {
            i += 1;
        }
    }
}

/// Load data, clean it, train, report (runs top to bottom)
pub fn fixture_linear_notebook() -> Vec<&'static str> {
    vec![
        "import pandas as pd",
        "path = 1",
        "df = pd(path)",
        "def clean",
        "df = clean(df)",
        "def fit",
        "model = fit(df)",
        "print(model)",
    ]
}

/// One loader feeding two branches that meet in a report
pub fn fixture_diamond_notebook() -> Vec<&'static str> {
    vec!["a = 1", "b = a + 1", "c = a + 2", "report = b + c"]
}

/// Cells saved in an order that does not run top to bottom
pub fn fixture_shuffled_notebook() -> Vec<&'static str> {
    vec!["print(total)", "total = base + 1", "base = 2"]
}
