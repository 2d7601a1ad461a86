//! Occurrence records
//!
//! The only thing a language front end hands to this crate: for each unit, a
//! stream of `(name, kind, role)` records in the order the front end walked
//! the source.
//!
//! Front-end obligations (not checked here):
//! - compound assignments (`x += 1`) are expanded to a Load followed by a
//!   Store, see [`OccurrenceRecord::compound_assignment`]
//! - class bodies are not walked; only the class name is emitted
//! - imported names are emitted as definitions at the import site

use super::symbol::{Symbol, SymbolKind};
use serde::{Deserialize, Serialize};

/// What the unit does with the name at this occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccurrenceRole {
    /// Declaration (def, class, import). Logically precedes every other role.
    Definition,
    /// Assignment target
    Store,
    /// Read
    Load,
}

/// One occurrence of a name inside a unit
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OccurrenceRecord {
    pub name: String,
    pub kind: SymbolKind,
    pub role: OccurrenceRole,
}

impl OccurrenceRecord {
    pub fn new(name: impl Into<String>, kind: SymbolKind, role: OccurrenceRole) -> Self {
        Self {
            name: name.into(),
            kind,
            role,
        }
    }

    /// Variable definition
    pub fn definition(name: impl Into<String>) -> Self {
        Self::new(name, SymbolKind::Variable, OccurrenceRole::Definition)
    }

    /// Variable assignment
    pub fn store(name: impl Into<String>) -> Self {
        Self::new(name, SymbolKind::Variable, OccurrenceRole::Store)
    }

    /// Variable read
    pub fn load(name: impl Into<String>) -> Self {
        Self::new(name, SymbolKind::Variable, OccurrenceRole::Load)
    }

    /// `def name(...)`
    pub fn function_definition(name: impl Into<String>) -> Self {
        Self::new(name, SymbolKind::Function, OccurrenceRole::Definition)
    }

    /// Call of `name(...)`
    pub fn call(name: impl Into<String>) -> Self {
        Self::new(name, SymbolKind::Function, OccurrenceRole::Load)
    }

    /// Imported name (`import numpy as np` emits `np`)
    ///
    /// Imports are callable as well as referenceable, so they are emitted as
    /// function definitions.
    pub fn import(name: impl Into<String>) -> Self {
        Self::function_definition(name)
    }

    /// `class Name: ...` (the body is never emitted)
    pub fn class_declaration(name: impl Into<String>) -> Self {
        Self::function_definition(name)
    }

    /// `name op= expr` expanded to read-then-write
    pub fn compound_assignment(name: impl Into<String>) -> [Self; 2] {
        let name = name.into();
        [Self::load(name.clone()), Self::store(name)]
    }

    pub fn is_definition(&self) -> bool {
        self.role == OccurrenceRole::Definition
    }

    pub fn symbol(&self) -> Symbol {
        Symbol::new(self.name.clone(), self.kind)
    }
}
