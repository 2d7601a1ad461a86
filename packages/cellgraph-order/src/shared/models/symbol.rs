//! Symbol identity
//!
//! A symbol is a name plus the kind of use it was seen in. `x` as a value
//! and `x` as a call target are different symbols.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a name is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// Plain reference (variables, objects, modules used as values)
    Variable,
    /// Call target
    Function,
}

impl SymbolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Variable => "var",
            Self::Function => "fun",
        }
    }
}

/// A named entity exchanged between units
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Self::new(name, SymbolKind::Variable)
    }

    pub fn function(name: impl Into<String>) -> Self {
        Self::new(name, SymbolKind::Function)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SymbolKind::Variable => write!(f, "{}", self.name),
            SymbolKind::Function => write!(f, "{}()", self.name),
        }
    }
}
