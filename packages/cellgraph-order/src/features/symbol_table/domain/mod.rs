//! Symbol table domain models

mod symbol_table;

pub use symbol_table::SymbolTable;
