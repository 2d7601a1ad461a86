//! Symbol Table - per-unit producer/consumer sets (Hexagonal Architecture)
//!
//! ```text
//! front end ──(OccurrenceExtractor port)──▶ [OccurrenceRecord]
//!                                              │
//!                                   SymbolTableBuilder::reduce
//!                                              ▼
//!                                    SymbolTable { producers, consumers }
//! ```
//!
//! - domain/         - `SymbolTable`
//! - ports/          - `OccurrenceExtractor` (language front end boundary)
//! - infrastructure/ - the reduction rules

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::SymbolTable;
pub use infrastructure::SymbolTableBuilder;
pub use ports::OccurrenceExtractor;
