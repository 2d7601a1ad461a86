//! Centralized constants
//!
//! Fixed tables and default limits used across features.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Names that never enter a producer or consumer set.
///
/// Interpreter built-ins plus a handful of names every notebook sees
/// without defining them (`__name__`, `IPython`, common exception types).
pub const BUILTIN_NAMES: &[&str] = &[
    "abs", "delattr", "hash", "memoryview", "set", "all", "dict", "help", "min", "setattr", "any",
    "dir", "hex", "next", "slice", "ascii", "divmod", "id", "object", "sorted", "bin",
    "enumerate", "input", "oct", "staticmethod", "bool", "eval", "int", "open", "str",
    "breakpoint", "exec", "isinstance", "ord", "sum", "bytearray", "filter", "issubclass", "pow",
    "super", "bytes", "float", "iter", "print", "tuple", "callable", "format", "len", "property",
    "type", "chr", "frozenset", "list", "range", "vars", "classmethod", "getattr", "locals",
    "repr", "zip", "compile", "globals", "map", "reversed", "__import__", "complex", "hasattr",
    "max", "round", "__name__", "ImportError", "IPython", "ValueError",
];

static BUILTIN_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| BUILTIN_NAMES.iter().copied().collect());

/// Returns true if `name` is on the built-in exclusion list.
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_SET.contains(name)
}

/// Search limits
pub mod search {
    /// Default cap on the number of orders collected by exhaustive search
    pub const DEFAULT_MAX_ORDERS: usize = 200;

    /// Upper bound accepted for `max_orders`
    pub const MAX_ORDERS_LIMIT: usize = 1_000_000;

    /// Upper bound accepted for the rank search deadline (1 hour)
    pub const MAX_RANK_TIMEOUT_MS: u64 = 3_600_000;
}
