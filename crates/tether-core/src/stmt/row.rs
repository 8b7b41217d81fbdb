use super::Value;

use indexmap::IndexMap;

/// A single stored row or document: attribute name to value, in column order.
pub type Row = IndexMap<String, Value>;
