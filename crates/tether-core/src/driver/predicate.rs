use crate::stmt::Value;

/// A condition compiled into a backend's native form.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// A parameterized filter fragment and its bound parameters, in order
    Sql { fragment: String, params: Vec<Value> },

    /// A nested key/operator filter document
    Document(serde_json::Value),
}

impl Predicate {
    pub fn as_sql(&self) -> Option<(&str, &[Value])> {
        match self {
            Predicate::Sql { fragment, params } => Some((fragment, params)),
            Predicate::Document(_) => None,
        }
    }

    pub fn as_document(&self) -> Option<&serde_json::Value> {
        match self {
            Predicate::Document(doc) => Some(doc),
            Predicate::Sql { .. } => None,
        }
    }
}
