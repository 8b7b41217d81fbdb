use super::*;

#[derive(Debug, Clone)]
pub struct Insert {
    pub table: String,

    /// Attribute values. When the primary key is absent or null the backend
    /// assigns one.
    pub row: stmt::Row,
}

impl From<Insert> for Operation {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
