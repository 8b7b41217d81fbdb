use super::Statement;

use tether_core::stmt::Row;

#[derive(Debug, Clone)]
pub struct Insert {
    pub table: String,

    /// Columns and values, in order. An empty row inserts defaults.
    pub row: Row,

    /// Column returned from the inserted row
    pub returning: Option<String>,
}

impl Insert {
    pub fn returning(mut self, column: &str) -> Self {
        self.returning = Some(column.to_string());
        self
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
