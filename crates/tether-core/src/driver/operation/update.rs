use super::*;

#[derive(Debug, Clone)]
pub struct Update {
    pub table: String,

    /// Primary key column
    pub key: String,

    /// Identity of the row to update
    pub id: stmt::Value,

    /// Attributes to assign
    pub values: stmt::Row,
}

impl From<Update> for Operation {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
