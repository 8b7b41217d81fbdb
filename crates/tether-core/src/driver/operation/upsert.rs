use super::*;

#[derive(Debug, Clone)]
pub struct Upsert {
    pub table: String,

    /// Attributes of `row` identifying the existing row
    pub keys: Vec<String>,

    pub row: stmt::Row,
}

impl From<Upsert> for Operation {
    fn from(value: Upsert) -> Self {
        Self::Upsert(value)
    }
}
