use super::Statement;

use tether_core::stmt::{Condition, Row};

#[derive(Debug, Clone)]
pub struct Update {
    pub table: String,

    /// Assignments, in order
    pub values: Row,

    /// `None` updates every row
    pub filter: Option<Condition>,
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
