use super::Statement;

use tether_core::stmt::Condition;

#[derive(Debug, Clone)]
pub struct Delete {
    pub table: String,

    /// `None` deletes every row
    pub filter: Option<Condition>,
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
