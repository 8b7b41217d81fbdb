use super::*;

#[derive(Debug, Clone)]
pub struct Delete {
    pub query: stmt::Query,
}

impl From<Delete> for Operation {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
