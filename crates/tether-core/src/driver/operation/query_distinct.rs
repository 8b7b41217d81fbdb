use super::*;

#[derive(Debug, Clone)]
pub struct QueryDistinct {
    pub query: stmt::Query,

    /// Attribute whose distinct values are returned, in first-seen order
    pub key: String,
}

impl From<QueryDistinct> for Operation {
    fn from(value: QueryDistinct) -> Self {
        Self::QueryDistinct(value)
    }
}
