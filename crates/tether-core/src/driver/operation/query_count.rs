use super::*;

#[derive(Debug, Clone)]
pub struct QueryCount {
    /// Only the source and condition are used
    pub query: stmt::Query,
}

impl From<QueryCount> for Operation {
    fn from(value: QueryCount) -> Self {
        Self::QueryCount(value)
    }
}
