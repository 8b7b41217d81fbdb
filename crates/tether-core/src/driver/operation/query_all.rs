use super::*;

#[derive(Debug, Clone)]
pub struct QueryAll {
    /// Selection, filter, ordering and paging of the read. Regrouping by
    /// `order_by_in` and re-keying by `index_key` happen above the driver.
    pub query: stmt::Query,
}

impl From<QueryAll> for Operation {
    fn from(value: QueryAll) -> Self {
        Self::QueryAll(value)
    }
}
