use super::Statement;

use tether_core::{stmt::Query, Result};

#[derive(Debug, Clone)]
pub struct Select {
    pub table: String,

    pub query: Query,

    pub projection: Projection,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// The query's selection, or every column
    Rows,

    /// `COUNT(*)`
    Count,

    /// Distinct values of one column
    Distinct(String),
}

impl Select {
    pub fn new(query: &Query, projection: Projection) -> Result<Select> {
        Ok(Select {
            table: query.source()?.to_string(),
            query: query.clone(),
            projection,
        })
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
