use crate::{
    stmt::{Row, Value},
    Error, Result,
};

#[derive(Debug, Clone)]
pub struct Response {
    pub rows: Rows,
}

#[derive(Debug, Clone)]
pub enum Rows {
    /// Number of rows impacted or matched by the operation
    Count(u64),

    /// Operation result, as rows
    Values(Vec<Row>),

    /// A single column of values
    List(Vec<Value>),

    /// Identity assigned to an inserted row
    Identity(Value),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
        }
    }

    pub fn values(rows: Vec<Row>) -> Self {
        Self {
            rows: Rows::Values(rows),
        }
    }

    pub fn list(values: Vec<Value>) -> Self {
        Self {
            rows: Rows::List(values),
        }
    }

    pub fn identity(id: impl Into<Value>) -> Self {
        Self {
            rows: Rows::Identity(id.into()),
        }
    }

    pub fn into_values(self) -> Result<Vec<Row>> {
        match self.rows {
            Rows::Values(rows) => Ok(rows),
            rows => Err(unexpected("rows", &rows)),
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self.rows {
            Rows::Count(count) => Ok(count),
            rows => Err(unexpected("a count", &rows)),
        }
    }

    pub fn into_list(self) -> Result<Vec<Value>> {
        match self.rows {
            Rows::List(values) => Ok(values),
            rows => Err(unexpected("a list", &rows)),
        }
    }

    pub fn into_identity(self) -> Result<Value> {
        match self.rows {
            Rows::Identity(id) => Ok(id),
            rows => Err(unexpected("an identity", &rows)),
        }
    }
}

impl Rows {
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count(_))
    }

    pub fn is_values(&self) -> bool {
        matches!(self, Self::Values(_))
    }

    fn describe(&self) -> &'static str {
        match self {
            Rows::Count(_) => "a count",
            Rows::Values(_) => "rows",
            Rows::List(_) => "a list",
            Rows::Identity(_) => "an identity",
        }
    }
}

fn unexpected(expected: &str, actual: &Rows) -> Error {
    Error::invalid_result(format!(
        "expected {expected}, driver returned {}",
        actual.describe()
    ))
}
