mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod query_all;
pub use query_all::QueryAll;

mod query_count;
pub use query_count::QueryCount;

mod query_distinct;
pub use query_distinct::QueryDistinct;

mod update;
pub use update::Update;

mod update_all;
pub use update_all::UpdateAll;

mod upsert;
pub use upsert::Upsert;

use crate::stmt;

#[derive(Debug, Clone)]
pub enum Operation {
    /// Delete every row matching a query
    Delete(Delete),

    /// Create a new row, returning its identity
    Insert(Insert),

    /// Read the rows matching a query
    QueryAll(QueryAll),

    /// Count the rows matching a query
    QueryCount(QueryCount),

    /// Read the distinct values of one attribute
    QueryDistinct(QueryDistinct),

    /// Update one row by its primary key
    Update(Update),

    /// Update every row matching a query
    UpdateAll(UpdateAll),

    /// Update the row matching a set of key attributes, or insert it
    Upsert(Upsert),
}

impl Operation {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Delete(_) => "delete",
            Operation::Insert(_) => "insert",
            Operation::QueryAll(_) => "query_all",
            Operation::QueryCount(_) => "query_count",
            Operation::QueryDistinct(_) => "query_distinct",
            Operation::Update(_) => "update",
            Operation::UpdateAll(_) => "update_all",
            Operation::Upsert(_) => "upsert",
        }
    }

    /// Table the operation targets, if it names one.
    pub fn table(&self) -> Option<&str> {
        match self {
            Operation::Delete(op) => op.query.from.as_deref(),
            Operation::Insert(op) => Some(&op.table),
            Operation::QueryAll(op) => op.query.from.as_deref(),
            Operation::QueryCount(op) => op.query.from.as_deref(),
            Operation::QueryDistinct(op) => op.query.from.as_deref(),
            Operation::Update(op) => Some(&op.table),
            Operation::UpdateAll(op) => op.query.from.as_deref(),
            Operation::Upsert(op) => Some(&op.table),
        }
    }

    pub fn is_read(&self) -> bool {
        matches!(
            self,
            Operation::QueryAll(_) | Operation::QueryCount(_) | Operation::QueryDistinct(_)
        )
    }
}
