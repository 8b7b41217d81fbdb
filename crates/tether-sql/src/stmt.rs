mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod drop_table;
pub use drop_table::DropTable;

mod insert;
pub use insert::Insert;

mod select;
pub use select::{Projection, Select};

mod update;
pub use update::Update;

use tether_core::{
    stmt::{Condition, Query, Row, Value},
    Result,
};

#[derive(Debug, Clone)]
pub enum Statement {
    CreateTable(CreateTable),
    Delete(Delete),
    DropTable(DropTable),
    Insert(Insert),
    Select(Select),
    Update(Update),
}

impl Statement {
    /// Selects every projected attribute of the rows matching `query`.
    pub fn select(query: &Query) -> Result<Statement> {
        Ok(Select::new(query, Projection::Rows)?.into())
    }

    pub fn count(query: &Query) -> Result<Statement> {
        Ok(Select::new(query, Projection::Count)?.into())
    }

    pub fn distinct(query: &Query, key: &str) -> Result<Statement> {
        Ok(Select::new(query, Projection::Distinct(key.to_string()))?.into())
    }

    pub fn insert(table: &str, row: &Row) -> Statement {
        Insert {
            table: table.to_string(),
            row: row.clone(),
            returning: None,
        }
        .into()
    }

    /// Updates the row whose `key` column equals `id`.
    pub fn update_by_key(table: &str, key: &str, id: &Value, values: &Row) -> Statement {
        Update {
            table: table.to_string(),
            values: values.clone(),
            filter: Some(Condition::eq(key, id)),
        }
        .into()
    }

    pub fn update_all(query: &Query, values: &Row) -> Result<Statement> {
        Ok(Update {
            table: query.source()?.to_string(),
            values: values.clone(),
            filter: query.condition.clone(),
        }
        .into())
    }

    pub fn delete(query: &Query) -> Result<Statement> {
        Ok(Delete {
            table: query.source()?.to_string(),
            filter: query.condition.clone(),
        }
        .into())
    }
}
