use super::Statement;

use tether_core::schema::Table;

/// `CREATE TABLE IF NOT EXISTS` for a schema table.
#[derive(Debug, Clone)]
pub struct CreateTable {
    pub table: Table,
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}

impl Statement {
    pub fn create_table(table: &Table) -> Self {
        CreateTable {
            table: table.clone(),
        }
        .into()
    }
}
