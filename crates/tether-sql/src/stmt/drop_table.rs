use super::Statement;

#[derive(Debug, Clone)]
pub struct DropTable {
    pub name: String,

    /// Whether or not to add an `IF EXISTS` clause.
    pub if_exists: bool,
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::DropTable(value)
    }
}

impl Statement {
    pub fn drop_table(name: &str) -> Self {
        DropTable {
            name: name.to_string(),
            if_exists: false,
        }
        .into()
    }

    pub fn drop_table_if_exists(name: &str) -> Self {
        DropTable {
            name: name.to_string(),
            if_exists: true,
        }
        .into()
    }
}
