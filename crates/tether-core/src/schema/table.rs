use super::Type;

/// Persisted layout of a table or collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,

    /// Primary key column. Junction tables have none.
    pub primary_key: Option<String>,

    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub ty: Type,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Table {
        Table {
            name: name.into(),
            primary_key: None,
            columns: vec![],
        }
    }

    /// Declares a column. Declaring an existing column replaces its type.
    pub fn column(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.set_column(name.into(), ty);
        self
    }

    pub(crate) fn set_column(&mut self, name: String, ty: Type) {
        match self.columns.iter_mut().find(|column| column.name == name) {
            Some(column) => column.ty = ty,
            None => self.columns.push(Column { name, ty }),
        }
    }

    pub fn get_column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn is_primary_key(&self, name: &str) -> bool {
        self.primary_key.as_deref() == Some(name)
    }
}
