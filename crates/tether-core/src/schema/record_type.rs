use super::{Relation, Table, Type};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// A kind of record: its persisted layout and its named relations.
///
/// Relations are registered by name when the type is declared; lookups go
/// through this map and never through reflection.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordType {
    pub name: String,
    pub table: Table,
    pub relations: IndexMap<String, Arc<Relation>>,
}

impl RecordType {
    /// Declares a record type stored in a table of the same name, keyed by `id`.
    pub fn new(name: impl Into<String>) -> RecordType {
        let name = name.into();
        let mut table = Table::new(name.clone());
        table.primary_key = Some("id".to_string());
        table.set_column("id".to_string(), Type::Id);

        RecordType {
            name,
            table,
            relations: IndexMap::new(),
        }
    }

    pub fn table(mut self, name: impl Into<String>) -> Self {
        self.table.name = name.into();
        self
    }

    /// Renames the primary key column.
    pub fn primary_key(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if let Some(old) = self.table.primary_key.replace(name.clone()) {
            self.table.columns.retain(|column| column.name != old);
        }
        self.table.columns.insert(
            0,
            super::Column {
                name,
                ty: Type::Id,
            },
        );
        self
    }

    pub fn attr(mut self, name: impl Into<String>, ty: Type) -> Self {
        self.table.set_column(name.into(), ty);
        self
    }

    pub fn relation(mut self, name: impl Into<String>, relation: Relation) -> Self {
        self.relations.insert(name.into(), Arc::new(relation));
        self
    }

    pub fn primary_key_name(&self) -> &str {
        self.table.primary_key.as_deref().unwrap_or("id")
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.table.get_column(name).is_some()
    }

    pub fn attr_ty(&self, name: &str) -> Option<Type> {
        self.table.get_column(name).map(|column| column.ty)
    }

    /// Looks up a relation, failing if none is registered under `name`.
    pub fn get_relation(&self, name: &str) -> Result<&Arc<Relation>> {
        self.relations
            .get(name)
            .ok_or_else(|| Error::unknown_relation(&self.name, name))
    }
}
