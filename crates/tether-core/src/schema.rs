mod builder;
pub use builder::Builder;

mod record_type;
pub use record_type::RecordType;

mod relation;
pub use relation::{Cardinality, Junction, Relation, Via};

mod table;
pub use table::{Column, Table};

mod ty;
pub use ty::Type;

mod verify;

use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

/// The frozen registry of record types and junction tables.
///
/// Built once by [`Builder`]; every relation descriptor it holds has been
/// checked against the other registered types.
#[derive(Debug, Default)]
pub struct Schema {
    record_types: IndexMap<String, Arc<RecordType>>,
    junctions: IndexMap<String, Table>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Looks up a record type by name.
    pub fn record_type(&self, name: &str) -> Result<&Arc<RecordType>> {
        self.record_types
            .get(name)
            .ok_or_else(|| Error::invalid_statement(format!("unknown record type `{name}`")))
    }

    /// Looks up a relation descriptor on a record type.
    pub fn relation(&self, record_type: &str, name: &str) -> Result<&Arc<Relation>> {
        self.record_type(record_type)?.get_relation(name)
    }

    pub fn record_types(&self) -> impl Iterator<Item = &Arc<RecordType>> {
        self.record_types.values()
    }

    /// Every table the backend must hold: record type tables first, then
    /// junction tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.record_types
            .values()
            .map(|ty| &ty.table)
            .chain(self.junctions.values())
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables().find(|table| table.name == name)
    }
}
