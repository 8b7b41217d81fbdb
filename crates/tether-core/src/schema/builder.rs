use super::{verify, RecordType, Schema, Table, Type, Via};
use crate::Result;

use indexmap::IndexMap;
use std::sync::Arc;

/// Collects record types and junction tables, then freezes them into a
/// verified [`Schema`].
#[derive(Debug, Default)]
pub struct Builder {
    record_types: Vec<RecordType>,
    junctions: Vec<Table>,
    table_name_prefix: Option<String>,
}

impl Builder {
    pub fn register(&mut self, record_type: RecordType) -> &mut Self {
        self.record_types.push(record_type);
        self
    }

    /// Declares a junction table explicitly, typically to add extra columns.
    /// Junction tables referenced by relations but never declared are
    /// derived from the keys they join.
    pub fn junction(&mut self, table: Table) -> &mut Self {
        self.junctions.push(table);
        self
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn build(&self) -> Result<Schema> {
        let prefix = self.table_name_prefix.as_deref().unwrap_or("");

        let mut record_types = IndexMap::new();
        for record_type in &self.record_types {
            let mut record_type = record_type.clone();
            record_type.table.name = format!("{prefix}{}", record_type.table.name);

            for relation in record_type.relations.values_mut() {
                if let Via::JunctionTable(junction) = &relation.via {
                    let table = format!("{prefix}{}", junction.table);
                    if let Via::JunctionTable(junction) = &mut Arc::make_mut(relation).via {
                        junction.table = table;
                    }
                }
            }

            record_types.insert(record_type.name.clone(), Arc::new(record_type));
        }

        let mut junctions = IndexMap::new();
        for table in &self.junctions {
            let mut table = table.clone();
            table.name = format!("{prefix}{}", table.name);
            junctions.insert(table.name.clone(), table);
        }

        derive_junctions(&record_types, &mut junctions);

        let schema = Schema {
            record_types,
            junctions,
        };
        verify::verify(&schema)?;
        Ok(schema)
    }
}

/// Adds the key columns every junction-mediated relation needs, creating
/// the table when it was not declared.
fn derive_junctions(
    record_types: &IndexMap<String, Arc<RecordType>>,
    junctions: &mut IndexMap<String, Table>,
) {
    for source in record_types.values() {
        for relation in source.relations.values() {
            let Via::JunctionTable(junction) = &relation.via else {
                continue;
            };

            let source_ty = source.attr_ty(&junction.link_key).unwrap_or(Type::Id);
            let target_ty = record_types
                .get(&relation.target)
                .and_then(|target| target.attr_ty(&relation.ref_key))
                .unwrap_or(Type::Id);

            let table = junctions
                .entry(junction.table.clone())
                .or_insert_with(|| Table::new(junction.table.clone()));

            if table.get_column(&junction.ref_key).is_none() {
                table.set_column(junction.ref_key.clone(), source_ty);
            }
            if table.get_column(&relation.link_key).is_none() {
                table.set_column(relation.link_key.clone(), target_ty);
            }
        }
    }
}
