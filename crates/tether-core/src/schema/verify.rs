use super::{Relation, RecordType, Schema, Via};
use crate::{Error, Result};

use std::collections::HashSet;

pub(super) fn verify(schema: &Schema) -> Result<()> {
    Verify { schema }.verify()
}

struct Verify<'a> {
    schema: &'a Schema,
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        for source in self.schema.record_types() {
            for (name, relation) in &source.relations {
                self.verify_relation(source, name, relation)
                    .map_err(|err| {
                        err.context(crate::err!(
                            "relation `{name}` on record type `{}`",
                            source.name
                        ))
                    })?;
            }
        }

        Ok(())
    }

    fn verify_relation(&self, source: &RecordType, name: &str, relation: &Relation) -> Result<()> {
        let Ok(target) = self.schema.record_type(&relation.target) else {
            return Err(Error::invalid_relation(format!(
                "target record type `{}` is not registered",
                relation.target
            )));
        };

        // the side storing the key
        let (owner, key) = if relation.is_back_ref(source) {
            (&**target, &relation.ref_key)
        } else {
            (source, &relation.link_key)
        };
        let list_key = owner.attr_ty(key).is_some_and(|ty| ty.is_list());

        match &relation.via {
            Via::None => {
                if list_key {
                    return Err(Error::invalid_relation(format!(
                        "`{key}` is list-valued; declare the relation with `via_array`"
                    )));
                }
            }
            Via::Array => {
                if !list_key {
                    return Err(Error::invalid_relation(format!(
                        "array key `{key}` must be a list attribute of `{}`",
                        owner.name
                    )));
                }
            }
            Via::JunctionTable(junction) => {
                if self.schema.junctions.get(&junction.table).is_none() {
                    return Err(Error::invalid_relation(format!(
                        "junction table `{}` is not declared",
                        junction.table
                    )));
                }
            }
            Via::Relation(_) => self.verify_via_chain(source, name)?,
        }

        if let Some(inverse) = &relation.inverse_of {
            if !target.relations.contains_key(inverse) {
                return Err(Error::invalid_relation(format!(
                    "inverse `{inverse}` is not a relation of `{}`",
                    target.name
                )));
            }
        }

        for path in &relation.eager {
            let head = path.split('.').next().unwrap_or(path);
            if !target.relations.contains_key(head) {
                return Err(Error::invalid_relation(format!(
                    "eager path `{path}` does not start with a relation of `{}`",
                    target.name
                )));
            }
        }

        Ok(())
    }

    /// Follows a via-relation chain until it reaches an unmediated hop.
    fn verify_via_chain(&self, source: &RecordType, start: &str) -> Result<()> {
        let mut visited = HashSet::new();
        let mut current = start;

        loop {
            if !visited.insert(current) {
                return Err(Error::invalid_relation(format!(
                    "via chain starting at `{start}` loops through `{current}`"
                )));
            }

            let Some(relation) = source.relations.get(current) else {
                return Err(Error::invalid_relation(format!(
                    "via relation `{current}` is not a relation of `{}`",
                    source.name
                )));
            };

            match &relation.via {
                Via::Relation(next) => current = next,
                _ => return Ok(()),
            }
        }
    }
}
