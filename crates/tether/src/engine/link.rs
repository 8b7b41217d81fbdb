use super::{cache, push_key, required_key, via_hop};
use crate::{Db, Error, Record, Result};

use tether_core::{schema::Via, stmt::Row};

/// Creates one instance of relation `name` between `record` and `target`.
///
/// Only the side storing the key is written; an array-valued key gains the
/// other side's key unless it already holds it. Junction relations insert a
/// junction row carrying `extra` as additional columns; via-relations
/// upsert the intermediate record. A populated relation cache on `record`
/// is patched in place.
pub(crate) async fn link(
    db: &Db,
    record: &mut Record,
    name: &str,
    target: &mut Record,
    extra: Row,
) -> Result<()> {
    let relation = record.record_type().get_relation(name)?.clone();

    match &relation.via {
        Via::None | Via::Array if relation.is_back_ref(record.record_type()) => {
            let key = required_key(record, &relation.link_key)?;
            tracing::debug!(relation = name, side = "target", "link");

            if relation.via == Via::Array {
                let keys = push_key(target.get(&relation.ref_key), key);
                target.set(&relation.ref_key, keys);
            } else {
                target.set(&relation.ref_key, key);
            }
            for (column, value) in extra {
                target.set(column, value);
            }
            db.save(target).await?;
        }
        Via::None | Via::Array => {
            if record.is_new() {
                return Err(Error::not_persisted(record.type_name()));
            }
            let key = required_key(target, &relation.ref_key)?;
            tracing::debug!(relation = name, side = "source", "link");

            if relation.via == Via::Array {
                let keys = push_key(record.get(&relation.link_key), key);
                record.set(&relation.link_key, keys);
            } else {
                record.set(&relation.link_key, key);
            }

            for (column, value) in extra {
                record.set(column, value);
            }
            db.save(record).await?;
        }
        Via::JunctionTable(junction) => {
            let source = required_key(record, &junction.link_key)?;
            let key = required_key(target, &relation.ref_key)?;
            tracing::debug!(relation = name, table = %junction.table, "link");

            let mut row = Row::new();
            row.insert(junction.ref_key.clone(), source);
            row.insert(relation.link_key.clone(), key);
            row.extend(extra);

            db.insert_row(&junction.table, row).await?;
        }
        Via::Relation(via) => {
            let hop = via_hop(record, name, via)?.clone();
            let intermediate = db.schema().record_type(&hop.target)?.clone();

            let source = required_key(record, &hop.link_key)?;
            let key = required_key(target, &relation.ref_key)?;
            tracing::debug!(relation = name, via = %via, "link");

            let mut row = Row::new();
            row.insert(hop.ref_key.clone(), source);
            row.insert(relation.link_key.clone(), key);
            row.extend(extra);

            db.upsert(
                &intermediate.table.name,
                &[hop.ref_key.as_str(), relation.link_key.as_str()],
                row,
            )
            .await?;

            record.unset_related(via);
        }
    }

    cache::add(record, name, &relation, target);
    Ok(())
}
