use super::{cache, distinct, drop_key, required_key, via_hop};
use crate::{Db, Error, Record, Result};

use tether_core::{
    schema::{RecordType, Relation, Via},
    stmt::{Condition, Query, Row, Value},
};

/// Removes one instance of relation `name` between `record` and `target`.
///
/// With `remove` the formerly linked target is deleted; without it the
/// link is only decoupled. `None` takes the relation's default.
pub(crate) async fn unlink(
    db: &Db,
    record: &mut Record,
    name: &str,
    target: &mut Record,
    remove: Option<bool>,
) -> Result<()> {
    let relation = record.record_type().get_relation(name)?.clone();
    let remove = remove.unwrap_or(relation.remove_on_unlink);

    tracing::debug!(relation = name, remove, "unlink");

    match &relation.via {
        Via::None | Via::Array if relation.is_back_ref(record.record_type()) => {
            let key = required_key(record, &relation.link_key)?;

            // a target owned by another record is left alone
            let linked = target.get(&relation.ref_key).keys().any(|k| *k == key);

            if linked && remove {
                db.delete(target).await?;
            } else if linked {
                let decoupled = match relation.via {
                    Via::Array => drop_key(target.get(&relation.ref_key), &key),
                    _ => Value::Null,
                };
                target.set(&relation.ref_key, decoupled);
                db.save(target).await?;
            }
        }
        Via::None | Via::Array => {
            if record.is_new() {
                return Err(Error::not_persisted(record.type_name()));
            }
            let key = required_key(target, &relation.ref_key)?;

            match record.get(&relation.link_key) {
                keys @ Value::List(_) => {
                    let keys = drop_key(keys, &key);
                    record.set(&relation.link_key, keys);
                }
                current if *current == key => {
                    record.set(&relation.link_key, Value::Null);
                }
                _ => {}
            }
            db.save(record).await?;

            if remove {
                db.delete(target).await?;
            }
        }
        Via::JunctionTable(junction) => {
            let source = required_key(record, &junction.link_key)?;
            let key = required_key(target, &relation.ref_key)?;

            let query = Query::table(&junction.table).where_(Condition::and(
                Condition::eq(&junction.ref_key, source),
                Condition::eq(&relation.link_key, key),
            ));
            db.delete_all(&query).await?;

            if remove {
                db.delete(target).await?;
            }
        }
        Via::Relation(via) => {
            let hop = via_hop(record, name, via)?.clone();
            let intermediate = db.schema().record_type(&hop.target)?.clone();

            let source = required_key(record, &hop.link_key)?;
            let key = required_key(target, &relation.ref_key)?;

            let query = Query::table(&intermediate.table.name).where_(Condition::and(
                Condition::eq(&hop.ref_key, source),
                Condition::eq(&relation.link_key, key),
            ));

            if remove {
                db.delete_where(&intermediate.name, query).await?;
                db.delete(target).await?;
            } else {
                db.update_all(&query, null_row(&relation.link_key)).await?;
            }

            record.unset_related(via);
        }
    }

    cache::remove(record, name, target);
    Ok(())
}

/// Removes every instance of relation `name` on `record`.
///
/// Runs as bulk statements unless targets are deleted and either the target
/// type has hooks or the key is array-valued; then targets are loaded and
/// deleted one at a time. Targets holding the record's key in an array are
/// also decoupled one at a time.
pub(crate) async fn unlink_all(
    db: &Db,
    record: &mut Record,
    name: &str,
    remove: Option<bool>,
) -> Result<()> {
    let relation = record.record_type().get_relation(name)?.clone();
    let remove = remove.unwrap_or(relation.remove_on_unlink);
    let target = db.schema().record_type(&relation.target)?.clone();

    tracing::debug!(relation = name, remove, "unlink all");

    match &relation.via {
        Via::Array if relation.is_back_ref(record.record_type()) => {
            let key = required_key(record, &relation.link_key)?;
            let condition = Condition::contains(&relation.ref_key, key.clone());
            let query = target_query(&relation, &target, condition);

            if remove {
                delete_targets(db, &relation, &target, query).await?;
            } else {
                // each target keeps its other keys
                for mut linked in db.find_all(&target.name, query).await? {
                    let keys = drop_key(linked.get(&relation.ref_key), &key);
                    linked.set(&relation.ref_key, keys);
                    db.save(&mut linked).await?;
                }
            }
        }
        Via::None if relation.is_back_ref(record.record_type()) => {
            let key = required_key(record, &relation.link_key)?;
            let query = target_query(&relation, &target, Condition::eq(&relation.ref_key, key));

            if remove {
                delete_targets(db, &relation, &target, query).await?;
            } else {
                db.update_all(&query, null_row(&relation.ref_key)).await?;
            }
        }
        Via::None | Via::Array => {
            if record.is_new() {
                return Err(Error::not_persisted(record.type_name()));
            }
            let keys = distinct(record.get(&relation.link_key).keys());

            if remove && !keys.is_empty() {
                let condition = Condition::in_list(&relation.ref_key, Value::List(keys));
                let query = target_query(&relation, &target, condition);
                delete_targets(db, &relation, &target, query).await?;
            }

            let cleared = match relation.via {
                Via::Array => Value::List(vec![]),
                _ => Value::Null,
            };
            record.set(&relation.link_key, cleared);
            db.save(record).await?;
        }
        Via::JunctionTable(junction) => {
            let source = required_key(record, &junction.link_key)?;
            let rows = Query::table(&junction.table).where_(Condition::eq(&junction.ref_key, source));

            let keys = if remove {
                db.query_column(&rows, &relation.link_key).await?
            } else {
                vec![]
            };

            db.delete_all(&rows).await?;

            let keys = distinct(&keys);
            if !keys.is_empty() {
                let condition = Condition::in_list(&relation.ref_key, Value::List(keys));
                let query = target_query(&relation, &target, condition);
                delete_targets(db, &relation, &target, query).await?;
            }
        }
        Via::Relation(via) => {
            let hop = via_hop(record, name, via)?.clone();
            let intermediate = db.schema().record_type(&hop.target)?.clone();

            let source = required_key(record, &hop.link_key)?;
            let rows = Query::table(&intermediate.table.name)
                .where_(Condition::eq(&hop.ref_key, source))
                .and_where(Condition::is_not_null(&relation.link_key));

            if remove {
                let keys = distinct(&db.query_column(&rows, &relation.link_key).await?);
                db.delete_where(&intermediate.name, rows).await?;

                if !keys.is_empty() {
                    let condition = Condition::in_list(&relation.ref_key, Value::List(keys));
                    let query = target_query(&relation, &target, condition);
                    delete_targets(db, &relation, &target, query).await?;
                }
            } else {
                db.update_all(&rows, null_row(&relation.link_key)).await?;
            }

            record.unset_related(via);
        }
    }

    cache::clear(record, name, &relation);
    Ok(())
}

/// Targets of the relation matching `condition`, within the relation's
/// scope.
fn target_query(relation: &Relation, target: &RecordType, condition: Condition) -> Query {
    let query = Query::table(&target.table.name);
    let query = match &relation.scope.condition {
        Some(scope) => query.where_(scope.clone()),
        None => query,
    };
    query.and_where(condition)
}

async fn delete_targets(
    db: &Db,
    relation: &Relation,
    target: &RecordType,
    query: Query,
) -> Result<()> {
    let per_record = db.has_hooks(&target.name) || relation.via == Via::Array;
    tracing::debug!(record_type = %target.name, per_record, "delete targets");

    if !per_record {
        db.delete_all(&query).await?;
        return Ok(());
    }

    for record in db.find_all(&target.name, query).await? {
        db.delete(&record).await?;
    }
    Ok(())
}

fn null_row(column: &str) -> Row {
    let mut row = Row::new();
    row.insert(column.to_string(), Value::Null);
    row
}
