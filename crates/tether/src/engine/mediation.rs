use super::populate;
use crate::{Db, Record, Related, Result};

use tether_core::{
    schema::{RecordType, Relation, Via},
    stmt::{Condition, Query, Value},
};

use indexmap::{IndexMap, IndexSet};

/// Distinct keys in first-seen order.
pub(crate) fn distinct<'a>(keys: impl IntoIterator<Item = &'a Value>) -> Vec<Value> {
    keys.into_iter()
        .cloned()
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Query over the target table for the targets whose `ref_key` matches one
/// of `keys`, within the relation's scope.
///
/// A list-valued `ref_key` on the target matches by element. A list-valued
/// `link_key` on the source orders the targets by its keys.
pub(crate) fn targets_query(
    relation: &Relation,
    source: &RecordType,
    target: &RecordType,
    keys: Vec<Value>,
) -> Query {
    let array_on_target = relation.via == Via::Array && relation.is_back_ref(source);
    let ref_key = &relation.ref_key;

    let query = relation.base_query(target).and_where(if array_on_target {
        Condition::contains(ref_key, Value::List(keys.clone()))
    } else {
        Condition::in_list(ref_key, Value::List(keys.clone()))
    });

    if relation.via == Via::Array && !array_on_target {
        query.order_by_in(ref_key, keys)
    } else {
        query
    }
}

/// For each primary, the sequence of target `ref_key` values it links to.
///
/// Junction relations read the junction rows in one query. Via-relations
/// populate the intermediate relation on the primaries first and read the
/// terminal key off the intermediate records.
pub(crate) async fn resolve_links(
    db: &Db,
    relation: &Relation,
    primaries: &mut [&mut Record],
) -> Result<Vec<Vec<Value>>> {
    match &relation.via {
        Via::None | Via::Array => Ok(primaries
            .iter()
            .map(|primary| distinct(primary.get(&relation.link_key).keys()))
            .collect()),
        Via::JunctionTable(junction) => {
            let sources: Vec<Vec<Value>> = primaries
                .iter()
                .map(|primary| distinct(primary.get(&junction.link_key).keys()))
                .collect();
            let keys = distinct(sources.iter().flatten());

            // source key -> target keys, in junction row order
            let mut via_map: IndexMap<Value, Vec<Value>> = IndexMap::new();

            if !keys.is_empty() {
                let query = Query::table(&junction.table)
                    .where_(Condition::in_list(&junction.ref_key, Value::List(keys)));

                for row in db.query_all(&query).await? {
                    let (Some(source), Some(target)) =
                        (row.get(&junction.ref_key), row.get(&relation.link_key))
                    else {
                        continue;
                    };

                    if !source.is_null() && !target.is_null() {
                        via_map
                            .entry(source.clone())
                            .or_default()
                            .push(target.clone());
                    }
                }
            }

            Ok(sources
                .iter()
                .map(|keys| distinct(keys.iter().filter_map(|key| via_map.get(key)).flatten()))
                .collect())
        }
        Via::Relation(via) => {
            populate(db, primaries, via).await?;

            Ok(primaries
                .iter()
                .map(|primary| {
                    let intermediates = primary.related(via).map(Related::records);
                    distinct(
                        intermediates
                            .iter()
                            .flatten()
                            .flat_map(|record| record.get(&relation.link_key).keys()),
                    )
                })
                .collect())
        }
    }
}
