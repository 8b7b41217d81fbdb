use super::{distinct, resolve_links, targets_query};
use crate::{Db, Error, Record, Related, Result};

use tether_core::stmt::Value;

use async_recursion::async_recursion;
use indexmap::{IndexMap, IndexSet};
use std::collections::HashMap;

/// Populates relation `name` on every primary, issuing one query for the
/// whole set (plus one for the mediation when the relation is mediated).
///
/// Returns the fetched target records. Each primary's relation cache is
/// overwritten with its share of them; primaries with no match get `None`
/// or an empty list.
#[async_recursion]
pub(crate) async fn populate(
    db: &Db,
    primaries: &mut [&mut Record],
    name: &str,
) -> Result<Vec<Record>> {
    let source = match primaries.first() {
        Some(first) => first.record_type().clone(),
        None => return Ok(vec![]),
    };

    if let Some(other) = primaries.iter().find(|p| p.type_name() != source.name) {
        return Err(Error::invalid_statement(format!(
            "cannot populate `{name}` across record types `{}` and `{}`",
            source.name,
            other.type_name()
        )));
    }

    let relation = source.get_relation(name)?.clone();
    let target = db.schema().record_type(&relation.target)?.clone();

    let links = resolve_links(db, &relation, primaries).await?;
    let keys = distinct(links.iter().flatten());

    let mut results = vec![];

    if !keys.is_empty() {
        let query = targets_query(&relation, &source, &target, keys.clone());

        results = db
            .query_all(&query)
            .await?
            .into_iter()
            .map(|row| Record::from_row(&target, row))
            .collect();
    }

    tracing::debug!(
        relation = name,
        record_type = %source.name,
        primaries = primaries.len(),
        keys = keys.len(),
        results = results.len(),
        "populate"
    );

    if !relation.eager.is_empty() {
        let mut refs: Vec<&mut Record> = results.iter_mut().collect();
        populate_paths(db, &mut refs, &relation.eager).await?;
    }

    // ref key value -> result positions; a list-valued ref key lands in
    // each of its elements' buckets
    let mut buckets: HashMap<Value, Vec<usize>> = HashMap::new();
    for (index, result) in results.iter().enumerate() {
        for key in distinct(result.get(&relation.ref_key).keys()) {
            buckets.entry(key).or_default().push(index);
        }
    }

    // only one-cardinality inverses are filled; a many inverse would hold
    // just this primary
    let inverse = match &relation.inverse_of {
        Some(inverse) => target
            .get_relation(inverse)?
            .is_one()
            .then_some(inverse.as_str()),
        None => None,
    };

    for (primary, links) in primaries.iter_mut().zip(&links) {
        let positions: IndexSet<usize> = links
            .iter()
            .filter_map(|key| buckets.get(key))
            .flatten()
            .copied()
            .collect();

        let mut records: Vec<Record> = positions.into_iter().map(|i| results[i].clone()).collect();

        if let Some(inverse) = inverse {
            for record in &mut records {
                record.set_related(inverse, Related::One(Some(Box::new(primary.shallow()))));
            }
        }

        let related = if relation.is_one() {
            Related::One(records.into_iter().next().map(Box::new))
        } else if let Some(key) = &relation.scope.index_key {
            Related::Indexed(
                records
                    .into_iter()
                    .map(|record| (record.get(key).clone(), record))
                    .collect(),
            )
        } else {
            Related::Many(records)
        };

        primary.set_related(name, related);
    }

    Ok(results)
}

/// Populates dotted relation paths. Paths sharing a head populate it once;
/// the remainder of each path is populated on the cached records.
#[async_recursion]
pub(crate) async fn populate_paths(
    db: &Db,
    primaries: &mut [&mut Record],
    paths: &[String],
) -> Result<()> {
    let mut heads: IndexMap<&str, Vec<String>> = IndexMap::new();
    for path in paths {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path.as_str(), None),
        };

        let rests = heads.entry(head).or_default();
        if let Some(rest) = rest {
            rests.push(rest.to_string());
        }
    }

    for (head, rests) in &heads {
        populate(db, primaries, head).await?;

        if rests.is_empty() {
            continue;
        }

        let mut children: Vec<&mut Record> = primaries
            .iter_mut()
            .flat_map(|primary| {
                primary
                    .related_mut(head)
                    .map(Related::records_mut)
                    .unwrap_or_default()
            })
            .collect();

        populate_paths(db, &mut children, rests).await?;
    }

    Ok(())
}
