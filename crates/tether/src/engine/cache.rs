use crate::{Record, Related};

use tether_core::schema::Relation;

fn same(lhs: &Record, rhs: &Record) -> bool {
    lhs.type_name() == rhs.type_name() && lhs.id().is_some() && lhs.id() == rhs.id()
}

/// Patches a populated relation cache after a link. Unpopulated caches are
/// left alone; the next read fetches them.
pub(super) fn add(record: &mut Record, name: &str, relation: &Relation, target: &Record) {
    let Some(related) = record.related_mut(name) else {
        return;
    };

    let target = target.shallow();
    match related {
        Related::One(slot) => *slot = Some(Box::new(target)),
        Related::Many(records) => match records.iter_mut().find(|r| same(r, &target)) {
            Some(existing) => *existing = target,
            None => records.push(target),
        },
        Related::Indexed(records) => {
            if let Some(key) = &relation.scope.index_key {
                records.insert(target.get(key).clone(), target);
            }
        }
    }
}

/// Drops `target` from a populated relation cache after an unlink.
pub(super) fn remove(record: &mut Record, name: &str, target: &Record) {
    let Some(related) = record.related_mut(name) else {
        return;
    };

    match related {
        Related::One(slot) => {
            if slot.as_deref().is_some_and(|r| same(r, target)) {
                *slot = None;
            }
        }
        Related::Many(records) => records.retain(|r| !same(r, target)),
        Related::Indexed(records) => records.retain(|_, r| !same(r, target)),
    }
}

/// Empties a relation cache after an unlink-all.
pub(super) fn clear(record: &mut Record, name: &str, relation: &Relation) {
    let indexed = relation.scope.index_key.is_some();
    record.set_related(name, Related::empty(relation.is_one(), indexed));
}
