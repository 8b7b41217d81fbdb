mod cache;

mod link;
pub(crate) use link::link;

mod mediation;
pub(crate) use mediation::{distinct, resolve_links, targets_query};

mod populate;
pub(crate) use populate::{populate, populate_paths};

mod unlink;
pub(crate) use unlink::{unlink, unlink_all};

use crate::{Error, Record, Result};

use tether_core::{
    schema::{Relation, Via},
    stmt::Value,
};

/// Reads a key attribute a write needs to address storage by. A record
/// without it was never persisted.
fn required_key(record: &Record, attr: &str) -> Result<Value> {
    if record.is_new() {
        return Err(Error::not_persisted(record.type_name()));
    }

    match record.get(attr) {
        Value::Null => Err(Error::not_persisted(record.type_name())),
        value => Ok(value.clone()),
    }
}

/// `keys` with `key` appended, unless already present. A scalar counts as a
/// one-element list.
fn push_key(keys: &Value, key: Value) -> Value {
    let mut keys: Vec<Value> = keys.keys().cloned().collect();
    if !keys.contains(&key) {
        keys.push(key);
    }
    Value::List(keys)
}

/// `keys` without any occurrence of `key`.
fn drop_key(keys: &Value, key: &Value) -> Value {
    Value::List(keys.keys().filter(|k| *k != key).cloned().collect())
}

/// The relation a via-relation writes through. Only a back-reference
/// intermediate, one that stores the source's key itself, can be written.
fn via_hop<'a>(record: &'a Record, name: &str, via: &str) -> Result<&'a Relation> {
    let hop = record.record_type().get_relation(via)?;

    if hop.via != Via::None || !hop.is_back_ref(record.record_type()) {
        return Err(Error::invalid_relation(format!(
            "relation `{name}` on record type `{}` goes through `{via}`, which does not store the source key on the intermediate record",
            record.type_name()
        )));
    }

    Ok(&**hop)
}
