use super::*;

use tether_core::driver::operation::Insert;

pub(super) fn execute(store: &mut Store, schema: &Schema, op: Insert) -> Result<Response> {
    let primary_key = schema
        .table(&op.table)
        .and_then(|table| table.primary_key.as_deref());

    let mut doc = to_doc(&op.row);

    let id = match primary_key {
        Some(pk) => match op.row.get(pk) {
            Some(id) if !id.is_null() => id.clone(),
            _ => {
                let id = Value::String(object_id());
                doc.insert(pk.to_string(), id.to_json());
                id
            }
        },
        None => Value::Null,
    };

    store.insert(&op.table, doc);
    Ok(Response::identity(id))
}

/// 24 lowercase hex characters
fn object_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(24);
    id
}
