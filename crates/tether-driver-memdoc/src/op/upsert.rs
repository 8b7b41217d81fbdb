use super::*;

use tether_core::{
    driver::operation::{Insert, Upsert},
    stmt::Condition,
};

pub(super) fn execute(store: &mut Store, schema: &Schema, op: Upsert) -> Result<Response> {
    let keys = Condition::hash(
        op.keys
            .iter()
            .map(|key| (key.clone(), op.row.get(key).cloned().unwrap_or_default())),
    );

    let count = store.update(&op.table, &compile(&keys), |doc| assign(doc, &op.row))?;
    if count > 0 {
        return Ok(Response::count(count));
    }

    super::insert::execute(
        store,
        schema,
        Insert {
            table: op.table,
            row: op.row,
        },
    )?;
    Ok(Response::count(1))
}
