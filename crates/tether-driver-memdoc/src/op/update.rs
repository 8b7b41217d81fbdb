use super::*;

use tether_core::{driver::operation::Update, stmt::Condition};

pub(super) fn execute(store: &mut Store, op: Update) -> Result<Response> {
    if op.values.is_empty() {
        return Ok(Response::count(0));
    }

    let filter = compile(&Condition::eq(op.key, op.id));
    let count = store.update(&op.table, &filter, |doc| assign(doc, &op.values))?;
    Ok(Response::count(count))
}
