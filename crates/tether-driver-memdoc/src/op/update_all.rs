use super::*;

use tether_core::driver::operation::UpdateAll;

pub(super) fn execute(store: &mut Store, op: UpdateAll) -> Result<Response> {
    if op.values.is_empty() {
        return Ok(Response::count(0));
    }

    let count = store.update(op.query.source()?, &filter(&op.query), |doc| {
        assign(doc, &op.values)
    })?;
    Ok(Response::count(count))
}
