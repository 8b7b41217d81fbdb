use super::*;

use tether_core::driver::operation::Delete;

pub(super) fn execute(store: &mut Store, op: Delete) -> Result<Response> {
    let count = store.delete(op.query.source()?, &filter(&op.query))?;
    Ok(Response::count(count))
}
