use super::*;

use tether_core::driver::operation::QueryCount;

pub(super) fn execute(store: &Store, op: QueryCount) -> Result<Response> {
    let docs = store.find(op.query.source()?, &filter(&op.query))?;
    Ok(Response::count(docs.len() as u64))
}
