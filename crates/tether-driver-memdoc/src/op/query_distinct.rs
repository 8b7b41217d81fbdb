use super::*;

use tether_core::driver::operation::QueryDistinct;

/// Distinct non-null values in first-seen order. Paging applies to the
/// distinct values, not to the documents scanned.
pub(super) fn execute(store: &Store, schema: &Schema, op: QueryDistinct) -> Result<Response> {
    let query = Query {
        limit: None,
        offset: None,
        ..op.query.clone()
    };

    let mut values: Vec<Value> = vec![];
    for row in find_rows(store, schema, &query)? {
        let value = get(&row, &op.key);
        if !value.is_null() && !values.contains(value) {
            values.push(value.clone());
        }
    }

    let offset = op.query.offset.unwrap_or(0) as usize;
    let limit = op.query.limit.map(|limit| limit as usize).unwrap_or(usize::MAX);

    Ok(Response::list(
        values.into_iter().skip(offset).take(limit).collect(),
    ))
}
