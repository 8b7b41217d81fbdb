use super::*;

use tether_core::driver::operation::QueryAll;

pub(super) fn execute(store: &Store, schema: &Schema, op: QueryAll) -> Result<Response> {
    let rows = find_rows(store, schema, &op.query)?;

    let rows = match &op.query.select {
        Some(fields) => rows
            .into_iter()
            .map(|row| {
                fields
                    .iter()
                    .map(|field| (field.clone(), get(&row, field).clone()))
                    .collect()
            })
            .collect(),
        None => rows,
    };

    Ok(Response::values(rows))
}
