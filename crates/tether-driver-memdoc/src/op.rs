mod delete;
mod insert;
mod query_all;
mod query_count;
mod query_distinct;
mod update;
mod update_all;
mod upsert;

use crate::{
    compile,
    store::{Document, Store},
};

use serde_json::{json, Value as Json};
use std::{cmp::Ordering, sync::Arc};
use tether_core::{
    driver::{Operation, Response},
    schema::Table,
    stmt::{Query, Row, Value},
    Result, Schema,
};

pub(crate) fn execute_operation(
    store: &mut Store,
    schema: &Arc<Schema>,
    op: Operation,
) -> Result<Response> {
    tracing::trace!(op = op.name(), table = ?op.table(), "memdoc operation");

    match op {
        Operation::Delete(op) => delete::execute(store, op),
        Operation::Insert(op) => insert::execute(store, schema, op),
        Operation::QueryAll(op) => query_all::execute(store, schema, op),
        Operation::QueryCount(op) => query_count::execute(store, op),
        Operation::QueryDistinct(op) => query_distinct::execute(store, schema, op),
        Operation::Update(op) => update::execute(store, op),
        Operation::UpdateAll(op) => update_all::execute(store, op),
        Operation::Upsert(op) => upsert::execute(store, schema, op),
    }
}

/// Filter document for a query. No condition matches every document.
fn filter(query: &Query) -> Json {
    match &query.condition {
        Some(condition) => compile(condition),
        None => json!({}),
    }
}

/// Reads the documents matching `query`, ordered and paged.
fn find_rows(store: &Store, schema: &Schema, query: &Query) -> Result<Vec<Row>> {
    let collection = query.source()?;
    let table = schema.table(collection);

    let mut rows: Vec<Row> = store
        .find(collection, &filter(query))?
        .into_iter()
        .map(|doc| to_row(doc, table))
        .collect();

    if !query.order.is_empty() {
        rows.sort_by(|a, b| {
            for (field, direction) in &query.order {
                let ord = get(a, field).sort_cmp(get(b, field));
                let ord = if direction.is_desc() { ord.reverse() } else { ord };
                if ord.is_ne() {
                    return ord;
                }
            }
            Ordering::Equal
        });
    }

    let offset = query.offset.unwrap_or(0) as usize;
    let limit = query.limit.map(|limit| limit as usize).unwrap_or(usize::MAX);

    Ok(rows.into_iter().skip(offset).take(limit).collect())
}

fn get<'a>(row: &'a Row, field: &str) -> &'a Value {
    const NULL: &Value = &Value::Null;
    row.get(field).unwrap_or(NULL)
}

/// Declared columns come first, missing ones as null, followed by any other
/// fields the document carries.
fn to_row(doc: &Document, table: Option<&Table>) -> Row {
    let mut row = Row::with_capacity(doc.len());

    for column in table.into_iter().flat_map(|table| &table.columns) {
        let value = doc.get(&column.name).map(Value::from_json).unwrap_or_default();
        row.insert(column.name.clone(), value);
    }

    for (name, value) in doc {
        if !row.contains_key(name) {
            row.insert(name.clone(), Value::from_json(value));
        }
    }

    row
}

fn to_doc(row: &Row) -> Document {
    row.iter()
        .map(|(name, value)| (name.clone(), value.to_json()))
        .collect()
}

fn assign(doc: &mut Document, values: &Row) {
    for (name, value) in values {
        doc.insert(name.clone(), value.to_json());
    }
}
