use crate::store::Document;

use regex::Regex;
use serde_json::{Map, Value as Json};
use std::cmp::Ordering;
use tether_core::{stmt::Value, Error, Result};

/// Returns `true` if `doc` satisfies the filter document.
///
/// Follows document database semantics: a missing field equals `null` for
/// `$eq` and `$in`, `$ne` and `$nin` match missing fields, and range
/// operators never match null or missing fields. Equality is by whole value;
/// numbers compare by value across integer and float forms. Only
/// `$elemMatch` looks inside arrays.
pub(crate) fn matches(doc: &Document, filter: &Json) -> Result<bool> {
    let Json::Object(filter) = filter else {
        return Err(invalid(format!("filter must be a document, got {filter}")));
    };

    for (key, expr) in filter {
        let matched = match key.as_str() {
            "$and" => all(doc, expr)?,
            "$or" => any(doc, expr)?,
            "$nor" => !any(doc, expr)?,
            _ => field(doc.get(key), expr)?,
        };

        if !matched {
            return Ok(false);
        }
    }

    Ok(true)
}

fn all(doc: &Document, filters: &Json) -> Result<bool> {
    for filter in clauses(filters)? {
        if !matches(doc, filter)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn any(doc: &Document, filters: &Json) -> Result<bool> {
    for filter in clauses(filters)? {
        if matches(doc, filter)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn clauses(filters: &Json) -> Result<&[Json]> {
    match filters {
        Json::Array(filters) => Ok(filters),
        other => Err(invalid(format!("logical operator expects an array, got {other}"))),
    }
}

fn field(value: Option<&Json>, expr: &Json) -> Result<bool> {
    match expr {
        Json::Object(ops) if is_operator_doc(ops) => operators(value, ops),
        literal => Ok(eq(value, literal)),
    }
}

fn is_operator_doc(ops: &Map<String, Json>) -> bool {
    !ops.is_empty() && ops.keys().all(|key| key.starts_with('$'))
}

fn operators(value: Option<&Json>, ops: &Map<String, Json>) -> Result<bool> {
    for (op, operand) in ops {
        let matched = match op.as_str() {
            "$eq" => eq(value, operand),
            "$ne" => !eq(value, operand),
            "$in" => list(operand)?.iter().any(|item| eq(value, item)),
            "$nin" => !list(operand)?.iter().any(|item| eq(value, item)),
            "$gt" => range(value, operand, Ordering::is_gt),
            "$gte" => range(value, operand, Ordering::is_ge),
            "$lt" => range(value, operand, Ordering::is_lt),
            "$lte" => range(value, operand, Ordering::is_le),
            "$exists" => value.is_some() == operand.as_bool().unwrap_or(true),
            "$type" => type_matches(value, operand)?,
            "$regex" => regex(value, operand)?,
            "$elemMatch" => elem_match(value, operand)?,
            "$not" => match operand {
                Json::Object(inner) => !operators(value, inner)?,
                other => return Err(invalid(format!("`$not` expects a document, got {other}"))),
            },
            other => return Err(invalid(format!("unsupported filter operator `{other}`"))),
        };

        if !matched {
            return Ok(false);
        }
    }

    Ok(true)
}

fn eq(value: Option<&Json>, operand: &Json) -> bool {
    match value {
        None => operand.is_null(),
        Some(value) => Value::from_json(value).loose_eq(&Value::from_json(operand)),
    }
}

/// Matches when some element of an array field satisfies the operator
/// document. Non-array fields never match.
fn elem_match(value: Option<&Json>, operand: &Json) -> Result<bool> {
    let Json::Object(ops) = operand else {
        return Err(invalid(format!("`$elemMatch` expects a document, got {operand}")));
    };

    let Some(Json::Array(elements)) = value else {
        return Ok(false);
    };

    for element in elements {
        if operators(Some(element), ops)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn range(value: Option<&Json>, operand: &Json, accept: fn(Ordering) -> bool) -> bool {
    let Some(value) = value.filter(|value| !value.is_null()) else {
        return false;
    };

    Value::from_json(value)
        .compare(&Value::from_json(operand))
        .is_some_and(accept)
}

fn type_matches(value: Option<&Json>, operand: &Json) -> Result<bool> {
    let Some(value) = value else {
        return Ok(false);
    };

    Ok(match operand.as_str() {
        Some("null") => value.is_null(),
        Some("string") => value.is_string(),
        Some("bool") => value.is_boolean(),
        Some("number") => value.is_number(),
        Some("array") => value.is_array(),
        Some("object") => value.is_object(),
        _ => return Err(invalid(format!("unsupported `$type` operand {operand}"))),
    })
}

fn regex(value: Option<&Json>, operand: &Json) -> Result<bool> {
    let Some(pattern) = operand.as_str() else {
        return Err(invalid(format!("`$regex` expects a string, got {operand}")));
    };

    let Some(Json::String(value)) = value else {
        return Ok(false);
    };

    let regex = Regex::new(pattern).map_err(Error::driver_operation_failed)?;
    Ok(regex.is_match(value))
}

fn list(operand: &Json) -> Result<&[Json]> {
    match operand {
        Json::Array(items) => Ok(items),
        other => Err(invalid(format!("membership operator expects an array, got {other}"))),
    }
}

fn invalid(message: String) -> Error {
    Error::invalid_statement(message)
}
