use super::*;
use crate::{Error, Result};

use serde_json::Value as Json;

impl Condition {
    /// Parses the generic condition form.
    ///
    /// An object is a hash condition (`{"status": 1, "kind": ["a", "b"]}`).
    /// An array is an operator tuple whose first element names the operator
    /// (`["between", "age", 18, 65]`, `["and", {...}, ["null", "deleted"]]`).
    /// Unknown operators and wrong operand counts are rejected here, before
    /// the condition reaches any backend.
    pub fn parse(src: &Json) -> Result<Condition> {
        match src {
            Json::Object(entries) => Ok(CondHash {
                entries: entries
                    .iter()
                    .map(|(field, value)| (field.clone(), Value::from_json(value)))
                    .collect(),
            }
            .into()),
            Json::Array(items) => parse_tuple(items),
            other => Err(Error::invalid_condition(format!(
                "expected an object or an operator tuple, got `{other}`"
            ))),
        }
    }
}

impl TryFrom<&Json> for Condition {
    type Error = Error;

    fn try_from(src: &Json) -> Result<Condition> {
        Condition::parse(src)
    }
}

fn parse_tuple(items: &[Json]) -> Result<Condition> {
    let Some((head, operands)) = items.split_first() else {
        return Err(Error::invalid_condition("empty operator tuple"));
    };

    let Json::String(name) = head else {
        return Err(Error::invalid_condition(format!(
            "operator name must be a string, got `{head}`"
        )));
    };

    let Some(op) = Operator::from_name(name) else {
        return Err(Error::invalid_condition(format!(
            "unknown operator `{name}`"
        )));
    };

    let arity = op.arity();
    if !arity.accepts(operands.len()) {
        return Err(Error::invalid_condition(format!(
            "operator `{op}` expects {arity}, got {}",
            operands.len()
        )));
    }

    if op.is_logical() {
        let operands = operands
            .iter()
            .map(Condition::parse)
            .collect::<Result<Vec<_>>>()?;

        return Ok(match op {
            Operator::And => CondAnd { operands }.into(),
            Operator::Or => CondOr { operands }.into(),
            _ => CondNot { operands }.into(),
        });
    }

    if op == Operator::False {
        return Ok(Condition::False);
    }

    let field = match &operands[0] {
        Json::String(field) => field.clone(),
        other => {
            return Err(Error::invalid_condition(format!(
                "operator `{op}` expects a field name, got `{other}`"
            )))
        }
    };

    let value = |i: usize| Value::from_json(&operands[i]);

    Ok(match op {
        Operator::Equal => Condition::eq(field, value(1)),
        Operator::NotEqual => Condition::ne(field, value(1)),
        Operator::In => Condition::in_list(field, value(1)),
        Operator::NotIn => Condition::not_in_list(field, value(1)),
        Operator::Contains => Condition::contains(field, value(1)),
        Operator::Like => Condition::like(field, value(1)),
        Operator::NotLike => Condition::not_like(field, value(1)),
        Operator::Between => Condition::between(field, value(1), value(2)),
        Operator::NotBetween => Condition::not_between(field, value(1), value(2)),
        Operator::Id => Condition::id(field, value(1)),
        Operator::NotId => Condition::not_id(field, value(1)),
        Operator::Null => Condition::test(field, TestOp::Null),
        Operator::NotNull => Condition::test(field, TestOp::NotNull),
        Operator::Exists => Condition::test(field, TestOp::Exists),
        Operator::NotExists => Condition::test(field, TestOp::NotExists),
        Operator::Empty => Condition::test(field, TestOp::Empty),
        Operator::NotEmpty => Condition::test(field, TestOp::NotEmpty),
        Operator::And | Operator::Or | Operator::Not | Operator::False => unreachable!(),
    })
}
