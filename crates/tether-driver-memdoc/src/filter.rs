use serde_json::{json, Value as Json};
use tether_core::{
    driver::IdentityKind,
    stmt::{CompareOp, CondTest, Condition, LikePattern, TestOp, Value},
};

/// Compiles a condition into a filter document.
///
/// The document uses the operator vocabulary of document databases:
/// `$and`, `$or`, `$nor`, `$eq`, `$ne`, `$in`, `$nin`, `$elemMatch`,
/// `$regex`, `$not`, `$gte`, `$lte`, `$exists` and `$type`.
pub fn compile(condition: &Condition) -> Json {
    match condition {
        Condition::And(cond) => json!({ "$and": operands(&cond.operands) }),
        Condition::Or(cond) => json!({ "$or": operands(&cond.operands) }),
        Condition::Not(cond) => {
            json!({ "$nor": [{ "$and": operands(&cond.operands) }] })
        }
        Condition::Compare(cond) => match cond.lower() {
            Some(lowered) => compile(&lowered),
            None => {
                let op = match cond.op {
                    CompareOp::Eq => "$eq",
                    CompareOp::Ne => "$ne",
                };
                field(&cond.field, json!({ op: cond.value.to_json() }))
            }
        },
        Condition::InList(cond) => {
            let op = if cond.negate { "$nin" } else { "$in" };
            let items: Vec<Json> = cond.items().iter().map(Value::to_json).collect();
            field(&cond.field, json!({ op: items }))
        }
        Condition::Contains(cond) => {
            let items: Vec<Json> = cond.items().into_iter().map(Value::to_json).collect();
            field(&cond.field, json!({ "$elemMatch": { "$in": items } }))
        }
        Condition::Like(cond) => {
            let regex = json!({ "$regex": regex(&cond.pattern()) });
            if cond.negate {
                field(&cond.field, json!({ "$not": regex }))
            } else {
                field(&cond.field, regex)
            }
        }
        Condition::Between(cond) => {
            let range = json!({ "$gte": cond.min.to_json(), "$lte": cond.max.to_json() });
            if cond.negate {
                field(&cond.field, json!({ "$not": range }))
            } else {
                field(&cond.field, range)
            }
        }
        Condition::Id(cond) => {
            // Document identities are object ids
            match cond.lower(|value| IdentityKind::ObjectId.normalize(value)) {
                Some(lowered) => compile(&lowered),
                None => json!({}),
            }
        }
        Condition::Test(cond) => test(cond),
        Condition::Hash(cond) => match cond.expand() {
            Some(expanded) => compile(&expanded),
            None => json!({}),
        },
        // `{}` matches every document, so its `$nor` matches none
        Condition::False => json!({ "$nor": [{}] }),
    }
}

fn operands(operands: &[Condition]) -> Vec<Json> {
    operands.iter().map(compile).collect()
}

fn field(name: &str, ops: Json) -> Json {
    let mut doc = serde_json::Map::new();
    doc.insert(name.to_string(), ops);
    Json::Object(doc)
}

fn test(cond: &CondTest) -> Json {
    let empty = json!([null, "", [], {}]);

    let ops = match cond.op {
        TestOp::Null => json!({ "$type": "null" }),
        TestOp::NotNull => json!({ "$ne": null }),
        TestOp::Exists => json!({ "$exists": true }),
        TestOp::NotExists => json!({ "$exists": false }),
        TestOp::Empty => json!({ "$in": empty }),
        TestOp::NotEmpty => json!({ "$nin": empty }),
    };

    field(&cond.field, ops)
}

fn regex(pattern: &LikePattern) -> String {
    let mut ret = String::new();
    if !pattern.open_start {
        ret.push('^');
    }
    ret.push_str(&regex::escape(&pattern.text));
    if !pattern.open_end {
        ret.push('$');
    }
    ret
}
