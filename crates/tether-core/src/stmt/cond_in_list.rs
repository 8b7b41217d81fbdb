use super::*;

/// Membership test. An empty `in` matches nothing; an empty `notIn` matches
/// everything.
#[derive(Debug, Clone, PartialEq)]
pub struct CondInList {
    pub field: String,
    pub list: Value,
    pub negate: bool,
}

impl CondInList {
    pub fn new(field: impl Into<String>, list: impl Into<Value>, negate: bool) -> Self {
        CondInList {
            field: field.into(),
            list: list.into(),
            negate,
        }
    }

    /// The list items; a scalar operand is treated as a one-element list.
    pub fn items(&self) -> &[Value] {
        match &self.list {
            Value::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }

    /// Splits the items into non-null values and whether null is listed.
    pub fn split_null(&self) -> (Vec<&Value>, bool) {
        let items = self.items();
        let has_null = items.iter().any(Value::is_null);
        let values = items.iter().filter(|item| !item.is_null()).collect();
        (values, has_null)
    }
}

impl From<CondInList> for Condition {
    fn from(value: CondInList) -> Self {
        Self::InList(value)
    }
}
