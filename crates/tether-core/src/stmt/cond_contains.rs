use super::*;

/// Element membership on a list-valued field. Matches when the field holds
/// at least one of the given values; an empty value list matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct CondContains {
    pub field: String,
    pub list: Value,
}

impl CondContains {
    pub fn new(field: impl Into<String>, list: impl Into<Value>) -> Self {
        CondContains {
            field: field.into(),
            list: list.into(),
        }
    }

    /// The values searched for, null excluded. A scalar operand is a
    /// one-element list.
    pub fn items(&self) -> Vec<&Value> {
        let items = match &self.list {
            Value::List(items) => items.as_slice(),
            other => std::slice::from_ref(other),
        };
        items.iter().filter(|item| !item.is_null()).collect()
    }
}

impl From<CondContains> for Condition {
    fn from(value: CondContains) -> Self {
        Self::Contains(value)
    }
}
