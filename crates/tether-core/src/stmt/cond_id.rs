use super::*;

/// Identity membership.
///
/// Values go through the backend's identity normalizer before compiling. A
/// value that does not normalize cannot equal any stored identity.
#[derive(Debug, Clone, PartialEq)]
pub struct CondId {
    pub field: String,
    pub value: Value,
    pub negate: bool,
}

impl CondId {
    pub fn new(field: impl Into<String>, value: impl Into<Value>, negate: bool) -> Self {
        CondId {
            field: field.into(),
            value: value.into(),
            negate,
        }
    }

    /// Rewrites the identity test into plain operators, given a normalizer.
    ///
    /// Null operands become presence tests. Operands that fail normalization
    /// are dropped, so an `id` over nothing valid matches nothing and a
    /// `notId` over nothing valid matches everything (`None`).
    pub fn lower(&self, normalize: impl Fn(&Value) -> Option<Value>) -> Option<Condition> {
        let items: &[Value] = match &self.value {
            Value::List(items) => items,
            other => std::slice::from_ref(other),
        };

        let has_null = items.iter().any(Value::is_null);
        let normalized: Vec<Value> = items
            .iter()
            .filter(|item| !item.is_null())
            .filter_map(&normalize)
            .collect();

        let field = &self.field;

        let membership = if normalized.is_empty() {
            None
        } else {
            Some(CondInList::new(field.clone(), Value::List(normalized), self.negate).into())
        };

        if !self.negate {
            let null = has_null.then(|| Condition::is_null(field.clone()));
            match (membership, null) {
                (Some(m), Some(n)) => Some(Condition::or(n, m)),
                (Some(m), None) => Some(m),
                (None, Some(n)) => Some(n),
                (None, None) => Some(Condition::False),
            }
        } else {
            let not_null = has_null.then(|| Condition::is_not_null(field.clone()));
            match (membership, not_null) {
                (Some(m), Some(n)) => Some(Condition::and(n, m)),
                (Some(m), None) => Some(m),
                (None, Some(n)) => Some(n),
                (None, None) => None,
            }
        }
    }
}

impl From<CondId> for Condition {
    fn from(value: CondId) -> Self {
        Self::Id(value)
    }
}
