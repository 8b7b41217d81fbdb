use super::*;

use indexmap::IndexMap;

/// Field to value mapping. Equivalent to an `and` of per-field `equal`
/// operators, where list values mean membership.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CondHash {
    pub entries: IndexMap<String, Value>,
}

impl CondHash {
    /// Expands the mapping into explicit operators.
    pub fn expand(&self) -> Option<Condition> {
        let operands = self
            .entries
            .iter()
            .map(|(field, value)| match value {
                Value::List(_) => Condition::in_list(field.clone(), value.clone()),
                _ => Condition::eq(field.clone(), value.clone()),
            })
            .collect();

        Condition::and_from_vec(operands)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for CondHash {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        CondHash {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<CondHash> for Condition {
    fn from(value: CondHash) -> Self {
        Self::Hash(value)
    }
}
