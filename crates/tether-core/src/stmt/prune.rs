use super::*;

impl Condition {
    /// Removes sub-conditions whose operands are empty.
    ///
    /// A value is empty when it is null, a blank string, or an empty list or
    /// map. Hash entries with empty values are dropped; comparison, membership,
    /// pattern and identity operators with an empty operand are dropped;
    /// `between` is dropped when either bound is empty. Logical operators
    /// left with no operands disappear. Presence tests and `false` are kept.
    ///
    /// Returns `None` when nothing is left. Pruning is idempotent.
    pub fn prune(self) -> Option<Condition> {
        match self {
            Condition::Hash(mut hash) => {
                hash.entries.retain(|_, value| !value.is_empty_value());
                (!hash.is_empty()).then_some(hash.into())
            }
            Condition::And(cond) => {
                prune_operands(cond.operands).map(|operands| CondAnd { operands }.into())
            }
            Condition::Or(cond) => {
                prune_operands(cond.operands).map(|operands| CondOr { operands }.into())
            }
            Condition::Not(cond) => {
                prune_operands(cond.operands).map(|operands| CondNot { operands }.into())
            }
            Condition::Compare(ref cond) if cond.value.is_empty_value() => None,
            Condition::InList(ref cond) if cond.list.is_empty_value() => None,
            Condition::Contains(ref cond) if cond.list.is_empty_value() => None,
            Condition::Like(ref cond) if cond.pattern.is_empty_value() => None,
            Condition::Id(ref cond) if cond.value.is_empty_value() => None,
            Condition::Between(ref cond)
                if cond.min.is_empty_value() || cond.max.is_empty_value() =>
            {
                None
            }
            other => Some(other),
        }
    }
}

fn prune_operands(operands: Vec<Condition>) -> Option<Vec<Condition>> {
    let operands: Vec<_> = operands.into_iter().filter_map(Condition::prune).collect();
    (!operands.is_empty()).then_some(operands)
}
