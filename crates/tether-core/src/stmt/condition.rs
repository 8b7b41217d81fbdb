use super::*;

/// A backend-agnostic filter.
///
/// Conditions are built either with the typed constructors below or parsed
/// from the generic tuple/hash form with [`Condition::parse`]. Each backend
/// compiles them into its native predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// All operands hold
    And(CondAnd),

    /// Inclusive range test
    Between(CondBetween),

    /// Equality or inequality against a single value
    Compare(CondCompare),

    /// Element membership on a list-valued field
    Contains(CondContains),

    /// Shorthand mapping of field to value
    Hash(CondHash),

    /// Identity membership, values normalized by the backend first
    Id(CondId),

    /// Membership in a list of values
    InList(CondInList),

    /// Partial string match
    Like(CondLike),

    /// None of the operands hold together
    Not(CondNot),

    /// At least one operand holds
    Or(CondOr),

    /// Presence test on a single field
    Test(CondTest),

    /// Never matches
    False,
}

impl Condition {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Condition {
        CondCompare::new(field, CompareOp::Eq, value).into()
    }

    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Condition {
        CondCompare::new(field, CompareOp::Ne, value).into()
    }

    pub fn in_list(field: impl Into<String>, list: impl Into<Value>) -> Condition {
        CondInList::new(field, list, false).into()
    }

    pub fn not_in_list(field: impl Into<String>, list: impl Into<Value>) -> Condition {
        CondInList::new(field, list, true).into()
    }

    pub fn contains(field: impl Into<String>, list: impl Into<Value>) -> Condition {
        CondContains::new(field, list).into()
    }

    pub fn like(field: impl Into<String>, pattern: impl Into<Value>) -> Condition {
        CondLike::new(field, pattern, false).into()
    }

    pub fn not_like(field: impl Into<String>, pattern: impl Into<Value>) -> Condition {
        CondLike::new(field, pattern, true).into()
    }

    pub fn between(
        field: impl Into<String>,
        min: impl Into<Value>,
        max: impl Into<Value>,
    ) -> Condition {
        CondBetween::new(field, min, max, false).into()
    }

    pub fn not_between(
        field: impl Into<String>,
        min: impl Into<Value>,
        max: impl Into<Value>,
    ) -> Condition {
        CondBetween::new(field, min, max, true).into()
    }

    pub fn id(field: impl Into<String>, value: impl Into<Value>) -> Condition {
        CondId::new(field, value, false).into()
    }

    pub fn not_id(field: impl Into<String>, value: impl Into<Value>) -> Condition {
        CondId::new(field, value, true).into()
    }

    pub fn test(field: impl Into<String>, op: TestOp) -> Condition {
        CondTest::new(field, op).into()
    }

    pub fn is_null(field: impl Into<String>) -> Condition {
        Condition::test(field, TestOp::Null)
    }

    pub fn is_not_null(field: impl Into<String>) -> Condition {
        Condition::test(field, TestOp::NotNull)
    }

    pub fn hash<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Condition
    where
        K: Into<String>,
        V: Into<Value>,
    {
        CondHash::from_iter(entries).into()
    }

    pub fn or(lhs: impl Into<Condition>, rhs: impl Into<Condition>) -> Condition {
        match (lhs.into(), rhs.into()) {
            (Condition::Or(mut lhs), Condition::Or(rhs)) => {
                lhs.operands.extend(rhs.operands);
                lhs.into()
            }
            (Condition::Or(mut lhs), rhs) => {
                lhs.operands.push(rhs);
                lhs.into()
            }
            (lhs, rhs) => CondOr {
                operands: vec![lhs, rhs],
            }
            .into(),
        }
    }

    pub fn not(operand: impl Into<Condition>) -> Condition {
        CondNot {
            operands: vec![operand.into()],
        }
        .into()
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Condition::False)
    }

    /// Returns the operator this condition is written with.
    pub fn operator(&self) -> Operator {
        match self {
            Condition::And(_) | Condition::Hash(_) => Operator::And,
            Condition::Or(_) => Operator::Or,
            Condition::Not(_) => Operator::Not,
            Condition::Compare(c) => match c.op {
                CompareOp::Eq => Operator::Equal,
                CompareOp::Ne => Operator::NotEqual,
            },
            Condition::InList(c) if c.negate => Operator::NotIn,
            Condition::InList(_) => Operator::In,
            Condition::Contains(_) => Operator::Contains,
            Condition::Like(c) if c.negate => Operator::NotLike,
            Condition::Like(_) => Operator::Like,
            Condition::Between(c) if c.negate => Operator::NotBetween,
            Condition::Between(_) => Operator::Between,
            Condition::Id(c) if c.negate => Operator::NotId,
            Condition::Id(_) => Operator::Id,
            Condition::Test(c) => c.op.operator(),
            Condition::False => Operator::False,
        }
    }
}
