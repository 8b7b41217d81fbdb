use super::*;

/// Negation of the conjunction of all operands.
#[derive(Debug, Clone, PartialEq)]
pub struct CondNot {
    pub operands: Vec<Condition>,
}

impl From<CondNot> for Condition {
    fn from(value: CondNot) -> Self {
        Self::Not(value)
    }
}
