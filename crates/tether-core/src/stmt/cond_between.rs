use super::*;

/// Inclusive range test on both bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct CondBetween {
    pub field: String,
    pub min: Value,
    pub max: Value,
    pub negate: bool,
}

impl CondBetween {
    pub fn new(
        field: impl Into<String>,
        min: impl Into<Value>,
        max: impl Into<Value>,
        negate: bool,
    ) -> Self {
        CondBetween {
            field: field.into(),
            min: min.into(),
            max: max.into(),
            negate,
        }
    }
}

impl From<CondBetween> for Condition {
    fn from(value: CondBetween) -> Self {
        Self::Between(value)
    }
}
