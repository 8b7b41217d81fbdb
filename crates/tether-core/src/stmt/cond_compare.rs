use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CondCompare {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl CondCompare {
    pub fn new(field: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        CondCompare {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Comparing against null is a presence test; comparing against a list is
    /// a membership test. Backends lower those cases before compiling.
    pub fn lower(&self) -> Option<Condition> {
        let negate = self.op == CompareOp::Ne;

        match &self.value {
            Value::Null => Some(Condition::test(
                self.field.clone(),
                if negate { TestOp::NotNull } else { TestOp::Null },
            )),
            Value::List(_) => Some(
                CondInList::new(self.field.clone(), self.value.clone(), negate).into(),
            ),
            _ => None,
        }
    }
}

impl From<CondCompare> for Condition {
    fn from(value: CondCompare) -> Self {
        Self::Compare(value)
    }
}
