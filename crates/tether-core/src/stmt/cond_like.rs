use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct CondLike {
    pub field: String,
    pub pattern: Value,
    pub negate: bool,
}

impl CondLike {
    pub fn new(field: impl Into<String>, pattern: impl Into<Value>, negate: bool) -> Self {
        CondLike {
            field: field.into(),
            pattern: pattern.into(),
            negate,
        }
    }

    /// Parses the pattern. Non-string patterns are matched by their text form.
    pub fn pattern(&self) -> LikePattern {
        match &self.pattern {
            Value::String(pattern) => LikePattern::parse(pattern),
            Value::I64(v) => LikePattern::parse(&v.to_string()),
            Value::F64(v) => LikePattern::parse(&v.to_string()),
            Value::Bool(v) => LikePattern::parse(&v.to_string()),
            _ => LikePattern::parse(""),
        }
    }
}

impl From<CondLike> for Condition {
    fn from(value: CondLike) -> Self {
        Self::Like(value)
    }
}
