use core::fmt;

/// The operators a condition can be written with, and their arity rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    Not,
    Equal,
    NotEqual,
    In,
    NotIn,
    Contains,
    Like,
    NotLike,
    Between,
    NotBetween,
    Id,
    NotId,
    Null,
    NotNull,
    Exists,
    NotExists,
    Empty,
    NotEmpty,
    False,
}

/// Number of operands an operator accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Operator {
    const ALL: [Operator; 21] = [
        Operator::And,
        Operator::Or,
        Operator::Not,
        Operator::Equal,
        Operator::NotEqual,
        Operator::In,
        Operator::NotIn,
        Operator::Contains,
        Operator::Like,
        Operator::NotLike,
        Operator::Between,
        Operator::NotBetween,
        Operator::Id,
        Operator::NotId,
        Operator::Null,
        Operator::NotNull,
        Operator::Exists,
        Operator::NotExists,
        Operator::Empty,
        Operator::NotEmpty,
        Operator::False,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Not => "not",
            Operator::Equal => "equal",
            Operator::NotEqual => "notEqual",
            Operator::In => "in",
            Operator::NotIn => "notIn",
            Operator::Contains => "contains",
            Operator::Like => "like",
            Operator::NotLike => "notLike",
            Operator::Between => "between",
            Operator::NotBetween => "notBetween",
            Operator::Id => "id",
            Operator::NotId => "notId",
            Operator::Null => "null",
            Operator::NotNull => "notNull",
            Operator::Exists => "exists",
            Operator::NotExists => "notExists",
            Operator::Empty => "empty",
            Operator::NotEmpty => "notEmpty",
            Operator::False => "false",
        }
    }

    /// Looks an operator up by name. Names are case-insensitive.
    pub fn from_name(name: &str) -> Option<Operator> {
        Operator::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }

    pub fn arity(self) -> Arity {
        use Operator::*;

        match self {
            And | Or | Not => Arity::AtLeast(1),
            Equal | NotEqual | In | NotIn | Contains | Like | NotLike | Id | NotId => {
                Arity::Exactly(2)
            }
            Between | NotBetween => Arity::Exactly(3),
            Null | NotNull | Exists | NotExists | Empty | NotEmpty => Arity::Exactly(1),
            False => Arity::Exactly(0),
        }
    }

    pub fn is_logical(self) -> bool {
        matches!(self, Operator::And | Operator::Or | Operator::Not)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Arity {
    pub fn accepts(self, n: usize) -> bool {
        match self {
            Arity::Exactly(expected) => n == expected,
            Arity::AtLeast(min) => n >= min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exactly(1) => f.write_str("1 operand"),
            Arity::Exactly(n) => write!(f, "{n} operands"),
            Arity::AtLeast(n) => write!(f, "at least {n} operand(s)"),
        }
    }
}
