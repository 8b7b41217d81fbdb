//! Comparisons between values, and between values and Rust primitives.

use super::Value;

use std::cmp::Ordering;

macro_rules! impl_value_eq {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    matches!(self, Value::$variant(val) if val == other)
                }
            }

            impl PartialEq<Value> for $ty {
                fn eq(&self, other: &Value) -> bool {
                    other.eq(self)
                }
            }
        )*
    };
}

impl_value_eq! {
    bool => Bool,
    i64 => I64,
    f64 => F64,
    String => String,
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Value::I64(val) if *val == i64::from(*other))
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Value::String(val) if val == other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::String(val) if val == other)
    }
}

impl Value {
    /// Compares two values of the same kind. Integers and floats compare
    /// numerically with each other; any other mix of kinds is incomparable.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        use Value::*;

        match (self, other) {
            (I64(a), I64(b)) => Some(a.cmp(b)),
            (F64(a), F64(b)) => a.partial_cmp(b),
            (I64(a), F64(b)) => (*a as f64).partial_cmp(b),
            (F64(a), I64(b)) => a.partial_cmp(&(*b as f64)),
            (String(a), String(b)) => Some(a.cmp(b)),
            (Bool(a), Bool(b)) => Some(a.cmp(b)),
            (Null, Null) => Some(Ordering::Equal),
            _ => None,
        }
    }

    /// Equality used by filters: numbers compare by value across integer and
    /// float representations.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.loose_eq(b))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b)
                        .all(|((ka, va), (kb, vb))| ka == kb && va.loose_eq(vb))
            }
            _ => self.compare(other) == Some(Ordering::Equal),
        }
    }

    /// A total order used for sorting rows: values are bracketed by kind
    /// (null, numbers, strings, maps, lists, booleans) and compared within
    /// the bracket.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        fn bracket(value: &Value) -> u8 {
            match value {
                Value::Null => 0,
                Value::I64(_) | Value::F64(_) => 1,
                Value::String(_) => 2,
                Value::Map(_) => 3,
                Value::List(_) => 4,
                Value::Bool(_) => 5,
            }
        }

        bracket(self)
            .cmp(&bracket(other))
            .then_with(|| match (self, other) {
                (Value::List(a), Value::List(b)) => a
                    .iter()
                    .zip(b)
                    .map(|(a, b)| a.sort_cmp(b))
                    .find(|ord| ord.is_ne())
                    .unwrap_or_else(|| a.len().cmp(&b.len())),
                (Value::Map(a), Value::Map(b)) => a
                    .iter()
                    .zip(b)
                    .map(|((ka, va), (kb, vb))| ka.cmp(kb).then_with(|| va.sort_cmp(vb)))
                    .find(|ord| ord.is_ne())
                    .unwrap_or_else(|| a.len().cmp(&b.len())),
                _ => self.compare(other).unwrap_or(Ordering::Equal),
            })
    }
}
