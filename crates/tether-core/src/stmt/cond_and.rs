use super::*;

use std::ops;

#[derive(Debug, Clone, PartialEq)]
pub struct CondAnd {
    pub operands: Vec<Condition>,
}

impl Condition {
    /// Combines two conditions, flattening nested `And`s.
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let lhs = lhs.into();
        let rhs = rhs.into();

        match (lhs, rhs) {
            (Self::And(mut lhs_and), Self::And(rhs_and)) => {
                lhs_and.operands.extend(rhs_and.operands);
                lhs_and.into()
            }
            (Self::And(mut lhs_and), rhs) => {
                lhs_and.operands.push(rhs);
                lhs_and.into()
            }
            (lhs, Self::And(mut rhs_and)) => {
                rhs_and.operands.insert(0, lhs);
                rhs_and.into()
            }
            (lhs, rhs) => CondAnd {
                operands: vec![lhs, rhs],
            }
            .into(),
        }
    }

    /// Conjunction of a list of conditions. Returns `None` for an empty list.
    pub fn and_from_vec(operands: Vec<Self>) -> Option<Self> {
        match operands.len() {
            0 => None,
            1 => operands.into_iter().next(),
            _ => Some(CondAnd { operands }.into()),
        }
    }
}

impl ops::Deref for CondAnd {
    type Target = [Condition];

    fn deref(&self) -> &Self::Target {
        self.operands.deref()
    }
}

impl<'a> IntoIterator for &'a CondAnd {
    type IntoIter = std::slice::Iter<'a, Condition>;
    type Item = &'a Condition;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<CondAnd> for Condition {
    fn from(value: CondAnd) -> Self {
        Self::And(value)
    }
}
