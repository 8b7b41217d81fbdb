use super::*;

use std::ops;

#[derive(Debug, Clone, PartialEq)]
pub struct CondOr {
    pub operands: Vec<Condition>,
}

impl ops::Deref for CondOr {
    type Target = [Condition];

    fn deref(&self) -> &Self::Target {
        self.operands.deref()
    }
}

impl<'a> IntoIterator for &'a CondOr {
    type IntoIter = std::slice::Iter<'a, Condition>;
    type Item = &'a Condition;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<CondOr> for Condition {
    fn from(value: CondOr) -> Self {
        Self::Or(value)
    }
}
