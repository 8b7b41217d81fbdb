use super::*;

use indexmap::IndexMap;

/// Regroups rows so they follow a requested key sequence.
///
/// Each distinct key is emitted once, at its first position in the
/// sequence, followed by every row holding that key in the order the rows
/// arrived. Rows whose key is not listed come last.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByIn {
    pub key: String,
    pub keys: Vec<Value>,
}

impl OrderByIn {
    pub fn new(key: impl Into<String>, keys: Vec<Value>) -> Self {
        OrderByIn {
            key: key.into(),
            keys,
        }
    }

    pub fn apply(&self, rows: Vec<Row>) -> Vec<Row> {
        let mut groups: IndexMap<Value, Vec<Row>> =
            self.keys.iter().map(|key| (key.clone(), vec![])).collect();
        let mut rest = vec![];

        for row in rows {
            let key = row.get(&self.key).cloned().unwrap_or_default();
            match groups.get_mut(&key) {
                Some(group) => group.push(row),
                None => rest.push(row),
            }
        }

        groups.into_values().flatten().chain(rest).collect()
    }
}
