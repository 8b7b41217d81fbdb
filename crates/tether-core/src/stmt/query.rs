use super::*;

use indexmap::IndexMap;

/// Description of a single read (or the selection part of a write) against
/// one table or collection.
///
/// Every setter consumes and returns the query so calls chain. Cloning is a
/// full structural copy: a clone's condition, ordering and key lists can be
/// changed without touching the original.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Source table or collection
    pub from: Option<String>,

    /// Projected attributes. `None` selects every attribute.
    pub select: Option<Vec<String>>,

    /// Row filter. `None` matches every row.
    pub condition: Option<Condition>,

    /// Ordering entries, applied in insertion order
    pub order: IndexMap<String, Direction>,

    pub limit: Option<u64>,

    pub offset: Option<u64>,

    /// Attribute used to key results when they are returned indexed
    pub index_key: Option<String>,

    /// Key sequence results are regrouped by when no ordering is requested
    pub order_by_in: Option<OrderByIn>,
}

impl Query {
    pub fn new() -> Query {
        Query::default()
    }

    /// Creates a query reading from the given table.
    pub fn table(name: impl Into<String>) -> Query {
        Query::new().from(name)
    }

    pub fn from(mut self, name: impl Into<String>) -> Self {
        self.from = Some(name.into());
        self
    }

    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the condition verbatim, replacing any existing one. Empty operands
    /// are kept: `in` over an empty list matches nothing.
    pub fn where_(mut self, condition: impl Into<Condition>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn and_where(mut self, condition: impl Into<Condition>) -> Self {
        let condition = condition.into();
        self.condition = Some(match self.condition.take() {
            Some(existing) => Condition::and(existing, condition),
            None => condition,
        });
        self
    }

    pub fn or_where(mut self, condition: impl Into<Condition>) -> Self {
        let condition = condition.into();
        self.condition = Some(match self.condition.take() {
            Some(existing) => Condition::or(existing, condition),
            None => condition,
        });
        self
    }

    /// Sets the condition after pruning empty operands. A condition that
    /// prunes away entirely clears the filter.
    pub fn filter(mut self, condition: impl Into<Condition>) -> Self {
        self.condition = condition.into().prune();
        self
    }

    /// Adds a pruned condition with `and`. Does nothing if it prunes away.
    pub fn and_filter(self, condition: impl Into<Condition>) -> Self {
        match condition.into().prune() {
            Some(condition) => self.and_where(condition),
            None => self,
        }
    }

    /// Adds a pruned condition with `or`. Does nothing if it prunes away.
    pub fn or_filter(self, condition: impl Into<Condition>) -> Self {
        match condition.into().prune() {
            Some(condition) => self.or_where(condition),
            None => self,
        }
    }

    /// Replaces the ordering with a single entry.
    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order.clear();
        self.order.insert(field.into(), direction);
        self
    }

    pub fn add_order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order.insert(field.into(), direction);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn index_by(mut self, key: impl Into<String>) -> Self {
        self.index_key = Some(key.into());
        self
    }

    /// Regroups results to follow `keys` when no ordering is requested.
    pub fn order_by_in(mut self, key: impl Into<String>, keys: Vec<Value>) -> Self {
        self.order_by_in = Some(OrderByIn::new(key, keys));
        self
    }

    /// Returns the source table, failing if none was set.
    pub fn source(&self) -> crate::Result<&str> {
        self.from
            .as_deref()
            .ok_or_else(|| crate::Error::invalid_statement("query has no source table"))
    }

    /// Returns `true` if the query filters rows.
    pub fn has_condition(&self) -> bool {
        self.condition.is_some()
    }
}
