use super::Db;
use crate::{Error, Result};

use tether_core::{
    driver::operation,
    stmt::{Query, Row, Value},
};

use indexmap::IndexMap;

impl Db {
    /// Every row matching the query. When the query carries an
    /// `order_by_in` sequence and no explicit ordering, rows are regrouped
    /// to follow the sequence.
    pub async fn query_all(&self, query: &Query) -> Result<Vec<Row>> {
        let rows = self
            .exec(operation::QueryAll {
                query: query.clone(),
            })
            .await?
            .into_values()?;

        Ok(match &query.order_by_in {
            Some(ordering) if query.order.is_empty() => ordering.apply(rows),
            _ => rows,
        })
    }

    /// The first matching row. With an `order_by_in` sequence this is the
    /// first row of the first key present.
    pub async fn query_one(&self, query: &Query) -> Result<Option<Row>> {
        Ok(self.query_all(&first_only(query)).await?.into_iter().next())
    }

    /// Rows keyed by the query's index key. Later rows win on duplicate keys.
    pub async fn query_indexed(&self, query: &Query) -> Result<IndexMap<Value, Row>> {
        let Some(key) = &query.index_key else {
            return Err(Error::invalid_statement("indexed query has no index key"));
        };

        let rows = self.query_all(query).await?;
        Ok(rows
            .into_iter()
            .map(|row| (row.get(key).cloned().unwrap_or_default(), row))
            .collect())
    }

    /// One attribute of every matching row.
    pub async fn query_column(&self, query: &Query, key: &str) -> Result<Vec<Value>> {
        let query = query.clone().select([key]);
        let rows = self.query_all(&query).await?;
        Ok(rows
            .into_iter()
            .map(|mut row| row.shift_remove(key).unwrap_or_default())
            .collect())
    }

    /// One attribute of the first matching row.
    pub async fn query_scalar(&self, query: &Query, key: &str) -> Result<Option<Value>> {
        Ok(self
            .query_column(&first_only(query), key)
            .await?
            .into_iter()
            .next())
    }

    /// Distinct non-null values of an attribute, in first-seen order.
    pub async fn query_distinct(&self, query: &Query, key: &str) -> Result<Vec<Value>> {
        self.exec(operation::QueryDistinct {
            query: query.clone(),
            key: key.to_string(),
        })
        .await?
        .into_list()
    }

    /// Number of matching rows. Paging applies to the count.
    pub async fn query_count(&self, query: &Query) -> Result<u64> {
        self.exec(operation::QueryCount {
            query: query.clone(),
        })
        .await?
        .into_count()
    }

    /// Inserts a raw row, returning its identity.
    pub async fn insert_row(&self, table: &str, row: Row) -> Result<Value> {
        self.exec(operation::Insert {
            table: table.to_string(),
            row,
        })
        .await?
        .into_identity()
    }

    /// Assigns `values` on every matching row, returning the count.
    pub async fn update_all(&self, query: &Query, values: Row) -> Result<u64> {
        self.exec(operation::UpdateAll {
            query: query.clone(),
            values,
        })
        .await?
        .into_count()
    }

    /// Updates the row identified by `keys`, inserting it if absent.
    pub async fn upsert(&self, table: &str, keys: &[&str], row: Row) -> Result<u64> {
        self.exec(operation::Upsert {
            table: table.to_string(),
            keys: keys.iter().map(|key| key.to_string()).collect(),
            row,
        })
        .await?
        .into_count()
    }

    /// Deletes every matching row, returning the count.
    pub async fn delete_all(&self, query: &Query) -> Result<u64> {
        self.exec(operation::Delete {
            query: query.clone(),
        })
        .await?
        .into_count()
    }
}

/// Narrows a query to its first row. Rows regrouped by `order_by_in` are
/// fetched whole, since the driver's first row is not the regrouped one.
fn first_only(query: &Query) -> Query {
    match &query.order_by_in {
        Some(_) if query.order.is_empty() => query.clone(),
        _ => query.clone().limit(1),
    }
}
