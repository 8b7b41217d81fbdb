use super::Db;
use crate::{Error, Record, Result};

use tether_core::{
    driver::operation,
    stmt::{Condition, Query, Value},
};

impl Db {
    /// A new, unsaved record of the named type.
    pub fn new_record(&self, record_type: &str) -> Result<Record> {
        Ok(Record::new(self.schema().record_type(record_type)?))
    }

    /// Records of the named type matching the query. The query reads from
    /// the type's table when it names none.
    pub async fn find_all(&self, record_type: &str, query: Query) -> Result<Vec<Record>> {
        let ty = self.schema().record_type(record_type)?.clone();
        let query = match query.from {
            Some(_) => query,
            None => query.from(&ty.table.name),
        };

        let rows = self.query_all(&query).await?;
        Ok(rows
            .into_iter()
            .map(|row| Record::from_row(&ty, row))
            .collect())
    }

    pub async fn find(&self, record_type: &str, query: Query) -> Result<Option<Record>> {
        Ok(self
            .find_all(record_type, query.limit(1))
            .await?
            .into_iter()
            .next())
    }

    /// Looks a record up by identity. Identities the driver cannot hold
    /// match nothing.
    pub async fn find_by_id(
        &self,
        record_type: &str,
        id: impl Into<Value>,
    ) -> Result<Option<Record>> {
        let ty = self.schema().record_type(record_type)?;
        let query = Query::new().where_(Condition::id(ty.primary_key_name(), id));
        self.find(record_type, query).await
    }

    /// Like [`Db::find_by_id`], failing when no record matches.
    pub async fn get(&self, record_type: &str, id: impl Into<Value>) -> Result<Record> {
        let id = id.into();
        self.find_by_id(record_type, id.clone())
            .await?
            .ok_or_else(|| Error::record_not_found(format!("{record_type} with id {id:?}")))
    }

    /// Inserts a new record or writes the dirty attributes of a persisted
    /// one.
    pub async fn save(&self, record: &mut Record) -> Result<()> {
        if record.is_new() {
            self.insert(record).await
        } else {
            self.update(record).await.map(|_| ())
        }
    }

    pub async fn insert(&self, record: &mut Record) -> Result<()> {
        for hook in self.hooks(record.type_name()) {
            hook.before_save(self, record).await?;
        }

        let pk = record.primary_key().to_string();
        let mut row = record.attributes().clone();
        if row.get(&pk).is_some_and(Value::is_null) {
            row.shift_remove(&pk);
        }

        let table = record.record_type().table.name.clone();
        let id = self.insert_row(&table, row).await?;

        if !id.is_null() {
            record.set(pk, id);
        }
        record.mark_persisted();

        for hook in self.hooks(record.type_name()) {
            hook.after_save(self, record).await?;
        }

        Ok(())
    }

    /// Writes the attributes changed since the last read or write. Returns
    /// `false` without running any hook when nothing was dirty.
    pub async fn update(&self, record: &mut Record) -> Result<bool> {
        let Some(id) = record.id().cloned() else {
            return Err(Error::not_persisted(record.type_name()));
        };

        if record.dirty_attributes().is_empty() {
            return Ok(false);
        }

        for hook in self.hooks(record.type_name()) {
            hook.before_save(self, record).await?;
        }

        let values = record.dirty_attributes();

        self.exec(operation::Update {
            table: record.record_type().table.name.clone(),
            key: record.primary_key().to_string(),
            id,
            values,
        })
        .await?;
        record.mark_persisted();

        for hook in self.hooks(record.type_name()) {
            hook.after_save(self, record).await?;
        }

        Ok(true)
    }

    pub async fn delete(&self, record: &Record) -> Result<()> {
        let Some(id) = record.id().cloned() else {
            return Err(Error::not_persisted(record.type_name()));
        };

        for hook in self.hooks(record.type_name()) {
            hook.before_delete(self, record).await?;
        }

        let query = Query::table(&record.record_type().table.name)
            .where_(Condition::eq(record.primary_key(), id));
        self.delete_all(&query).await?;

        for hook in self.hooks(record.type_name()) {
            hook.after_delete(self, record).await?;
        }

        Ok(())
    }

    /// Deletes the matching records of a type. Goes record by record when
    /// the type has hooks, otherwise issues one bulk delete.
    pub(crate) async fn delete_where(&self, record_type: &str, query: Query) -> Result<u64> {
        if !self.has_hooks(record_type) {
            return self.delete_all(&query).await;
        }

        let records = self.find_all(record_type, query).await?;
        for record in &records {
            self.delete(record).await?;
        }
        Ok(records.len() as u64)
    }
}
