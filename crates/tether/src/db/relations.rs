use super::Db;
use crate::{engine, Error, Record, Related, RelationQuery, Result};

use tether_core::stmt::Row;

impl Db {
    /// The cached value of relation `name`, populated for this record
    /// alone when not cached yet.
    pub async fn related<'a>(&self, record: &'a mut Record, name: &str) -> Result<&'a Related> {
        if !record.is_related_populated(name) {
            engine::populate(self, &mut [&mut *record], name).await?;
        }

        record.related(name).ok_or_else(|| {
            Error::invalid_result(format!("relation `{name}` was not populated"))
        })
    }

    /// Populates relation `name` on every record with one query (two when
    /// mediated), returning the fetched targets.
    pub async fn populate(&self, records: &mut [Record], name: &str) -> Result<Vec<Record>> {
        let mut refs: Vec<&mut Record> = records.iter_mut().collect();
        engine::populate(self, &mut refs, name).await
    }

    /// Populates dotted relation paths such as `"customer.address"`.
    pub async fn populate_with(&self, records: &mut [Record], paths: &[&str]) -> Result<()> {
        let paths: Vec<String> = paths.iter().map(|path| path.to_string()).collect();
        let mut refs: Vec<&mut Record> = records.iter_mut().collect();
        engine::populate_paths(self, &mut refs, &paths).await
    }

    /// A query over the targets of relation `name` for one record.
    pub fn relation_query(&self, record: &Record, name: &str) -> Result<RelationQuery> {
        RelationQuery::new(self, record, name)
    }

    pub async fn link(&self, record: &mut Record, name: &str, target: &mut Record) -> Result<()> {
        engine::link(self, record, name, target, Row::new()).await
    }

    /// Links with additional columns written on the junction row, the
    /// intermediate record, or the side storing the key.
    pub async fn link_with(
        &self,
        record: &mut Record,
        name: &str,
        target: &mut Record,
        extra: Row,
    ) -> Result<()> {
        engine::link(self, record, name, target, extra).await
    }

    /// Unlinks `target`. `remove` overrides the relation's default for
    /// deleting the target.
    pub async fn unlink(
        &self,
        record: &mut Record,
        name: &str,
        target: &mut Record,
        remove: Option<bool>,
    ) -> Result<()> {
        engine::unlink(self, record, name, target, remove).await
    }

    pub async fn unlink_all(
        &self,
        record: &mut Record,
        name: &str,
        remove: Option<bool>,
    ) -> Result<()> {
        engine::unlink_all(self, record, name, remove).await
    }
}
