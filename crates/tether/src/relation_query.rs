use crate::{engine, Db, Record, Result};

use tether_core::{
    schema::{RecordType, Relation},
    stmt::Query,
};

use std::sync::Arc;

/// The targets of one relation for one record, as a query that can be
/// narrowed further before it runs.
#[derive(Debug, Clone)]
pub struct RelationQuery {
    name: String,
    source: Record,
    relation: Arc<Relation>,
    target: Arc<RecordType>,
}

impl RelationQuery {
    pub(crate) fn new(db: &Db, record: &Record, name: &str) -> Result<RelationQuery> {
        let relation = record.record_type().get_relation(name)?.clone();
        let target = db.schema().record_type(&relation.target)?.clone();

        Ok(RelationQuery {
            name: name.to_string(),
            source: record.shallow(),
            relation,
            target,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn relation(&self) -> &Relation {
        &self.relation
    }

    pub fn target(&self) -> &Arc<RecordType> {
        &self.target
    }

    /// Resolves mediation into a plain query over the target table. Junction
    /// and via-relations run their mediation query here.
    pub async fn prepare(&self, db: &Db) -> Result<Query> {
        let mut source = self.source.shallow();
        let links = engine::resolve_links(db, &self.relation, &mut [&mut source]).await?;
        let keys = links.into_iter().next().unwrap_or_default();

        Ok(engine::targets_query(
            &self.relation,
            self.source.record_type(),
            &self.target,
            keys,
        ))
    }

    pub async fn all(&self, db: &Db) -> Result<Vec<Record>> {
        let query = self.prepare(db).await?;
        db.find_all(&self.target.name, query).await
    }

    pub async fn first(&self, db: &Db) -> Result<Option<Record>> {
        let query = self.prepare(db).await?;
        db.find(&self.target.name, query).await
    }

    pub async fn count(&self, db: &Db) -> Result<u64> {
        let query = self.prepare(db).await?;
        db.query_count(&query).await
    }
}
