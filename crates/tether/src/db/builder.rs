use super::{Db, Shared};
use crate::{driver::Connection, driver::Driver, Hook, Result};

use tether_core::schema::{self, RecordType, Table};

use indexmap::IndexMap;
use std::sync::Arc;

#[derive(Default)]
pub struct Builder {
    /// Schema builder
    core: schema::Builder,

    hooks: IndexMap<String, Vec<Arc<dyn Hook>>>,
}

impl Builder {
    pub fn register(&mut self, record_type: RecordType) -> &mut Self {
        self.core.register(record_type);
        self
    }

    /// Declares a junction table. Tables named by junction relations but not
    /// declared here are derived from the relations.
    pub fn junction(&mut self, table: Table) -> &mut Self {
        self.core.junction(table);
        self
    }

    /// Registers a lifecycle hook for a record type. Hooks run in
    /// registration order.
    pub fn hook(&mut self, record_type: &str, hook: impl Hook) -> &mut Self {
        self.hooks
            .entry(record_type.to_string())
            .or_default()
            .push(Arc::new(hook));
        self
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.core.table_name_prefix(prefix);
        self
    }

    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build(Connection::connect(url)?).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        self.build_boxed(Box::new(driver)).await
    }

    pub async fn build_boxed(&mut self, mut driver: Box<dyn Driver>) -> Result<Db> {
        let schema = self.core.build()?;

        for record_type in self.hooks.keys() {
            schema.record_type(record_type)?;
        }

        driver.register_schema(&schema).await?;

        tracing::debug!(
            driver = driver.capability().name,
            record_types = schema.record_types().count(),
            "registry built"
        );

        Ok(Db {
            shared: Arc::new(Shared {
                schema: Arc::new(schema),
                driver,
                hooks: std::mem::take(&mut self.hooks),
            }),
        })
    }
}
