mod eval;
mod filter;
mod op;
mod store;

pub use filter::compile;

use store::Store;

use std::sync::{Arc, Mutex, MutexGuard};
use tether_core::{
    async_trait,
    driver::{Capability, Driver, Operation, Predicate, Response},
    stmt::Condition,
    Error, Result, Schema,
};
use url::Url;

/// In-memory document store. Each table is a collection of JSON documents;
/// conditions compile into nested key/operator filter documents.
#[derive(Debug)]
pub struct MemDoc {
    name: String,
    store: Mutex<Store>,
}

impl MemDoc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            store: Mutex::new(Store::default()),
        }
    }

    /// Create a store from a `memdoc://name` URL.
    pub fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "memdoc" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `memdoc` scheme; url={url}"
            )));
        }

        let name = url.host_str().unwrap_or("tether");
        Ok(Self::new(name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn store(&self) -> Result<MutexGuard<'_, Store>> {
        self.store
            .lock()
            .map_err(|_| tether_core::err!("memdoc store `{}` poisoned", self.name))
    }
}

#[async_trait]
impl Driver for MemDoc {
    fn capability(&self) -> &Capability {
        &Capability::MEMDOC
    }

    async fn register_schema(&mut self, schema: &Schema) -> Result<()> {
        let mut store = self.store()?;
        for table in schema.tables() {
            store.create_collection(&table.name);
        }
        Ok(())
    }

    async fn exec(&self, schema: &Arc<Schema>, op: Operation) -> Result<Response> {
        let mut store = self.store()?;
        op::execute_operation(&mut store, schema, op)
    }

    fn build_condition(&self, condition: &Condition) -> Result<Predicate> {
        Ok(Predicate::Document(compile(condition)))
    }

    async fn reset_db(&self, schema: &Schema) -> Result<()> {
        let mut store = self.store()?;
        for table in schema.tables() {
            store.drop_collection(&table.name);
            store.create_collection(&table.name);
        }
        Ok(())
    }
}
