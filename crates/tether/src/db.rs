mod builder;
pub use builder::Builder;

mod persist;
mod query;
mod relations;

use crate::{driver::Driver, Hook, Result};

use tether_core::{
    driver::{Capability, Operation, Predicate, Response},
    stmt::Condition,
    Schema,
};

use indexmap::IndexMap;
use std::sync::Arc;

/// Shared state between all `Db` clones.
pub(crate) struct Shared {
    pub(crate) schema: Arc<Schema>,
    pub(crate) driver: Box<dyn Driver>,

    /// Lifecycle hooks keyed by record type name
    pub(crate) hooks: IndexMap<String, Vec<Arc<dyn Hook>>>,
}

/// A database handle: the built registry plus the driver it runs against.
/// Cloning is cheap and every clone talks to the same driver.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.shared.schema
    }

    pub fn capability(&self) -> &Capability {
        self.shared.driver.capability()
    }

    /// Runs one operation on the driver. Every statement the engine issues
    /// goes through here.
    pub async fn exec(&self, op: impl Into<Operation>) -> Result<Response> {
        let op = op.into();
        tracing::debug!(op = op.name(), table = op.table(), "exec");
        self.shared.driver.exec(&self.shared.schema, op).await
    }

    /// Prunes a condition and compiles what is left to the driver's native
    /// predicate. `None` when nothing survives pruning.
    pub fn build_condition(&self, condition: &Condition) -> Result<Option<Predicate>> {
        match condition.clone().prune() {
            Some(condition) => self.shared.driver.build_condition(&condition).map(Some),
            None => Ok(None),
        }
    }

    /// Drops and recreates every table of the registry.
    pub async fn reset_db(&self) -> Result<()> {
        self.shared.driver.reset_db(&self.shared.schema).await
    }

    pub(crate) fn hooks(&self, record_type: &str) -> &[Arc<dyn Hook>] {
        self.shared
            .hooks
            .get(record_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub(crate) fn has_hooks(&self, record_type: &str) -> bool {
        !self.hooks(record_type).is_empty()
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("driver", &self.shared.driver)
            .field("hooks", &self.shared.hooks.keys().collect::<Vec<_>>())
            .finish()
    }
}
