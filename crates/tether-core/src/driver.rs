mod capability;
pub use capability::{Capability, IdentityKind};

mod predicate;
pub use predicate::Predicate;

mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::{async_trait, stmt::Condition, Error, Schema};

use std::{fmt::Debug, sync::Arc};

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Describes the driver's capability, which informs condition lowering
    /// and identity handling.
    fn capability(&self) -> &Capability;

    /// Register the schema with the driver, creating any missing tables.
    async fn register_schema(&mut self, schema: &Schema) -> crate::Result<()>;

    /// Execute a storage operation
    async fn exec(&self, schema: &Arc<Schema>, op: Operation) -> crate::Result<Response>;

    /// Compile a condition tree into the backend's native predicate.
    fn build_condition(&self, condition: &Condition) -> crate::Result<Predicate>;

    /// Drop and recreate every table in the schema.
    async fn reset_db(&self, _schema: &Schema) -> crate::Result<()> {
        Err(Error::unsupported_feature("reset_db"))
    }
}
