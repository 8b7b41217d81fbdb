use crate::{Db, Record, Result};

/// Lifecycle callbacks for one record type.
///
/// Hooks run around single-record saves and deletes, including the
/// per-record deletes an unlink-all falls back to when a hook is
/// registered for the target type. Bulk statements never invoke them.
#[tether_core::async_trait]
pub trait Hook: Send + Sync + 'static {
    /// Called before an insert or update. Changes made to `record` are
    /// written.
    async fn before_save(&self, _db: &Db, _record: &mut Record) -> Result<()> {
        Ok(())
    }

    async fn after_save(&self, _db: &Db, _record: &Record) -> Result<()> {
        Ok(())
    }

    async fn before_delete(&self, _db: &Db, _record: &Record) -> Result<()> {
        Ok(())
    }

    async fn after_delete(&self, _db: &Db, _record: &Record) -> Result<()> {
        Ok(())
    }
}
