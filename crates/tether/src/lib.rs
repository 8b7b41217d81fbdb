pub mod db;
pub use db::Db;

pub mod driver;

mod engine;

mod hook;
pub use hook::Hook;

mod record;
pub use record::{Record, Related};

mod relation_query;
pub use relation_query::RelationQuery;

pub use tether_core::{
    async_trait, bail, err,
    schema::{self, Cardinality, RecordType, Relation, Table, Type},
    stmt::{self, Condition, Direction, Query, Row, Value},
    Error, Result,
};
