use crate::{Error, Result};

pub use tether_core::{
    driver::{
        operation::{self, Operation},
        Capability, Driver, IdentityKind, Predicate, Response, Rows,
    },
    Schema,
};

use std::sync::Arc;
use tether_core::stmt::Condition;
use url::Url;

/// A built-in driver selected by connection URL scheme.
#[derive(Debug)]
pub(crate) enum Connection {
    #[cfg(feature = "memdoc")]
    MemDoc(tether_driver_memdoc::MemDoc),

    #[cfg(feature = "sqlite")]
    Sqlite(tether_driver_sqlite::Sqlite),
}

impl Connection {
    pub(crate) fn connect(url: &str) -> Result<Self> {
        let parsed = Url::parse(url)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

        match parsed.scheme() {
            "memdoc" => Self::connect_memdoc(&parsed),
            "sqlite" => Self::connect_sqlite(&parsed),
            scheme => Err(Error::invalid_connection_url(format!(
                "unsupported database; scheme={scheme}; url={url}"
            ))),
        }
    }

    #[cfg(feature = "memdoc")]
    fn connect_memdoc(url: &Url) -> Result<Self> {
        let driver = tether_driver_memdoc::MemDoc::connect(url.as_str())?;
        Ok(Self::MemDoc(driver))
    }

    #[cfg(not(feature = "memdoc"))]
    fn connect_memdoc(_url: &Url) -> Result<Self> {
        Err(Error::unsupported_feature("`memdoc` feature not enabled"))
    }

    #[cfg(feature = "sqlite")]
    fn connect_sqlite(url: &Url) -> Result<Self> {
        let driver = tether_driver_sqlite::Sqlite::connect(url.as_str())?;
        Ok(Self::Sqlite(driver))
    }

    #[cfg(not(feature = "sqlite"))]
    fn connect_sqlite(_url: &Url) -> Result<Self> {
        Err(Error::unsupported_feature("`sqlite` feature not enabled"))
    }
}

macro_rules! match_db {
    ($self:expr, $driver:pat => $e:expr) => {
        match *$self {
            #[cfg(feature = "memdoc")]
            Connection::MemDoc($driver) => $e,

            #[cfg(feature = "sqlite")]
            Connection::Sqlite($driver) => $e,
        }
    };
}

#[tether_core::async_trait]
impl Driver for Connection {
    fn capability(&self) -> &Capability {
        match_db!(self, ref driver => driver.capability())
    }

    async fn register_schema(&mut self, schema: &Schema) -> Result<()> {
        #[allow(unused_variables)]
        let schema = schema;
        match_db!(self, ref mut driver => driver.register_schema(schema).await)
    }

    async fn exec(&self, schema: &Arc<Schema>, op: Operation) -> Result<Response> {
        #[allow(unused_variables)]
        let schema = schema;
        #[allow(unused_variables)]
        let op = op;

        match_db!(self, ref driver => driver.exec(schema, op).await)
    }

    fn build_condition(&self, condition: &Condition) -> Result<Predicate> {
        #[allow(unused_variables)]
        let condition = condition;
        match_db!(self, ref driver => driver.build_condition(condition))
    }

    async fn reset_db(&self, schema: &Schema) -> Result<()> {
        #[allow(unused_variables)]
        let schema = schema;
        match_db!(self, ref driver => driver.reset_db(schema).await)
    }
}
