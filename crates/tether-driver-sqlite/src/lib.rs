mod value;
pub(crate) use value::Value;

use rusqlite::Connection;
use std::{
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};
use tether_core::{
    async_trait,
    driver::{operation, Capability, Driver, Operation, Predicate, Response},
    schema::{Table, Type},
    stmt::{self, Condition, Query, Row},
    Error, Result, Schema,
};
use tether_sql::{self as sql, Serializer};
use url::Url;

const SERIALIZER: Serializer = Serializer::sqlite();

#[derive(Debug)]
pub struct Sqlite {
    connection: Mutex<Connection>,
}

impl Sqlite {
    /// Connect to a SQLite database by URL: `sqlite::memory:` or
    /// `sqlite:/path/to/file.db`.
    pub fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(Error::driver_operation_failed)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url}"
            )));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(url.path())
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection = Connection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Self::new(connection)
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).map_err(Error::driver_operation_failed)?;
        Self::new(connection)
    }

    fn new(connection: Connection) -> Result<Self> {
        // `like` is case-sensitive on every backend
        connection
            .execute_batch("PRAGMA case_sensitive_like = ON;")
            .map_err(Error::driver_operation_failed)?;

        Ok(Sqlite {
            connection: Mutex::new(connection),
        })
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|_| Error::driver_operation_failed(Poisoned))
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn capability(&self) -> &Capability {
        &Capability::SQLITE
    }

    async fn register_schema(&mut self, schema: &Schema) -> Result<()> {
        let connection = self.connection()?;

        for table in schema.tables() {
            create_table(&connection, table)?;
        }

        Ok(())
    }

    async fn exec(&self, schema: &Arc<Schema>, op: Operation) -> Result<Response> {
        let connection = self.connection()?;

        match op {
            Operation::QueryAll(op) => {
                let stmt = sql::Statement::select(&op.query)?;
                let rows = query_rows(&connection, schema, op.query.source()?, &stmt)?;
                Ok(Response::values(rows))
            }
            Operation::QueryCount(op) => {
                let stmt = sql::Statement::count(&op.query)?;
                let (sql, params) = serialize(&stmt);
                let count: i64 = connection
                    .query_row(&sql, rusqlite::params_from_iter(params.iter()), |row| {
                        row.get(0)
                    })
                    .map_err(Error::driver_operation_failed)?;
                Ok(Response::count(count as u64))
            }
            Operation::QueryDistinct(op) => {
                let stmt = sql::Statement::distinct(&op.query, &op.key)?;
                let rows = query_rows(&connection, schema, op.query.source()?, &stmt)?;
                let values = rows
                    .into_iter()
                    .filter_map(|mut row| row.swap_remove(&op.key))
                    .filter(|value| !value.is_null())
                    .collect();
                Ok(Response::list(values))
            }
            Operation::Insert(op) => insert(&connection, schema, op),
            Operation::Update(op) => {
                if op.values.is_empty() {
                    return Ok(Response::count(0));
                }
                let stmt = sql::Statement::update_by_key(&op.table, &op.key, &op.id, &op.values);
                execute(&connection, &stmt).map(Response::count)
            }
            Operation::UpdateAll(op) => {
                if op.values.is_empty() {
                    return Ok(Response::count(0));
                }
                let stmt = sql::Statement::update_all(&op.query, &op.values)?;
                execute(&connection, &stmt).map(Response::count)
            }
            Operation::Upsert(op) => upsert(&connection, schema, op),
            Operation::Delete(op) => {
                let stmt = sql::Statement::delete(&op.query)?;
                execute(&connection, &stmt).map(Response::count)
            }
        }
    }

    fn build_condition(&self, condition: &Condition) -> Result<Predicate> {
        Ok(SERIALIZER.predicate(condition))
    }

    async fn reset_db(&self, schema: &Schema) -> Result<()> {
        let connection = self.connection()?;

        for table in schema.tables() {
            execute(&connection, &sql::Statement::drop_table_if_exists(&table.name))?;
            create_table(&connection, table)?;
        }

        Ok(())
    }
}

fn serialize(stmt: &sql::Statement) -> (String, Vec<Value>) {
    let mut params: Vec<stmt::Value> = vec![];
    let sql = SERIALIZER.serialize(stmt, &mut params);
    tracing::trace!(sql = %sql, params = params.len(), "sqlite statement");
    (sql, params.into_iter().map(Value::from).collect())
}

fn create_table(connection: &Connection, table: &Table) -> Result<()> {
    execute(connection, &sql::Statement::create_table(table)).map(|_| ())
}

fn execute(connection: &Connection, stmt: &sql::Statement) -> Result<u64> {
    let (sql, params) = serialize(stmt);

    let mut stmt = connection
        .prepare_cached(&sql)
        .map_err(Error::driver_operation_failed)?;

    let count = stmt
        .execute(rusqlite::params_from_iter(params.iter()))
        .map_err(Error::driver_operation_failed)?;

    Ok(count as u64)
}

fn query_rows(
    connection: &Connection,
    schema: &Schema,
    table: &str,
    stmt: &sql::Statement,
) -> Result<Vec<Row>> {
    let (sql, params) = serialize(stmt);
    let table = schema.table(table);

    let mut stmt = connection
        .prepare_cached(&sql)
        .map_err(Error::driver_operation_failed)?;

    let columns: Vec<(String, Option<Type>)> = stmt
        .column_names()
        .into_iter()
        .map(|name| {
            let ty = table.and_then(|table| table.get_column(name)).map(|c| c.ty);
            (name.to_string(), ty)
        })
        .collect();

    let mut rows = stmt
        .query(rusqlite::params_from_iter(params.iter()))
        .map_err(Error::driver_operation_failed)?;

    let mut ret = vec![];

    loop {
        match rows.next() {
            Ok(Some(row)) => {
                let mut record = Row::with_capacity(columns.len());

                for (index, (name, ty)) in columns.iter().enumerate() {
                    let value = Value::from_sql(row, index, *ty)?.into_inner();
                    record.insert(name.clone(), value);
                }

                ret.push(record);
            }
            Ok(None) => break,
            Err(err) => {
                return Err(Error::driver_operation_failed(err));
            }
        }
    }

    Ok(ret)
}

fn insert(connection: &Connection, schema: &Schema, op: operation::Insert) -> Result<Response> {
    let primary_key = schema
        .table(&op.table)
        .and_then(|table| table.primary_key.clone());

    // A null primary key is assigned by SQLite
    let mut row = op.row;
    if let Some(pk) = &primary_key {
        if row.get(pk).is_some_and(stmt::Value::is_null) {
            row.shift_remove(pk);
        }
    }

    execute(connection, &sql::Statement::insert(&op.table, &row))?;

    let id = match &primary_key {
        Some(pk) => match row.get(pk) {
            Some(id) => id.clone(),
            None => stmt::Value::I64(connection.last_insert_rowid()),
        },
        None => stmt::Value::Null,
    };

    Ok(Response::identity(id))
}

fn upsert(connection: &Connection, schema: &Schema, op: operation::Upsert) -> Result<Response> {
    let keys = Condition::hash(
        op.keys
            .iter()
            .map(|key| (key.clone(), op.row.get(key).cloned().unwrap_or_default())),
    );
    let query = Query::table(&op.table).where_(keys);

    let values: Row = op
        .row
        .iter()
        .filter(|(name, _)| !op.keys.contains(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    let matched = if values.is_empty() {
        let stmt = sql::Statement::count(&query)?;
        let (sql, params) = serialize(&stmt);
        let count: i64 = connection
            .query_row(&sql, rusqlite::params_from_iter(params.iter()), |row| {
                row.get(0)
            })
            .map_err(Error::driver_operation_failed)?;
        count as u64
    } else {
        execute(connection, &sql::Statement::update_all(&query, &values)?)?
    };

    if matched > 0 {
        return Ok(Response::count(matched));
    }

    insert(
        connection,
        schema,
        operation::Insert {
            table: op.table,
            row: op.row,
        },
    )?;
    Ok(Response::count(1))
}

#[derive(Debug)]
struct Poisoned;

impl std::error::Error for Poisoned {}

impl std::fmt::Display for Poisoned {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("sqlite connection mutex poisoned")
    }
}
