use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use tether_core::{
    schema::Type,
    stmt::{self, Value as CoreValue},
    Error, Result,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core Tether value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a Tether value. Without a
    /// declared type the value keeps its storage class.
    pub fn from_sql(row: &Row, index: usize, ty: Option<Type>) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver_operation_failed)?;

        let core_value = match value {
            SqlValue::Null => stmt::Value::Null,
            SqlValue::Integer(value) => match ty {
                Some(Type::Bool) => stmt::Value::Bool(value != 0),
                Some(Type::F64) => stmt::Value::F64(value as f64),
                _ => stmt::Value::I64(value),
            },
            SqlValue::Real(value) => stmt::Value::F64(value),
            SqlValue::Text(value) => match ty {
                // Lists and maps are stored as JSON text
                Some(Type::List | Type::Map) => {
                    let json: serde_json::Value = serde_json::from_str(&value)?;
                    stmt::Value::from_json(&json)
                }
                _ => stmt::Value::String(value),
            },
            SqlValue::Blob(_) => {
                return Err(Error::unsupported_feature("blob columns"));
            }
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            value @ (Value::List(_) | Value::Map(_)) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                value.to_json().to_string(),
            ))),
        }
    }
}
