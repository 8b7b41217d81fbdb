use crate::stmt::Value;

#[derive(Debug)]
pub struct Capability {
    /// Backend name, used in log output
    pub name: &'static str,

    /// Shape of identities the backend assigns
    pub identity: IdentityKind,

    /// When true, the backend can tell a stored null from a missing field.
    pub distinguishes_missing: bool,
}

/// How a backend represents record identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    /// Auto-incremented integers
    Integer,

    /// 24 lowercase hexadecimal characters
    ObjectId,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        name: "sqlite",
        identity: IdentityKind::Integer,
        distinguishes_missing: false,
    };

    /// In-memory document store capabilities.
    pub const MEMDOC: Self = Self {
        name: "memdoc",
        identity: IdentityKind::ObjectId,
        distinguishes_missing: true,
    };
}

impl IdentityKind {
    /// Converts a value to the backend's identity form. Returns `None` when
    /// the value cannot be an identity on this backend.
    pub fn normalize(self, value: &Value) -> Option<Value> {
        match (self, value) {
            (IdentityKind::Integer, Value::I64(_)) => Some(value.clone()),
            (IdentityKind::Integer, Value::String(s)) => s.trim().parse::<i64>().ok().map(Value::I64),
            (IdentityKind::ObjectId, Value::String(s)) if is_object_id(s) => Some(value.clone()),
            _ => None,
        }
    }
}

fn is_object_id(s: &str) -> bool {
    s.len() == 24 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
