/// Storage type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I64,
    F64,
    String,
    /// An ordered list; array-valued foreign keys use this type
    List,
    Map,
    /// A record identity, as assigned by the backend
    Id,
}

impl Type {
    pub fn is_list(self) -> bool {
        matches!(self, Type::List)
    }
}
