#[macro_use]
mod fmt;
use fmt::ToSql;

mod condition;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod statement;
mod ty;
mod value;

use crate::stmt::Statement;

use tether_core::{driver::Predicate, stmt::Condition};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    /// Serialize a condition into a filter fragment, suitable for a `WHERE`
    /// clause.
    pub fn serialize_condition(&self, condition: &Condition, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
        };

        condition.to_sql(&mut fmt);
        ret
    }

    /// Compile a condition into a parameterized predicate.
    pub fn predicate(&self, condition: &Condition) -> Predicate {
        let mut params = vec![];
        let fragment = self.serialize_condition(condition, &mut params);
        Predicate::Sql { fragment, params }
    }
}
