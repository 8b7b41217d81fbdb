use super::{Flavor, Params, ToSql};

use tether_core::schema::Type;

impl ToSql for Type {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = match (f.serializer.flavor, self) {
            (Flavor::Sqlite, Type::Bool | Type::I64 | Type::Id) => "INTEGER",
            (Flavor::Sqlite, Type::F64) => "REAL",
            (Flavor::Postgresql | Flavor::Mysql, Type::Bool) => "BOOLEAN",
            (Flavor::Postgresql | Flavor::Mysql, Type::I64 | Type::Id) => "BIGINT",
            (Flavor::Postgresql, Type::F64) => "DOUBLE PRECISION",
            (Flavor::Mysql, Type::F64) => "DOUBLE",
            (_, Type::String | Type::List | Type::Map) => "TEXT",
        };

        f.dst.push_str(name);
    }
}
