use super::{Comma, Delimited, Flavor, Ident, Params, ToSql};

use crate::stmt::{self, Projection, Statement};

use tether_core::{schema::Column, stmt::Direction};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

struct ColumnDef<'a> {
    column: &'a Column,
    primary_key: bool,
}

impl ToSql for ColumnDef<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = Ident(&self.column.name);

        if !self.primary_key {
            fmt!(f, "\n    " name " " self.column.ty);
            return;
        }

        // The primary key is the auto-incrementing row identity
        let def = match f.serializer.flavor {
            Flavor::Sqlite => "INTEGER PRIMARY KEY",
            Flavor::Postgresql => "BIGSERIAL PRIMARY KEY",
            Flavor::Mysql => "BIGINT AUTO_INCREMENT PRIMARY KEY",
        };
        fmt!(f, "\n    " name " " def);
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = &self.table;
        let name = Ident(&table.name);
        let columns = Delimited(
            table.columns.iter().map(|column| ColumnDef {
                column,
                primary_key: table.is_primary_key(&column.name),
            }),
            ",",
        );

        fmt!(f, "CREATE TABLE IF NOT EXISTS " name " (" columns "\n)");
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = Ident(&self.name);
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };

        fmt!(f, "DROP TABLE " if_exists name);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = Ident(&self.table);

        if self.row.is_empty() {
            fmt!(f, "INSERT INTO " table " DEFAULT VALUES");
        } else {
            let columns = Comma(self.row.keys().map(Ident));
            let values = Comma(self.row.values());

            fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
        }

        if let Some(returning) = &self.returning {
            if !f.serializer.is_mysql() {
                fmt!(f, " RETURNING " Ident(returning));
            }
        }
    }
}

struct Assignment<'a>(&'a str, &'a tether_core::stmt::Value);

impl ToSql for Assignment<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, Ident(self.0) " = " self.1);
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = Ident(&self.table);
        let assignments = Comma(
            self.values
                .iter()
                .map(|(column, value)| Assignment(column, value)),
        );

        fmt!(f, "UPDATE " table " SET " assignments);
        Filter(&self.filter).to_sql(f);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = Ident(&self.table);

        fmt!(f, "DELETE FROM " table);
        Filter(&self.filter).to_sql(f);
    }
}

struct Filter<'a>(&'a Option<tether_core::stmt::Condition>);

impl ToSql for Filter<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        if let Some(condition) = self.0 {
            fmt!(f, " WHERE " condition);
        }
    }
}

struct OrderBy<'a>(&'a str, Direction);

impl ToSql for OrderBy<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let dir = if self.1.is_desc() { " DESC" } else { " ASC" };
        fmt!(f, Ident(self.0) dir);
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let query = &self.query;
        let table = Ident(&self.table);

        match &self.projection {
            Projection::Rows => match &query.select {
                Some(fields) if !fields.is_empty() => {
                    fmt!(f, "SELECT " Comma(fields.iter().map(Ident)))
                }
                _ => fmt!(f, "SELECT *"),
            },
            Projection::Count => fmt!(f, "SELECT COUNT(*)"),
            Projection::Distinct(key) => fmt!(f, "SELECT DISTINCT " Ident(key)),
        }

        fmt!(f, " FROM " table);
        Filter(&query.condition).to_sql(f);

        // Counting ignores ordering and paging
        if self.projection == Projection::Count {
            return;
        }

        if !query.order.is_empty() {
            let order = Comma(
                query
                    .order
                    .iter()
                    .map(|(field, direction)| OrderBy(field, *direction)),
            );
            fmt!(f, " ORDER BY " order);
        }

        match (query.limit, query.offset) {
            (Some(limit), Some(offset)) => fmt!(f, " LIMIT " limit " OFFSET " offset),
            (Some(limit), None) => fmt!(f, " LIMIT " limit),
            (None, Some(offset)) => {
                // SQLite and MySQL only accept OFFSET after a LIMIT
                let unbounded = match f.serializer.flavor {
                    Flavor::Sqlite => " LIMIT -1",
                    Flavor::Mysql => " LIMIT 18446744073709551615",
                    Flavor::Postgresql => "",
                };
                fmt!(f, unbounded " OFFSET " offset);
            }
            (None, None) => {}
        }
    }
}
