use super::{Comma, Delimited, Flavor, Ident, Params, ToSql};

use tether_core::{
    driver::IdentityKind,
    stmt::{
        CompareOp, CondBetween, CondCompare, CondContains, CondInList, CondLike, CondTest, Condition, TestOp,
        Value,
    },
};

const MATCH_NONE: &str = "1 = 0";
const MATCH_ALL: &str = "1 = 1";

impl ToSql for &Condition {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Condition::And(cond) => {
                fmt!(f, "(" Delimited(&cond.operands, " AND ") ")");
            }
            Condition::Or(cond) => {
                fmt!(f, "(" Delimited(&cond.operands, " OR ") ")");
            }
            // an unknown conjunction must count as not holding, the way a
            // document filter treats a null field
            Condition::Not(cond) => {
                fmt!(f, "((" Delimited(&cond.operands, " AND ") ") IS NOT TRUE)");
            }
            Condition::Compare(cond) => match cond.lower() {
                Some(lowered) => fmt!(f, &lowered),
                None => cond.to_sql(f),
            },
            Condition::InList(cond) => cond.to_sql(f),
            Condition::Contains(cond) => cond.to_sql(f),
            Condition::Like(cond) => cond.to_sql(f),
            Condition::Between(cond) => cond.to_sql(f),
            Condition::Id(cond) => {
                // SQL backends key rows by integers
                match cond.lower(|value| IdentityKind::Integer.normalize(value)) {
                    Some(lowered) => fmt!(f, &lowered),
                    None => fmt!(f, MATCH_ALL),
                }
            }
            Condition::Test(cond) => cond.to_sql(f),
            Condition::Hash(cond) => match cond.expand() {
                Some(expanded) => fmt!(f, &expanded),
                None => fmt!(f, MATCH_ALL),
            },
            Condition::False => fmt!(f, MATCH_NONE),
        }
    }
}

/// `<>` is unknown for null columns, so the negated forms add the null case
/// back explicitly.
impl ToSql for &CondCompare {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let column = Ident(&self.field);
        let value = &self.value;

        match self.op {
            CompareOp::Eq => fmt!(f, column " = " value),
            CompareOp::Ne => {
                fmt!(f, "(" column " <> " value " OR " column " IS NULL)")
            }
        }
    }
}

impl ToSql for &CondInList {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let column = Ident(&self.field);
        let (values, has_null) = self.split_null();

        match (self.negate, values.is_empty(), has_null) {
            (false, true, false) => fmt!(f, MATCH_NONE),
            (false, true, true) => fmt!(f, column " IS NULL"),
            (false, false, false) => fmt!(f, column " IN (" Comma(values) ")"),
            (false, false, true) => {
                fmt!(f, "(" column " IN (" Comma(values) ") OR " column " IS NULL)")
            }
            (true, true, false) => fmt!(f, MATCH_ALL),
            (true, true, true) => fmt!(f, column " IS NOT NULL"),
            (true, false, false) => {
                fmt!(f, "(" column " NOT IN (" Comma(values) ") OR " column " IS NULL)")
            }
            (true, false, true) => {
                fmt!(f, "(" column " NOT IN (" Comma(values) ") AND " column " IS NOT NULL)")
            }
        }
    }
}

/// List columns hold JSON arrays, so element membership goes through the
/// flavor's JSON functions.
impl ToSql for &CondContains {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let column = Ident(&self.field);
        let values = self.items();

        if values.is_empty() {
            fmt!(f, MATCH_NONE);
            return;
        }

        match f.serializer.flavor {
            Flavor::Sqlite => fmt!(
                f,
                "EXISTS (SELECT 1 FROM json_each(" column ") WHERE json_each.value IN (" Comma(values) "))"
            ),
            Flavor::Postgresql => fmt!(
                f,
                "EXISTS (SELECT 1 FROM jsonb_array_elements_text(" column "::jsonb) AS elem(value) WHERE elem.value IN (" Comma(values) "))"
            ),
            Flavor::Mysql => fmt!(
                f,
                "JSON_OVERLAPS(" column ", JSON_ARRAY(" Comma(values) "))"
            ),
        }
    }
}

impl ToSql for &CondLike {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let column = Ident(&self.field);
        let pattern = self.pattern();

        let mut sql = String::new();
        if pattern.open_start {
            sql.push('%');
        }
        for c in pattern.text.chars() {
            if matches!(c, '\\' | '%' | '_') {
                sql.push('\\');
            }
            sql.push(c);
        }
        if pattern.open_end {
            sql.push('%');
        }
        let pattern = &Value::String(sql);

        if self.negate {
            fmt!(f, "(" column " NOT LIKE " pattern " ESCAPE '\\' OR " column " IS NULL)");
        } else {
            fmt!(f, column " LIKE " pattern " ESCAPE '\\'");
        }
    }
}

impl ToSql for &CondBetween {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let column = Ident(&self.field);
        let min = &self.min;
        let max = &self.max;

        if self.negate {
            fmt!(f, "(" column " NOT BETWEEN " min " AND " max " OR " column " IS NULL)");
        } else {
            fmt!(f, column " BETWEEN " min " AND " max);
        }
    }
}

/// A relational row cannot omit a column, so presence tests are null tests.
impl ToSql for &CondTest {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let column = Ident(&self.field);

        match self.op {
            TestOp::Null | TestOp::NotExists => fmt!(f, column " IS NULL"),
            TestOp::NotNull | TestOp::Exists => fmt!(f, column " IS NOT NULL"),
            TestOp::Empty => fmt!(
                f,
                "(" column " IS NULL OR " column " = '' OR " column " = '[]' OR " column " = '{}')"
            ),
            TestOp::NotEmpty => fmt!(
                f,
                "(" column " IS NOT NULL AND " column " <> '' AND " column " <> '[]' AND " column " <> '{}')"
            ),
        }
    }
}
