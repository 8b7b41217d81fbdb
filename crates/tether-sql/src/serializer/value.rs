use super::{Params, ToSql};

use tether_core::stmt;

/// Values are always bound as parameters. Lists and maps are bound whole;
/// the driver encodes them as JSON text.
impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        fmt!(f, placeholder)
    }
}
