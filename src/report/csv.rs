//! CSV rendering: a fixed four-column layout (ID,NOME,VALOR,USUARIO).

use crate::types::{Item, User};

/// Fixed column header line.
pub fn header() -> String {
    "ID,NOME,VALOR,USUARIO\n".to_string()
}

/// One data row.
///
/// The USUARIO column carries the requesting user's name on every row, not
/// an item owner. HTML output has no user column at all; the asymmetry is
/// observed behavior and kept as is.
pub fn row(item: &Item, user: &User) -> String {
    format!("{},{},{},{}\n", item.id, item.name, item.value, user.name)
}

/// Two-line trailer, padded with trailing commas to the body column count.
pub fn footer(total: f64) -> String {
    format!("\nTotal,,\n{},,\n", total)
}
