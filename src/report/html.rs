//! HTML rendering: a self-contained document with a three-column table.

use crate::types::{Item, User};

/// Inline style applied to priority rows.
const PRIORITY_ROW_STYLE: &str = "font-weight:bold;";

/// Opening markup: document, headings with the requesting user's name, and
/// the table header row.
pub fn header(user: &User) -> String {
    format!(
        "<html><body>\n\
         <h1>Relatório</h1>\n\
         <h2>Usuário: {}</h2>\n\
         <table>\n\
         <tr><th>ID</th><th>Nome</th><th>Valor</th></tr>\n",
        user.name
    )
}

/// One table row; priority rows are emphasized via an inline style.
pub fn row(item: &Item, priority: bool) -> String {
    if priority {
        format!(
            "<tr style=\"{}\"><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            PRIORITY_ROW_STYLE, item.id, item.name, item.value
        )
    } else {
        format!("<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n", item.id, item.name, item.value)
    }
}

/// Closing markup with the accumulated total.
pub fn footer(total: f64) -> String {
    format!("</table>\n<h3>Total: {}</h3>\n</body></html>\n", total)
}
