use compact_str::format_compact;
use quarry_core::{Result, SQL};

use super::ident::{aliased_identifier, identifier};
use crate::query::Select;
use crate::schema::Schema;
use crate::value::Value;

/// Where a compiled column list lands in the statement.
///
/// SELECT position qualifies identifiers with their table; RETURNING
/// position uses bare column names, since the clause may only reference the
/// single table being modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Select,
    Returning,
}

/// Compiles a column allow-list into a SELECT/RETURNING fragment.
///
/// An empty [`Select`] means every column of the owning table: `"table".*`
/// at the top level, or the full registry column list aliased through
/// `relation` when compiling for an included relation. Named columns are
/// validated against the registry.
pub fn select_columns(
    schema: &Schema,
    table: &str,
    select: &Select,
    relation: Option<&str>,
    placement: Placement,
) -> Result<SQL<Value>> {
    let owner = schema.get_table(table)?;

    if select.is_all() {
        return Ok(match (relation, placement) {
            (Some(rel), _) => SQL::join(
                owner
                    .columns()
                    .iter()
                    .map(|column| aliased_identifier(table, column.name(), rel)),
                ", ",
            ),
            (None, Placement::Select) => SQL::raw(format_compact!("\"{table}\".*")),
            (None, Placement::Returning) => SQL::raw("*"),
        });
    }

    let mut columns = Vec::with_capacity(select.names().len());
    for name in select.names() {
        schema.get_column(table, name)?;
        columns.push(match (relation, placement) {
            (Some(rel), _) => aliased_identifier(table, name, rel),
            (None, Placement::Select) => identifier(table, name),
            (None, Placement::Returning) => SQL::raw(format_compact!("\"{name}\"")),
        });
    }
    Ok(SQL::join(columns, ", "))
}
