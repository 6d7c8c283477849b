use quarry_core::{Join, Result, SQL, helpers};

use super::ident::identifier;
use super::select::{Placement, select_columns};
use crate::query::{Include, IncludeSelection, Select};
use crate::schema::Schema;
use crate::value::Value;

/// Resolves an include description into JOIN fragments and the aliased
/// select fragments for the joined columns.
///
/// Each requested key must carry a foreign key; `NotAReference` otherwise.
/// That is a caller contract violation, surfaced, never ignored. Both
/// returned lists preserve request order and are empty for an empty
/// description.
pub fn resolve_includes(
    schema: &Schema,
    table: &str,
    include: &Include,
) -> Result<(Vec<SQL<Value>>, Vec<SQL<Value>>)> {
    let mut joins = Vec::with_capacity(include.entries().len());
    let mut selects = Vec::with_capacity(include.entries().len());

    for (relation, selection) in include.entries() {
        let reference = schema.find_reference(table, relation)?;
        let referenced = schema.get_table(&reference.table)?;

        let on = identifier(table, relation)
            .append_raw(" = ")
            .append(identifier(referenced.name(), &reference.column));
        joins.push(helpers::join(Join::default(), referenced.name(), on));

        let columns = match selection {
            IncludeSelection::All => Select::all(),
            IncludeSelection::Columns(names) => Select::columns(names.iter().cloned()),
        };
        selects.push(select_columns(
            schema,
            referenced.name(),
            &columns,
            Some(relation.as_str()),
            Placement::Select,
        )?);
    }

    Ok((joins, selects))
}
