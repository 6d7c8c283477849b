use quarry_core::{OrderBy, QuarryError, Result, SQL, ToSQL};

use super::RELATION_BUDGET;
use super::ident::identifier;
use crate::query::{Order, OrderTerm};
use crate::schema::Schema;
use crate::value::Value;

/// Compiles an order description into an ORDER BY clause.
///
/// Terms are grouped by direction: the ascending list first with an `ASC`
/// suffix, then the descending list with `DESC`. A relation term recurses
/// one level into the referenced table and merges the nested groups into
/// the parent's. An empty description compiles to an empty fragment.
pub fn order_sql(schema: &Schema, table: &str, order: &Order) -> Result<SQL<Value>> {
    let mut asc = Vec::new();
    let mut desc = Vec::new();
    collect(schema, table, order, RELATION_BUDGET, &mut asc, &mut desc)?;

    if asc.is_empty() && desc.is_empty() {
        return Ok(SQL::empty());
    }

    let mut sql = SQL::raw("ORDER BY");
    if !asc.is_empty() {
        sql = sql
            .append(SQL::join(asc, ", "))
            .append(OrderBy::Asc.to_sql());
        if !desc.is_empty() {
            sql = sql
                .append_raw(", ")
                .append(SQL::join(desc, ", "))
                .append(OrderBy::Desc.to_sql());
        }
    } else {
        sql = sql
            .append(SQL::join(desc, ", "))
            .append(OrderBy::Desc.to_sql());
    }
    Ok(sql)
}

/// Partitions terms into the ascending and descending groups, in encounter
/// order. Duplicates arising from different nesting paths are kept.
fn collect(
    schema: &Schema,
    table: &str,
    order: &Order,
    budget: u8,
    asc: &mut Vec<SQL<Value>>,
    desc: &mut Vec<SQL<Value>>,
) -> Result<()> {
    for (column, term) in order.entries() {
        match term {
            OrderTerm::Direction(direction) => {
                schema.get_column(table, column)?;
                let ident = identifier(table, column);
                match direction {
                    OrderBy::Asc => asc.push(ident),
                    OrderBy::Desc => desc.push(ident),
                }
            }
            OrderTerm::Relation(nested) => {
                if budget == 0 {
                    return Err(QuarryError::RelationDepth {
                        table: table.to_owned(),
                        column: column.to_string(),
                    });
                }
                let reference = schema.find_reference(table, column)?;
                collect(schema, &reference.table, nested, budget - 1, asc, desc)?;
            }
        }
    }
    Ok(())
}
