use quarry_core::{QuarryError, Result, SQL};

use super::RELATION_BUDGET;
use super::ident::identifier;
use crate::query::{Filter, FilterValue, Operator};
use crate::schema::Schema;
use crate::value::Value;

/// Compiles a filter description into a boolean expression.
///
/// The result carries no `WHERE` keyword. That is the facade's clause
/// helper, applied once at the outermost level, so nesting through a
/// relation can never duplicate it. An empty filter compiles to an empty
/// fragment.
pub fn filter_sql(schema: &Schema, table: &str, filter: &Filter) -> Result<SQL<Value>> {
    filter_sql_at(schema, table, filter, RELATION_BUDGET)
}

fn filter_sql_at(schema: &Schema, table: &str, filter: &Filter, budget: u8) -> Result<SQL<Value>> {
    let mut clauses = Vec::with_capacity(filter.entries().len());

    for (column, value) in filter.entries() {
        match value {
            FilterValue::Scalar(scalar) => {
                schema.get_column(table, column)?;
                clauses.push(
                    identifier(table, column)
                        .append_raw(" = ")
                        .append(SQL::parameter(scalar.clone())),
                );
            }
            FilterValue::Null => {
                schema.get_column(table, column)?;
                clauses.push(identifier(table, column).append_raw(" IS NULL"));
            }
            FilterValue::Operator { op, value } => {
                schema.get_column(table, column)?;
                clauses.push(operator_clause(table, column, *op, value)?);
            }
            FilterValue::Relation(nested) => {
                if budget == 0 {
                    return Err(QuarryError::RelationDepth {
                        table: table.to_owned(),
                        column: column.to_string(),
                    });
                }
                let reference = schema.find_reference(table, column)?;
                let nested_sql = filter_sql_at(schema, &reference.table, nested, budget - 1)?;
                if !nested_sql.is_empty() {
                    clauses.push(nested_sql);
                }
            }
        }
    }

    Ok(SQL::join(clauses, " AND "))
}

/// Compiles one operator constraint against a qualified identifier.
///
/// Legality is re-checked here because `FilterValue::Operator` can be
/// constructed directly, bypassing [`FilterValue::operator`].
fn operator_clause(table: &str, column: &str, op: Operator, value: &Value) -> Result<SQL<Value>> {
    if !op.legal_for(value.kind()) {
        return Err(QuarryError::InvalidOperator {
            op: op.name(),
            kind: value.kind().name(),
        });
    }

    let ident = identifier(table, column);
    let clause = match (op, value) {
        (Operator::Eq, Value::Null) => ident.append_raw(" IS NULL"),
        (Operator::Neq, Value::Null) => ident.append_raw(" IS NOT NULL"),
        (Operator::Contains, Value::Text(text)) => like(ident, format!("%{text}%")),
        (Operator::StartsWith, Value::Text(text)) => like(ident, format!("{text}%")),
        (Operator::EndsWith, Value::Text(text)) => like(ident, format!("%{text}")),
        (op, value) => ident
            .append_raw(" ")
            .append_raw(op.symbol())
            .append_raw(" ")
            .append(SQL::parameter(value.clone())),
    };
    Ok(clause)
}

fn like(ident: SQL<Value>, pattern: String) -> SQL<Value> {
    ident
        .append_raw(" LIKE ")
        .append(SQL::parameter(Value::Text(pattern)))
}
