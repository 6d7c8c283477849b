use compact_str::format_compact;
use quarry_core::SQL;

use crate::row::relation_alias;
use crate::value::Value;

/// Compiles a fully qualified identifier: `"table"."column"`
pub fn identifier(table: &str, column: &str) -> SQL<Value> {
    SQL::raw(format_compact!("\"{table}\".\"{column}\""))
}

/// Compiles a qualified identifier aliased for an included relation:
/// `"table"."column" AS "__relation__column"`.
///
/// The alias attributes the value to the relation it came through, keeping
/// it distinct from an owner-table column of the same name.
pub fn aliased_identifier(table: &str, column: &str, relation: &str) -> SQL<Value> {
    let alias = relation_alias(relation, column);
    SQL::raw(format_compact!("\"{table}\".\"{column}\" AS \"{alias}\""))
}
