//! Clause helpers that assemble fragments into statements.
//!
//! Each helper returns a [`SQL`] fragment; the facade concatenates them.
//! Table names are quoted here, column identifiers arrive pre-compiled.

use compact_str::{CompactString, format_compact};

use crate::{Join, SQL, SQLParam, ToSQL};

/// Creates a SELECT statement with the given column fragments
pub fn select<V, T>(columns: T) -> SQL<V>
where
    V: SQLParam,
    T: IntoIterator,
    T::Item: ToSQL<V>,
{
    SQL::raw("SELECT").append(SQL::join(columns, ", "))
}

/// Creates a FROM clause
pub fn from<V: SQLParam>(table: &str) -> SQL<V> {
    SQL::raw(format_compact!("FROM \"{table}\""))
}

/// Creates a WHERE clause around a compiled condition
pub fn where_clause<V: SQLParam>(condition: SQL<V>) -> SQL<V> {
    SQL::raw("WHERE").append(condition)
}

/// Creates a JOIN clause: `JOIN "table" ON <condition>`
pub fn join<V: SQLParam>(kind: Join, table: &str, on: SQL<V>) -> SQL<V> {
    kind.to_sql()
        .append(SQL::raw(format_compact!("\"{table}\"")))
        .append_raw("ON")
        .append(on)
}

/// Creates a LIMIT clause
pub fn limit<V: SQLParam>(value: u32) -> SQL<V> {
    SQL::raw(format_compact!("LIMIT {value}"))
}

/// Creates an OFFSET clause
pub fn offset<V: SQLParam>(value: u32) -> SQL<V> {
    SQL::raw(format_compact!("OFFSET {value}"))
}

/// Creates the head of an INSERT statement: `INSERT INTO "t" ("a", "b")`
pub fn insert_into<V, I, S>(table: &str, columns: I) -> SQL<V>
where
    V: SQLParam,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut list = CompactString::const_new("");
    for (i, column) in columns.into_iter().enumerate() {
        if i > 0 {
            list.push_str(", ");
        }
        list.push('"');
        list.push_str(column.as_ref());
        list.push('"');
    }
    SQL::raw(format_compact!("INSERT INTO \"{table}\" ({list})"))
}

/// Creates a VALUES clause around a parameter list
pub fn values<V: SQLParam>(list: SQL<V>) -> SQL<V> {
    SQL::raw("VALUES (").append(list).append_raw(")")
}

/// Creates the head of an UPDATE statement
pub fn update<V: SQLParam>(table: &str) -> SQL<V> {
    SQL::raw(format_compact!("UPDATE \"{table}\""))
}

/// Creates a SET clause around compiled assignments
pub fn set<V: SQLParam>(assignments: SQL<V>) -> SQL<V> {
    SQL::raw("SET").append(assignments)
}

/// Creates the head of a DELETE statement
pub fn delete_from<V: SQLParam>(table: &str) -> SQL<V> {
    SQL::raw(format_compact!("DELETE FROM \"{table}\""))
}

/// Creates a RETURNING clause with the given column fragments
pub fn returning<V, T>(columns: T) -> SQL<V>
where
    V: SQLParam,
    T: IntoIterator,
    T::Item: ToSQL<V>,
{
    SQL::raw("RETURNING").append(SQL::join(columns, ", "))
}
