use crate::sql::SQL;

/// A marker trait for types that can be bound as SQL parameters.
///
/// Used as the bound on the value type carried by [`SQL`] fragments.
pub trait SQLParam: Clone + core::fmt::Debug {}

/// Conversion into a SQL fragment.
///
/// The seam between clause helpers and whatever produces fragments: columns,
/// conditions, already-built fragments.
pub trait ToSQL<V: SQLParam> {
    fn to_sql(&self) -> SQL<V>;
}

impl<V: SQLParam> ToSQL<V> for SQL<V> {
    fn to_sql(&self) -> SQL<V> {
        self.clone()
    }
}

impl<V: SQLParam, T: ToSQL<V>> ToSQL<V> for &T {
    fn to_sql(&self) -> SQL<V> {
        (*self).to_sql()
    }
}
