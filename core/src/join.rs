//! Join types for SQL JOIN clauses.

use crate::{SQL, SQLParam, ToSQL};

/// The type of JOIN operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Join {
    #[default]
    Join,
    Inner,
    Left,
    Cross,
}

impl Join {
    pub const fn keyword(&self) -> &'static str {
        match self {
            Join::Join => "JOIN",
            Join::Inner => "INNER JOIN",
            Join::Left => "LEFT JOIN",
            Join::Cross => "CROSS JOIN",
        }
    }
}

impl<V: SQLParam> ToSQL<V> for Join {
    fn to_sql(&self) -> SQL<V> {
        SQL::raw(self.keyword())
    }
}
