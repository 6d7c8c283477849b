use crate::{SQL, SQLParam, ToSQL};

/// Sort direction for ORDER BY clauses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderBy {
    Asc,
    Desc,
}

impl OrderBy {
    pub const fn keyword(&self) -> &'static str {
        match self {
            OrderBy::Asc => "ASC",
            OrderBy::Desc => "DESC",
        }
    }
}

impl<V: SQLParam> ToSQL<V> for OrderBy {
    fn to_sql(&self) -> SQL<V> {
        SQL::raw(self.keyword())
    }
}
