use compact_str::CompactString;
use quarry_core::OrderBy;

/// One sort term: a direction for an own column, or an order description
/// nested through a foreign key.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderTerm {
    Direction(OrderBy),
    Relation(Order),
}

/// An ordered sort description.
///
/// Terms keep insertion order; the compiler groups them into ascending and
/// descending lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Order {
    entries: Vec<(CompactString, OrderTerm)>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[(CompactString, OrderTerm)] {
        &self.entries
    }

    pub fn asc(mut self, column: impl Into<CompactString>) -> Self {
        self.entries
            .push((column.into(), OrderTerm::Direction(OrderBy::Asc)));
        self
    }

    pub fn desc(mut self, column: impl Into<CompactString>) -> Self {
        self.entries
            .push((column.into(), OrderTerm::Direction(OrderBy::Desc)));
        self
    }

    /// Sorts by columns of the table referenced through `column`.
    pub fn relation(mut self, column: impl Into<CompactString>, order: Order) -> Self {
        self.entries.push((column.into(), OrderTerm::Relation(order)));
        self
    }
}
