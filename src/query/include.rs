use compact_str::CompactString;

/// What to pull in for one included relation.
#[derive(Debug, Clone, PartialEq)]
pub enum IncludeSelection {
    /// Every column of the referenced table
    All,
    /// Only the named columns of the referenced table
    Columns(Vec<CompactString>),
}

/// An ordered set of relations to eager-load through their foreign keys.
///
/// An empty include compiles to nothing: no joins, no extra selects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Include {
    entries: Vec<(CompactString, IncludeSelection)>,
}

impl Include {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[(CompactString, IncludeSelection)] {
        &self.entries
    }

    /// Includes every column of the table referenced through `relation`.
    pub fn all(mut self, relation: impl Into<CompactString>) -> Self {
        self.entries.push((relation.into(), IncludeSelection::All));
        self
    }

    /// Includes only the named columns of the referenced table.
    pub fn columns<I, S>(mut self, relation: impl Into<CompactString>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        self.entries.push((
            relation.into(),
            IncludeSelection::Columns(columns.into_iter().map(Into::into).collect()),
        ));
        self
    }
}
