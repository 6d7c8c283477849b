use compact_str::CompactString;

/// A column allow-list.
///
/// Empty means "all columns of the owning table", never "no columns".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Select {
    columns: Vec<CompactString>,
}

impl Select {
    /// Selects every column of the owning table.
    pub fn all() -> Self {
        Self::default()
    }

    /// Selects only the named columns.
    pub fn columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.columns.is_empty()
    }

    pub(crate) fn names(&self) -> &[CompactString] {
        &self.columns
    }
}

impl<S: Into<CompactString>> FromIterator<S> for Select {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::columns(iter)
    }
}
