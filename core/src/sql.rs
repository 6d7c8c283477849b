use compact_str::{CompactString, ToCompactString, format_compact};
use smallvec::{SmallVec, smallvec};

use crate::traits::{SQLParam, ToSQL};

/// A SQL chunk represents a part of an SQL statement: literal text or a
/// bound parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum SQLChunk<V: SQLParam> {
    Text(CompactString),
    Param(V),
}

/// A SQL statement or fragment with parameters.
///
/// Statement text and bound values travel together as an ordered chunk
/// sequence, so placeholder positions and parameter order cannot drift
/// apart. [`SQL::sql`] renders the text with `?` placeholders;
/// [`SQL::params`] returns the values in placeholder order. An executor
/// hands both to the driver without re-parsing anything.
#[derive(Debug, Clone, PartialEq)]
pub struct SQL<V: SQLParam> {
    /// The chunks that make up this SQL statement or fragment.
    pub chunks: SmallVec<[SQLChunk<V>; 4]>,
}

impl<V: SQLParam> SQL<V> {
    /// Creates a new empty SQL fragment.
    pub const fn empty() -> Self {
        Self {
            chunks: SmallVec::new_const(),
        }
    }

    /// Creates a new SQL fragment from a raw string.
    ///
    /// The string is treated as literal SQL text, not a parameter.
    pub fn raw(text: impl AsRef<str>) -> Self {
        Self {
            chunks: smallvec![SQLChunk::Text(text.as_ref().to_compact_string())],
        }
    }

    /// Creates a new SQL fragment representing a single bound parameter.
    pub fn parameter(value: impl Into<V>) -> Self {
        Self {
            chunks: smallvec![SQLChunk::Param(value.into())],
        }
    }

    /// Creates a comma-separated list of parameter placeholders: "?, ?, ?"
    pub fn parameters<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<V>,
    {
        let mut chunks = SmallVec::new();
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                chunks.push(SQLChunk::Text(CompactString::const_new(", ")));
            }
            chunks.push(SQLChunk::Param(value.into()));
        }
        Self { chunks }
    }

    /// Creates a comma-separated list of column assignments:
    /// `"col1" = ?, "col2" = ?`
    pub fn assignments<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
    {
        let mut chunks = SmallVec::new();
        for (i, (column, value)) in pairs.into_iter().enumerate() {
            if i > 0 {
                chunks.push(SQLChunk::Text(CompactString::const_new(", ")));
            }
            chunks.push(SQLChunk::Text(format_compact!(
                "\"{}\" = ",
                column.as_ref()
            )));
            chunks.push(SQLChunk::Param(value));
        }
        Self { chunks }
    }

    /// Returns true when the fragment contains no renderable chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks
            .iter()
            .all(|chunk| matches!(chunk, SQLChunk::Text(t) if t.is_empty()))
    }

    /// Appends a raw string to this SQL fragment.
    pub fn append_raw(mut self, text: impl AsRef<str>) -> Self {
        self.chunks
            .push(SQLChunk::Text(text.as_ref().to_compact_string()));
        self
    }

    /// Appends another SQL fragment to this one.
    ///
    /// Both the SQL text and parameters are merged.
    pub fn append(mut self, other: impl Into<SQL<V>>) -> Self {
        self.chunks.extend(other.into().chunks);
        self
    }

    /// Joins multiple SQL fragments with a separator.
    ///
    /// The separator is inserted between each fragment, but not before the
    /// first or after the last.
    pub fn join<T>(sqls: T, separator: &str) -> SQL<V>
    where
        T: IntoIterator,
        T::Item: ToSQL<V>,
    {
        let sqls: Vec<SQL<V>> = sqls.into_iter().map(|sql| sql.to_sql()).collect();

        if sqls.is_empty() {
            return SQL::empty();
        }
        if sqls.len() == 1 {
            return sqls.into_iter().next().unwrap();
        }

        let total_chunks =
            sqls.iter().map(|sql| sql.chunks.len()).sum::<usize>() + (sqls.len() - 1);
        let mut chunks = SmallVec::with_capacity(total_chunks);
        let separator_chunk = SQLChunk::Text(separator.to_compact_string());

        for (i, sql) in sqls.into_iter().enumerate() {
            if i > 0 {
                chunks.push(separator_chunk.clone());
            }
            chunks.extend(sql.chunks);
        }

        SQL { chunks }
    }

    /// Returns the SQL string represented by this fragment, using `?`
    /// placeholders for parameters.
    ///
    /// A space is inserted between adjacent chunks when both sides end and
    /// begin a word, so keyword fragments can be appended without tracking
    /// whitespace at every call site.
    pub fn sql(&self) -> String {
        let chunks: SmallVec<[&SQLChunk<V>; 8]> = self
            .chunks
            .iter()
            .filter(|chunk| !matches!(chunk, SQLChunk::Text(t) if t.is_empty()))
            .collect();

        let mut buf = CompactString::with_capacity(self.estimate_capacity());
        for (i, chunk) in chunks.iter().enumerate() {
            match chunk {
                SQLChunk::Text(text) => buf.push_str(text),
                SQLChunk::Param(_) => buf.push('?'),
            }
            if let Some(next) = chunks.get(i + 1) {
                if chunk_ends_word(chunk) && chunk_starts_word(next) {
                    buf.push(' ');
                }
            }
        }
        buf.into()
    }

    /// Returns references to parameter values in placeholder order.
    pub fn params(&self) -> Vec<&V> {
        self.chunks
            .iter()
            .filter_map(|chunk| match chunk {
                SQLChunk::Param(value) => Some(value),
                SQLChunk::Text(_) => None,
            })
            .collect()
    }

    fn estimate_capacity(&self) -> usize {
        let content: usize = self
            .chunks
            .iter()
            .map(|chunk| match chunk {
                SQLChunk::Text(t) => t.len(),
                SQLChunk::Param(_) => 1,
            })
            .sum();
        content + self.chunks.len()
    }
}

/// Whether a chunk ends with a word character, for spacing decisions.
fn chunk_ends_word<V: SQLParam>(chunk: &SQLChunk<V>) -> bool {
    match chunk {
        SQLChunk::Text(t) => match t.chars().last() {
            Some(last) => !last.is_whitespace() && !['(', ',', '.'].contains(&last),
            None => false,
        },
        SQLChunk::Param(_) => true,
    }
}

/// Whether a chunk starts with a word character, for spacing decisions.
fn chunk_starts_word<V: SQLParam>(chunk: &SQLChunk<V>) -> bool {
    match chunk {
        SQLChunk::Text(t) => match t.chars().next() {
            Some(first) => !first.is_whitespace() && !['(', ',', ')', ';'].contains(&first),
            None => false,
        },
        SQLChunk::Param(_) => true,
    }
}

impl<V: SQLParam> Default for SQL<V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<V: SQLParam> From<&str> for SQL<V> {
    fn from(s: &str) -> Self {
        SQL::raw(s)
    }
}

impl<V: SQLParam> core::fmt::Display for SQL<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, r#"sql: "{}", params: {:?}"#, self.sql(), self.params())
    }
}
