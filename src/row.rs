//! Result rows and the reshaper that nests included relations.
//!
//! The executor hands back flat rows. Columns pulled in through an included
//! relation are aliased `__<relation>__<column>` so they cannot collide with
//! the owner table's own columns; [`Row::reshape`] folds them back into a
//! nested row under the relation key. The `__` delimiter is reserved:
//! column and relation names must not contain it.

use compact_str::{CompactString, format_compact};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::value::Value;

/// One field of a row: a scalar, or a nested row produced by reshaping.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Value(Value),
    Row(Row),
}

impl Field {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Field::Value(v) => Some(v),
            Field::Row(_) => None,
        }
    }

    pub fn as_row(&self) -> Option<&Row> {
        match self {
            Field::Row(r) => Some(r),
            Field::Value(_) => None,
        }
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        Field::Value(value)
    }
}

impl From<Row> for Field {
    fn from(row: Row) -> Self {
        Field::Row(row)
    }
}

macro_rules! field_from_scalar {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Field {
            fn from(value: $ty) -> Self {
                Field::Value(Value::from(value))
            }
        })*
    };
}

field_from_scalar!(i64, i32, f64, bool, &str, String);

/// An ordered mapping from column name to field.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    entries: Vec<(CompactString, Field)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field. An existing entry under the same name is replaced
    /// in place, keeping its position.
    pub fn push(&mut self, name: impl Into<CompactString>, field: impl Into<Field>) {
        let name = name.into();
        let field = field.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = field,
            None => self.entries.push((name, field)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, field)| field)
    }

    /// Scalar accessor; `None` for missing keys and nested rows.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.get(name).and_then(Field::as_value)
    }

    /// Nested-row accessor; `None` for missing keys and scalars.
    pub fn row(&self, name: &str) -> Option<&Row> {
        self.get(name).and_then(Field::as_row)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fields in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.entries.iter().map(|(n, f)| (n.as_str(), f))
    }

    /// Folds alias-marked columns back under their relation key.
    ///
    /// Every `__<relation>__<column>` key is removed and `column` is merged
    /// into the nested row under `relation`, created at first encounter. A
    /// scalar already sitting under the relation key (the raw foreign-key
    /// column) is replaced by the nested row. Plain keys pass through
    /// unchanged, so reshaping an already-reshaped row is the identity.
    pub fn reshape(self) -> Row {
        let mut out = Row::new();
        for (key, field) in self.entries {
            match split_relation_alias(&key) {
                Some((relation, column)) => {
                    let relation = CompactString::from(relation);
                    let column = CompactString::from(column);
                    out.merge_nested(relation, column, field);
                }
                None => out.entries.push((key, field)),
            }
        }
        out
    }

    fn merge_nested(&mut self, relation: CompactString, column: CompactString, field: Field) {
        for (name, existing) in &mut self.entries {
            if *name == relation {
                match existing {
                    Field::Row(nested) => nested.entries.push((column, field)),
                    Field::Value(_) => {
                        let mut nested = Row::new();
                        nested.entries.push((column, field));
                        *existing = Field::Row(nested);
                    }
                }
                return;
            }
        }
        let mut nested = Row::new();
        nested.entries.push((column, field));
        self.entries.push((relation, Field::Row(nested)));
    }
}

impl<N: Into<CompactString>, F: Into<Field>> FromIterator<(N, F)> for Row {
    fn from_iter<I: IntoIterator<Item = (N, F)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (name, field) in iter {
            row.push(name, field);
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, field) in &self.entries {
            match field {
                Field::Value(value) => map.serialize_entry(name.as_str(), value)?,
                Field::Row(row) => map.serialize_entry(name.as_str(), row)?,
            }
        }
        map.end()
    }
}

/// Builds the reserved alias for a relation column: `__<relation>__<column>`
pub(crate) fn relation_alias(relation: &str, column: &str) -> CompactString {
    format_compact!("__{relation}__{column}")
}

/// Splits an alias-marked key into (relation, column); `None` for plain keys
pub(crate) fn split_relation_alias(key: &str) -> Option<(&str, &str)> {
    let rest = key.strip_prefix("__")?;
    let split = rest.find("__")?;
    Some((&rest[..split], &rest[split + 2..]))
}
