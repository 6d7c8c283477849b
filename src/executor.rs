//! The execution boundary.
//!
//! An [`Executor`] flattens a fragment into a parameterized statement, runs
//! it, and returns the result rows. The compiler owns no connections,
//! performs no retries, and surfaces failures unchanged; pooling,
//! transactions, and timeouts all live behind this trait.

use quarry_core::{Result, SQL};

use crate::row::Row;
use crate::value::Value;

/// Executes one compiled statement and returns its rows.
///
/// Statements that return nothing (a DELETE without RETURNING) yield an
/// empty list.
pub trait Executor {
    fn rows(&self, statement: &SQL<Value>) -> Result<Vec<Row>>;
}

#[cfg(feature = "rusqlite")]
mod sqlite {
    use compact_str::CompactString;
    use quarry_core::quarry_trace_query;
    use rusqlite::types::{ToSqlOutput, ValueRef};
    use rusqlite::{Connection, params_from_iter};

    use super::*;

    impl rusqlite::ToSql for Value {
        fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
            Ok(match self {
                Value::Null => ToSqlOutput::Borrowed(ValueRef::Null),
                Value::Integer(i) => ToSqlOutput::Borrowed(ValueRef::Integer(*i)),
                Value::Real(r) => ToSqlOutput::Borrowed(ValueRef::Real(*r)),
                Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
                Value::Boolean(b) => {
                    ToSqlOutput::Owned(rusqlite::types::Value::Integer(*b as i64))
                }
                Value::Blob(b) => ToSqlOutput::Borrowed(ValueRef::Blob(b)),
            })
        }
    }

    impl From<ValueRef<'_>> for Value {
        fn from(value: ValueRef<'_>) -> Self {
            match value {
                ValueRef::Null => Value::Null,
                ValueRef::Integer(i) => Value::Integer(i),
                ValueRef::Real(r) => Value::Real(r),
                ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
                ValueRef::Blob(b) => Value::Blob(b.to_vec()),
            }
        }
    }

    impl Executor for Connection {
        fn rows(&self, statement: &SQL<Value>) -> Result<Vec<Row>> {
            let text = statement.sql();
            let params = statement.params();
            quarry_trace_query!(&text, params.len());

            let mut stmt = self.prepare(&text)?;
            let names: Vec<CompactString> = stmt
                .column_names()
                .into_iter()
                .map(CompactString::from)
                .collect();

            let mut rows = stmt.query(params_from_iter(params))?;
            let mut out = Vec::new();
            while let Some(row) = rows.next()? {
                let mut decoded = Row::new();
                for (i, name) in names.iter().enumerate() {
                    decoded.push(name.clone(), Value::from(row.get_ref(i)?));
                }
                out.push(decoded);
            }
            Ok(out)
        }
    }
}
