//! The schema registry: tables, columns, and foreign-key references.
//!
//! The registry is the single source of truth for whether a name denotes a
//! plain column or a relationship. Compilers re-derive that through the
//! lookup operations here; no "is relation" flag ever travels with a query
//! description. Constructed once, read-only during query compilation.

use std::collections::BTreeMap;

use compact_str::CompactString;
use hashbrown::HashMap;
use quarry_core::{QuarryError, Result};
use serde::Deserialize;

/// A foreign-key target: the referenced table and column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    pub table: String,
    pub column: String,
}

/// A column definition: opaque SQL type, modifier flags, and an optional
/// foreign-key reference. A column with a reference is what makes a filter,
/// include, or order key a relationship.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: CompactString,
    sql_type: CompactString,
    primary_key: bool,
    not_null: bool,
    has_default: bool,
    reference: Option<Reference>,
}

impl Column {
    pub fn new(name: impl Into<CompactString>, sql_type: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            sql_type: sql_type.into(),
            primary_key: false,
            not_null: false,
            has_default: false,
            reference: None,
        }
    }

    /// Marks this column as part of the primary key
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Marks this column NOT NULL
    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    /// Marks this column as carrying a database-side default
    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    /// Declares this column a foreign key to `table.column`
    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Self {
        self.reference = Some(Reference {
            table: table.into(),
            column: column.into(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn is_not_null(&self) -> bool {
        self.not_null
    }

    pub fn has_default(&self) -> bool {
        self.has_default
    }

    pub fn reference(&self) -> Option<&Reference> {
        self.reference.as_ref()
    }
}

/// A table definition: named, with insertion-ordered columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: CompactString,
    columns: Vec<Column>,
    index: HashMap<CompactString, usize>,
}

impl Table {
    pub fn new(name: impl Into<CompactString>, columns: impl IntoIterator<Item = Column>) -> Self {
        let mut table = Self {
            name: name.into(),
            columns: Vec::new(),
            index: HashMap::new(),
        };
        for column in columns {
            match table.index.get(&column.name) {
                Some(&slot) => table.columns[slot] = column,
                None => {
                    table.index.insert(column.name.clone(), table.columns.len());
                    table.columns.push(column);
                }
            }
        }
        table
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All columns, in declaration order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.index.get(name).map(|&slot| &self.columns[slot])
    }
}

/// The registry: every known table, keyed by name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    tables: Vec<Table>,
    index: HashMap<CompactString, usize>,
}

/// Serde shape of one column in the declarative description format.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColumnDescription {
    #[serde(rename = "type")]
    sql_type: String,
    #[serde(default)]
    primary_key: bool,
    #[serde(default)]
    not_null: bool,
    #[serde(default)]
    has_default: bool,
    #[serde(default)]
    reference: Option<Reference>,
}

impl Schema {
    pub fn new(tables: impl IntoIterator<Item = Table>) -> Self {
        let mut schema = Self::default();
        for table in tables {
            match schema.index.get(&table.name) {
                Some(&slot) => schema.tables[slot] = table,
                None => {
                    schema.index.insert(table.name.clone(), schema.tables.len());
                    schema.tables.push(table);
                }
            }
        }
        schema
    }

    /// Builds a registry from the declarative JSON description format:
    /// table name -> column name -> `{ type, primaryKey, notNull,
    /// hasDefault, reference: { table, column } }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let description: BTreeMap<String, BTreeMap<String, ColumnDescription>> =
            serde_json::from_str(json).map_err(|e| QuarryError::Description(e.to_string()))?;

        Ok(Self::new(description.into_iter().map(|(name, columns)| {
            Table::new(
                name,
                columns.into_iter().map(|(column_name, d)| Column {
                    name: column_name.into(),
                    sql_type: d.sql_type.into(),
                    primary_key: d.primary_key,
                    not_null: d.not_null,
                    has_default: d.has_default,
                    reference: d.reference,
                }),
            )
        })))
    }

    /// All tables, in registration order. Together with
    /// [`Table::columns`], this enumeration is the whole interface a
    /// client-code emitter needs.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn get_table(&self, name: &str) -> Result<&Table> {
        self.index
            .get(name)
            .map(|&slot| &self.tables[slot])
            .ok_or_else(|| QuarryError::UnknownTable {
                table: name.to_owned(),
            })
    }

    pub fn get_column(&self, table: &str, column: &str) -> Result<&Column> {
        self.get_table(table)?
            .column(column)
            .ok_or_else(|| QuarryError::UnknownColumn {
                table: table.to_owned(),
                column: column.to_owned(),
            })
    }

    /// Looks up the foreign key carried by `table.column`.
    ///
    /// Fails with `NotAReference` when the column exists but is a plain
    /// scalar: the caller asked for a relationship that is not declared.
    pub fn find_reference(&self, table: &str, column: &str) -> Result<&Reference> {
        self.get_column(table, column)?
            .reference()
            .ok_or_else(|| QuarryError::NotAReference {
                table: table.to_owned(),
                column: column.to_owned(),
            })
    }
}
