use thiserror::Error;

/// Errors raised during schema lookup, query compilation, or execution.
#[derive(Debug, Error)]
pub enum QuarryError {
    /// The named table is not in the registry
    #[error("unknown table: {table}")]
    UnknownTable { table: String },

    /// The named column does not exist on the table
    #[error("unknown column: {table}.{column}")]
    UnknownColumn { table: String, column: String },

    /// A relationship was requested through a column that carries no foreign key
    #[error("column {table}.{column} is not a reference")]
    NotAReference { table: String, column: String },

    /// A nested description went below the one-level relation budget
    #[error("relation through {table}.{column} exceeds the supported nesting depth")]
    RelationDepth { table: String, column: String },

    /// Operator/value-kind pairing rejected by the legality table
    #[error("operator {op} is not valid for {kind} values")]
    InvalidOperator {
        op: &'static str,
        kind: &'static str,
    },

    /// create/update returned something other than exactly one row
    #[error("{operation} returned {rows} rows, expected exactly one")]
    UnexpectedRowCount {
        operation: &'static str,
        rows: usize,
    },

    /// A declarative schema description that could not be parsed
    #[error("invalid schema description: {0}")]
    Description(String),

    /// Opaque failure from the execution boundary, surfaced unchanged
    #[error("execution error: {0}")]
    Execution(String),

    /// Rusqlite driver errors
    #[cfg(feature = "rusqlite")]
    #[error("rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

/// Result type for compilation and execution operations
pub type Result<T> = std::result::Result<T, QuarryError>;
