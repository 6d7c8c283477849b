//! # Quarry
//!
//! A schema-aware relational query compiler. Given a declarative schema
//! (tables, columns, foreign-key references) and a declarative query
//! description (selected columns, filters, eager-loaded relations, sort
//! order), quarry compiles a parameterized SQL statement and reshapes the
//! returned flat rows into nested records mirroring the declared
//! relationships.
//!
//! Execution happens behind the [`Executor`] trait; a
//! [`rusqlite`](https://crates.io/crates/rusqlite) implementation ships
//! behind the `rusqlite` feature.
//!
//! ## Quick start
//!
//! ```
//! use quarry::{Column, Filter, Query, Quarry, Schema, Table};
//! # use quarry::{Executor, Result, Row, SQL, Value};
//! #
//! # struct NoRows;
//! # impl Executor for NoRows {
//! #     fn rows(&self, _statement: &SQL<Value>) -> Result<Vec<Row>> {
//! #         Ok(Vec::new())
//! #     }
//! # }
//!
//! # fn main() -> quarry::Result<()> {
//! let schema = Schema::new([
//!     Table::new("users", [
//!         Column::new("id", "INTEGER").primary_key(),
//!         Column::new("email", "TEXT").not_null(),
//!     ]),
//!     Table::new("posts", [
//!         Column::new("id", "INTEGER").primary_key(),
//!         Column::new("title", "TEXT").not_null(),
//!         Column::new("author", "INTEGER").references("users", "id"),
//!     ]),
//! ]);
//!
//! # let connection = NoRows;
//! let db = Quarry::new(connection, schema);
//! let posts = db.model("posts");
//!
//! let query = Query::new()
//!     .filter(Filter::new().contains("title", "rust"))
//!     .include(quarry::Include::new().all("author"));
//! let rows = posts.find_many(&query)?;
//! # assert!(rows.is_empty());
//! # Ok(())
//! # }
//! ```

mod compile;
mod executor;
mod model;
mod query;
mod row;
mod schema;
mod value;

pub use compile::{
    Placement, aliased_identifier, filter_sql, identifier, order_sql, resolve_includes,
    select_columns,
};
pub use executor::Executor;
pub use model::{Model, Quarry};
pub use query::{
    Filter, FilterValue, Include, IncludeSelection, Operator, Order, OrderTerm, Query, Select,
    Values,
};
pub use row::{Field, Row};
pub use schema::{Column, Reference, Schema, Table};
pub use value::{Value, ValueKind};

pub use quarry_core::{Join, OrderBy, QuarryError, Result, SQL, SQLChunk, SQLParam, ToSQL};
