//! The compilation pipeline.
//!
//! Five stages turn a query description into fragments the facade
//! concatenates: identifier compilation, predicate compilation (WHERE),
//! relation resolution (JOIN + aliased selects), order compilation
//! (ORDER BY), and column-list compilation (SELECT/RETURNING). Every stage
//! consults the schema registry to decide whether a key names a scalar
//! column or a relationship; none of them carries its own flag for that.

mod ident;
mod order;
mod predicate;
mod relation;
mod select;

pub use ident::{aliased_identifier, identifier};
pub use order::order_sql;
pub use predicate::filter_sql;
pub use relation::resolve_includes;
pub use select::{Placement, select_columns};

/// Relationship recursion budget: descriptions may nest one level below the
/// root. Threaded explicitly so termination stays obvious.
pub(crate) const RELATION_BUDGET: u8 = 1;
