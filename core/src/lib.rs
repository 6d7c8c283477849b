//! Core SQL plumbing for the quarry query compiler.
//!
//! This crate knows nothing about schemas or query descriptions. It provides
//! the fragment tree ([`SQL`]) that keeps statement text and bound parameters
//! together, the clause helpers that assemble fragments into statements, and
//! the shared error taxonomy.

pub mod error;
pub mod helpers;
pub mod join;
pub mod order;
pub mod sql;
pub mod traits;
mod tracing;

pub use error::{QuarryError, Result};
pub use join::Join;
pub use order::OrderBy;
pub use sql::{SQL, SQLChunk};
pub use traits::{SQLParam, ToSQL};
