//! The query facade.
//!
//! [`Quarry`] owns an executor and the injected schema registry; [`Model`]
//! binds a table name and exposes the five operations. Each operation is a
//! single-shot compile-and-execute sequence: fragments, joins, and reshaped
//! rows are all local to the call, so concurrent calls share nothing but
//! the read-only registry.

use compact_str::{CompactString, format_compact};
use quarry_core::{QuarryError, Result, SQL, helpers};

use crate::compile::{Placement, filter_sql, order_sql, resolve_includes, select_columns};
use crate::executor::Executor;
use crate::query::{Filter, Query, Select, Values};
use crate::row::Row;
use crate::schema::Schema;

/// Database handle: an executor plus the schema registry it compiles
/// against.
#[derive(Debug)]
pub struct Quarry<E> {
    executor: E,
    schema: Schema,
}

impl<E: Executor> Quarry<E> {
    /// Creates a handle from an executor and a registry.
    ///
    /// The registry is injected here, never ambient, so tests can build an
    /// isolated one per case.
    pub fn new(executor: E, schema: Schema) -> Self {
        Self { executor, schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Binds a table name. Existence is checked per operation against the
    /// registry, which stays the single source of truth.
    pub fn model(&self, table: impl Into<CompactString>) -> Model<'_, E> {
        Model {
            db: self,
            table: table.into(),
        }
    }
}

/// Query operations scoped to one table.
#[derive(Debug)]
pub struct Model<'a, E> {
    db: &'a Quarry<E>,
    table: CompactString,
}

impl<E: Executor> Model<'_, E> {
    /// Returns the first matching row, or `None` when nothing matches.
    ///
    /// Delegates to [`Model::find_many`] with a row limit of one; an empty
    /// result is a defined outcome, not an error.
    pub fn find(&self, query: &Query) -> Result<Option<Row>> {
        let mut query = query.clone();
        query.limit = Some(1);
        Ok(self.find_many(&query)?.into_iter().next())
    }

    /// Returns every matching row, reshaped.
    pub fn find_many(&self, query: &Query) -> Result<Vec<Row>> {
        let schema = self.db.schema();
        let table = self.table.as_str();

        let (joins, extra_selects) = resolve_includes(schema, table, &query.include)?;

        let mut columns =
            vec![select_columns(schema, table, &query.select, None, Placement::Select)?];
        columns.extend(extra_selects);

        let mut sql = helpers::select(columns).append(helpers::from(table));
        for join in joins {
            sql = sql.append(join);
        }
        if !query.filter.is_empty() {
            sql = sql.append(helpers::where_clause(filter_sql(
                schema,
                table,
                &query.filter,
            )?));
        }
        if !query.order.is_empty() {
            sql = sql.append(order_sql(schema, table, &query.order)?);
        }
        if let Some(limit) = query.limit {
            sql = sql.append(helpers::limit(limit));
        }
        if let Some(offset) = query.offset {
            sql = sql.append(helpers::offset(offset));
        }

        let rows = self.db.executor.rows(&sql)?;
        Ok(rows.into_iter().map(Row::reshape).collect())
    }

    /// Inserts one row and returns it through a RETURNING clause.
    pub fn create(&self, data: &Values, select: &Select) -> Result<Row> {
        let schema = self.db.schema();
        let table = self.table.as_str();

        for (column, _) in data.entries() {
            schema.get_column(table, column)?;
        }

        let head = if data.is_empty() {
            SQL::raw(format_compact!("INSERT INTO \"{table}\" DEFAULT VALUES"))
        } else {
            helpers::insert_into(table, data.entries().iter().map(|(name, _)| name.as_str()))
                .append(helpers::values(SQL::parameters(
                    data.entries().iter().map(|(_, value)| value.clone()),
                )))
        };
        let sql = head.append(helpers::returning([select_columns(
            schema,
            table,
            select,
            None,
            Placement::Returning,
        )?]));

        exactly_one("create", self.db.executor.rows(&sql)?)
    }

    /// Updates the matching row and returns it through a RETURNING clause.
    pub fn update(&self, data: &Values, filter: &Filter, select: &Select) -> Result<Row> {
        let schema = self.db.schema();
        let table = self.table.as_str();

        for (column, _) in data.entries() {
            schema.get_column(table, column)?;
        }

        let mut sql = helpers::update(table).append(helpers::set(SQL::assignments(
            data.entries()
                .iter()
                .map(|(name, value)| (name.as_str(), value.clone())),
        )));
        if !filter.is_empty() {
            sql = sql.append(helpers::where_clause(filter_sql(schema, table, filter)?));
        }
        sql = sql.append(helpers::returning([select_columns(
            schema,
            table,
            select,
            None,
            Placement::Returning,
        )?]));

        exactly_one("update", self.db.executor.rows(&sql)?)
    }

    /// Deletes the matching rows and returns the raw execution result,
    /// with no reshaping and no row-count assertion.
    pub fn delete(&self, filter: &Filter) -> Result<Vec<Row>> {
        let schema = self.db.schema();
        let table = self.table.as_str();

        schema.get_table(table)?;
        let mut sql = helpers::delete_from(table);
        if !filter.is_empty() {
            sql = sql.append(helpers::where_clause(filter_sql(schema, table, filter)?));
        }
        self.db.executor.rows(&sql)
    }
}

/// Create/update contract: exactly one returned row.
fn exactly_one(operation: &'static str, mut rows: Vec<Row>) -> Result<Row> {
    match rows.len() {
        1 => Ok(rows.swap_remove(0)),
        rows => Err(QuarryError::UnexpectedRowCount { operation, rows }),
    }
}
