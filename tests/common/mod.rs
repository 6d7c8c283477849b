#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use quarry::{Column, Executor, Result, Row, SQL, Schema, Table, Value};

/// Blog-style fixture schema: posts carry a foreign key to users.
pub fn schema() -> Schema {
    Schema::new([
        Table::new(
            "users",
            [
                Column::new("id", "INTEGER").primary_key(),
                Column::new("email", "TEXT").not_null(),
                Column::new("name", "TEXT"),
                Column::new("active", "BOOLEAN").not_null().with_default(),
                Column::new("age", "INTEGER"),
            ],
        ),
        Table::new(
            "posts",
            [
                Column::new("id", "INTEGER").primary_key(),
                Column::new("title", "TEXT").not_null(),
                Column::new("content", "TEXT"),
                Column::new("published", "BOOLEAN").not_null().with_default(),
                Column::new("author", "INTEGER").references("users", "id"),
            ],
        ),
    ])
}

/// Scripted executor: records every statement it receives and replays
/// queued result sets in order (empty once the queue runs dry).
#[derive(Default)]
pub struct MockExecutor {
    statements: RefCell<Vec<(String, Vec<Value>)>>,
    results: RefCell<VecDeque<Vec<Row>>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(rows: Vec<Row>) -> Self {
        let mock = Self::new();
        mock.queue(rows);
        mock
    }

    pub fn queue(&self, rows: Vec<Row>) {
        self.results.borrow_mut().push_back(rows);
    }

    pub fn statements(&self) -> Vec<(String, Vec<Value>)> {
        self.statements.borrow().clone()
    }

    pub fn last_statement(&self) -> (String, Vec<Value>) {
        self.statements
            .borrow()
            .last()
            .cloned()
            .expect("no statement executed")
    }
}

impl Executor for MockExecutor {
    fn rows(&self, statement: &SQL<Value>) -> Result<Vec<Row>> {
        self.statements.borrow_mut().push((
            statement.sql(),
            statement.params().into_iter().cloned().collect(),
        ));
        Ok(self.results.borrow_mut().pop_front().unwrap_or_default())
    }
}

/// Builds a flat row from (name, value) pairs.
pub fn row<const N: usize>(fields: [(&str, Value); N]) -> Row {
    fields.into_iter().collect()
}
