use compact_str::CompactString;
use quarry_core::{QuarryError, Result};

use crate::value::{Value, ValueKind};

/// Comparison operators available in filter descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Neq,
    Contains,
    StartsWith,
    EndsWith,
    Gt,
    Lt,
    Gte,
    Lte,
}

impl Operator {
    pub const fn name(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Neq => "neq",
            Operator::Contains => "contains",
            Operator::StartsWith => "starts_with",
            Operator::EndsWith => "ends_with",
            Operator::Gt => "gt",
            Operator::Lt => "lt",
            Operator::Gte => "gte",
            Operator::Lte => "lte",
        }
    }

    /// The SQL comparison symbol. The LIKE family shares one keyword; the
    /// pattern shape distinguishes its members.
    pub(crate) const fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Neq => "!=",
            Operator::Contains | Operator::StartsWith | Operator::EndsWith => "LIKE",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
        }
    }

    /// Per-kind legality: equality works everywhere, the LIKE family is
    /// text-only, comparisons are numeric-only.
    pub fn legal_for(&self, kind: ValueKind) -> bool {
        match self {
            Operator::Eq | Operator::Neq => true,
            Operator::Contains | Operator::StartsWith | Operator::EndsWith => {
                matches!(kind, ValueKind::Text)
            }
            Operator::Gt | Operator::Lt | Operator::Gte | Operator::Lte => {
                matches!(kind, ValueKind::Integer | ValueKind::Real)
            }
        }
    }
}

/// One constraint on a column: scalar shorthand for equality, a null test,
/// a single operator, or a filter nested through a foreign key.
///
/// Exactly one operator fits per constraint; conjunction happens across
/// [`Filter`] entries, not inside one.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Scalar(Value),
    Null,
    Operator { op: Operator, value: Value },
    Relation(Filter),
}

impl FilterValue {
    /// Builds an operator constraint, rejecting pairings the legality table
    /// forbids.
    pub fn operator(op: Operator, value: impl Into<Value>) -> Result<Self> {
        let value = value.into();
        if !op.legal_for(value.kind()) {
            return Err(QuarryError::InvalidOperator {
                op: op.name(),
                kind: value.kind().name(),
            });
        }
        Ok(FilterValue::Operator { op, value })
    }
}

/// An ordered conjunction of per-column constraints.
///
/// Entries compile to `AND`-joined clauses in insertion order. A column
/// without an entry is unconstrained.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filter {
    entries: Vec<(CompactString, FilterValue)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &[(CompactString, FilterValue)] {
        &self.entries
    }

    /// Appends a raw constraint.
    pub fn push(mut self, column: impl Into<CompactString>, value: FilterValue) -> Self {
        self.entries.push((column.into(), value));
        self
    }

    /// Scalar equality shorthand: `column = value`
    pub fn value(self, column: impl Into<CompactString>, value: impl Into<Value>) -> Self {
        self.push(column, FilterValue::Scalar(value.into()))
    }

    /// `column IS NULL`
    pub fn null(self, column: impl Into<CompactString>) -> Self {
        self.push(column, FilterValue::Null)
    }

    /// `column = value`, or `IS NULL` when the value is null
    pub fn eq(self, column: impl Into<CompactString>, value: impl Into<Value>) -> Self {
        self.push(
            column,
            FilterValue::Operator {
                op: Operator::Eq,
                value: value.into(),
            },
        )
    }

    /// `column != value`, or `IS NOT NULL` when the value is null
    pub fn neq(self, column: impl Into<CompactString>, value: impl Into<Value>) -> Self {
        self.push(
            column,
            FilterValue::Operator {
                op: Operator::Neq,
                value: value.into(),
            },
        )
    }

    /// `column LIKE '%text%'`
    pub fn contains(self, column: impl Into<CompactString>, text: impl Into<String>) -> Self {
        self.push(
            column,
            FilterValue::Operator {
                op: Operator::Contains,
                value: Value::Text(text.into()),
            },
        )
    }

    /// `column LIKE 'text%'`
    pub fn starts_with(self, column: impl Into<CompactString>, text: impl Into<String>) -> Self {
        self.push(
            column,
            FilterValue::Operator {
                op: Operator::StartsWith,
                value: Value::Text(text.into()),
            },
        )
    }

    /// `column LIKE '%text'`
    pub fn ends_with(self, column: impl Into<CompactString>, text: impl Into<String>) -> Self {
        self.push(
            column,
            FilterValue::Operator {
                op: Operator::EndsWith,
                value: Value::Text(text.into()),
            },
        )
    }

    /// General comparison; fails when the operator is illegal for the
    /// value's kind.
    pub fn compare(
        self,
        column: impl Into<CompactString>,
        op: Operator,
        value: impl Into<Value>,
    ) -> Result<Self> {
        Ok(self.push(column, FilterValue::operator(op, value)?))
    }

    /// `column > value`
    pub fn gt(self, column: impl Into<CompactString>, value: impl Into<Value>) -> Result<Self> {
        self.compare(column, Operator::Gt, value)
    }

    /// `column < value`
    pub fn lt(self, column: impl Into<CompactString>, value: impl Into<Value>) -> Result<Self> {
        self.compare(column, Operator::Lt, value)
    }

    /// `column >= value`
    pub fn gte(self, column: impl Into<CompactString>, value: impl Into<Value>) -> Result<Self> {
        self.compare(column, Operator::Gte, value)
    }

    /// `column <= value`
    pub fn lte(self, column: impl Into<CompactString>, value: impl Into<Value>) -> Result<Self> {
        self.compare(column, Operator::Lte, value)
    }

    /// Nests a filter through the foreign key carried by `column`, scoped
    /// to the referenced table.
    pub fn relation(self, column: impl Into<CompactString>, filter: Filter) -> Self {
        self.push(column, FilterValue::Relation(filter))
    }
}
