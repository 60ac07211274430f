use super::{Expr, Ident, Statement, TableRef};

/// An `insert` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: TableRef,

    /// Columns the value rows are bound to.
    pub columns: Vec<Ident>,

    /// One entry per inserted row.
    pub rows: Vec<Vec<Expr>>,
}

impl Insert {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Ident>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Append one row of values.
    pub fn values<I>(mut self, row: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }
}

impl Statement {
    pub fn is_insert(&self) -> bool {
        matches!(self, Statement::Insert(..))
    }

    pub fn as_insert(&self) -> Option<&Insert> {
        match self {
            Self::Insert(insert) => Some(insert),
            _ => None,
        }
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}
