use super::{Expr, Ident, Statement, TableRef};

/// An `update` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: TableRef,
    pub assignments: Vec<Assignment>,
    pub filter: Option<Expr>,
}

/// One `set` clause of an update.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: Ident,
    pub value: Expr,
}

impl Update {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            assignments: Vec::new(),
            filter: None,
        }
    }

    pub fn set(mut self, column: impl Into<Ident>, value: impl Into<Expr>) -> Self {
        self.assignments.push(Assignment {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    pub fn filter(mut self, filter: impl Into<Expr>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}
