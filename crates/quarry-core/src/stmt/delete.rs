use super::{Expr, Statement, TableRef};

/// A `delete` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub from: TableRef,
    pub filter: Option<Expr>,
}

impl Delete {
    pub fn new(from: impl Into<TableRef>) -> Self {
        Self {
            from: from.into(),
            filter: None,
        }
    }

    pub fn filter(mut self, filter: impl Into<Expr>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}
