use super::Ident;

/// A reference to a column, optionally qualified by table name. The
/// result column it produces is named after the column identifier
/// whether or not a qualifier is present.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRef {
    pub table: Option<Ident>,
    pub column: Ident,
}

impl ColumnRef {
    pub fn new(column: impl Into<Ident>) -> Self {
        Self {
            table: None,
            column: column.into(),
        }
    }

    pub fn qualified(table: impl Into<Ident>, column: impl Into<Ident>) -> Self {
        Self {
            table: Some(table.into()),
            column: column.into(),
        }
    }

    /// Name of the result column this reference produces.
    pub fn result_name(&self) -> &str {
        self.column.as_str()
    }
}

impl From<&str> for ColumnRef {
    /// `"books.title"` qualifies the column; `"title"` does not.
    fn from(value: &str) -> Self {
        match value.split_once('.') {
            Some((table, column)) => Self::qualified(table, column),
            None => Self::new(value),
        }
    }
}

impl From<Ident> for ColumnRef {
    fn from(column: Ident) -> Self {
        Self::new(column)
    }
}
