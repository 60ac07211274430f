use super::{Expr, Ident, Statement, TableRef};

/// A `create index` statement.
///
/// `name` is the bare index name; whether a schema qualifier ends up on
/// the index name or on the table is a compiler decision, driven by the
/// schema carried on `table`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateIndex {
    pub name: Ident,
    pub table: TableRef,
    pub columns: Vec<Ident>,
    pub unique: bool,
    pub if_not_exists: bool,

    /// Optional index method, rendered as `using <method>`.
    pub using: Option<Ident>,

    pub nulls_not_distinct: bool,

    /// Optional partial-index predicate, rendered as `where <predicate>`.
    pub filter: Option<Expr>,
}

impl CreateIndex {
    pub fn new(name: impl Into<Ident>, table: impl Into<TableRef>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            columns: Vec::new(),
            unique: false,
            if_not_exists: false,
            using: None,
            nulls_not_distinct: false,
            filter: None,
        }
    }

    pub fn column(mut self, column: impl Into<Ident>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Ident>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    pub fn using(mut self, method: impl Into<Ident>) -> Self {
        self.using = Some(method.into());
        self
    }

    pub fn nulls_not_distinct(mut self) -> Self {
        self.nulls_not_distinct = true;
        self
    }

    pub fn filter(mut self, filter: impl Into<Expr>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

impl From<CreateIndex> for Statement {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}
