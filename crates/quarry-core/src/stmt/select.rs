use super::{ColumnRef, Expr, Ident, OrderBy, Statement, TableRef};

/// A `select` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Table the rows come from.
    pub from: TableRef,

    /// Projection list. Empty renders as `select *`.
    pub selections: Vec<Selection>,

    /// Optional `where` clause.
    pub filter: Option<Expr>,

    /// `order by` terms, in order.
    pub order_by: Vec<OrderBy>,

    /// Optional `limit`.
    pub limit: Option<u64>,
}

/// One item of a select projection list.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// A bare or table-qualified column reference. Either way the result
    /// column is named after the column identifier.
    Column(ColumnRef),

    /// An expression projected under an explicit alias; the alias names
    /// the result column.
    Aliased { expr: Expr, alias: Ident },

    /// An expression with no alias. Its result column has no derivable
    /// name.
    Expr(Expr),

    /// `*`
    All,
}

impl Select {
    pub fn new(from: impl Into<TableRef>) -> Self {
        Self {
            from: from.into(),
            selections: Vec::new(),
            filter: None,
            order_by: Vec::new(),
            limit: None,
        }
    }

    /// Project one column.
    pub fn column(mut self, column: impl Into<ColumnRef>) -> Self {
        self.selections.push(Selection::Column(column.into()));
        self
    }

    /// Project several columns.
    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ColumnRef>,
    {
        self.selections
            .extend(columns.into_iter().map(|c| Selection::Column(c.into())));
        self
    }

    /// Project an expression under an explicit alias.
    pub fn select_as(mut self, expr: impl Into<Expr>, alias: impl Into<Ident>) -> Self {
        self.selections.push(Selection::Aliased {
            expr: expr.into(),
            alias: alias.into(),
        });
        self
    }

    /// Project an expression without an alias. The result column carries
    /// no derivable name, so materialization of the result will degrade.
    pub fn select_expr(mut self, expr: impl Into<Expr>) -> Self {
        self.selections.push(Selection::Expr(expr.into()));
        self
    }

    /// Project `*`.
    pub fn select_all(mut self) -> Self {
        self.selections.push(Selection::All);
        self
    }

    pub fn filter(mut self, filter: impl Into<Expr>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by.push(order_by);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Statement {
    pub fn is_select(&self) -> bool {
        matches!(self, Statement::Select(..))
    }

    pub fn as_select(&self) -> Option<&Select> {
        match self {
            Self::Select(select) => Some(select),
            _ => None,
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
