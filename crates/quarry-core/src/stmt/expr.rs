use super::{ColumnRef, ExprBinaryOp, ExprFunc, Value};

/// A scalar SQL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a column.
    Column(ColumnRef),

    /// A literal value, bound as a parameter in DML and rendered inline in
    /// DDL.
    Value(Value),

    /// A binary operation between two expressions.
    BinaryOp(ExprBinaryOp),

    /// A function call.
    Func(ExprFunc),

    /// `*`, valid only as a function argument.
    Wildcard,
}

impl Expr {
    pub fn column(column: impl Into<ColumnRef>) -> Self {
        Self::Column(column.into())
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }
}

impl From<ColumnRef> for Expr {
    fn from(value: ColumnRef) -> Self {
        Self::Column(value)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Expr {
    /// A bare string is a text value, not a column reference; columns are
    /// built explicitly with [`Expr::column`].
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Value(value.into())
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}
