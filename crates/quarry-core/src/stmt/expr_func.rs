use super::{Expr, Ident};

/// A function call expression, e.g. `count(*)` or `lower("title")`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    pub name: Ident,
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn func<I>(name: impl Into<Ident>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        ExprFunc {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
        .into()
    }

    /// `count(*)`
    pub fn count_star() -> Self {
        Self::func("count", [Expr::Wildcard])
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}
