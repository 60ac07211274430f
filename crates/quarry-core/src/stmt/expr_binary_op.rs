use super::Expr;

/// A binary operation between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    And,
    Or,
    Like,
    NotLike,
}

impl Expr {
    pub fn binary_op(lhs: impl Into<Self>, op: BinaryOp, rhs: impl Into<Self>) -> Self {
        ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn eq(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Eq, rhs)
    }

    pub fn ne(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Ne, rhs)
    }

    pub fn lt(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Lt, rhs)
    }

    pub fn le(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Le, rhs)
    }

    pub fn gt(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Gt, rhs)
    }

    pub fn ge(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Ge, rhs)
    }

    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::And, rhs)
    }

    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Or, rhs)
    }

    pub fn like(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::Like, rhs)
    }

    pub fn not_like(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        Self::binary_op(lhs, BinaryOp::NotLike, rhs)
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(value: ExprBinaryOp) -> Self {
        Self::BinaryOp(value)
    }
}
