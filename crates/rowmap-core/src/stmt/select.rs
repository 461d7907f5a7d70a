use super::{ExprColumn, Expr, OrderBy, Source};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Columns to return, in scan order
    pub projection: Vec<ExprColumn>,

    pub source: Source,

    /// WHERE clause
    pub filter: Option<Expr>,

    pub order_by: Option<OrderBy>,

    pub limit: Option<Limit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub limit: u64,
    pub offset: u64,
}
