use super::{Assignments, Expr};

/// `UPDATE "table" SET ... WHERE filter`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: String,

    pub assignments: Assignments,

    pub filter: Expr,
}
