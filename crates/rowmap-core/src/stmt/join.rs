use super::Expr;

/// `INNER JOIN "table" AS "alias" ON constraint`
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub table: String,
    pub alias: String,
    pub constraint: Expr,
}
