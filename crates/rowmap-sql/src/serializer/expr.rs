use super::{Delimited, Ident, Params, ToSql};

use rowmap_core::stmt;

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                fmt!(f, Delimited(&expr.operands, " AND "));
            }
            Between(expr) => {
                fmt!(f, expr.expr " BETWEEN " expr.low " AND " expr.high);
            }
            BinaryOp(expr) => {
                fmt!(f, expr.lhs " " expr.op " " expr.rhs);
            }
            Column(expr) => expr.to_sql(f),
            InList(expr) if expr.list.is_empty() => {
                // `IN ()` is not valid SQL
                fmt!(f, "FALSE");
            }
            InList(expr) => {
                fmt!(f, expr.expr " IN (" Delimited(&expr.list, ", ") ")");
            }
            IsNull(expr) => {
                fmt!(f, expr.expr " IS NULL");
            }
            Or(expr) => {
                fmt!(f, "(" Delimited(&expr.operands, " OR ") ")");
            }
            Value(expr) => expr.to_sql(f),
        }
    }
}

impl ToSql for &stmt::ExprColumn {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match &self.alias {
            Some(alias) => fmt!(f, Ident(alias) "." Ident(&self.name)),
            None => fmt!(f, self.name.as_str()),
        }
    }
}

impl ToSql for &stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
        })
    }
}
