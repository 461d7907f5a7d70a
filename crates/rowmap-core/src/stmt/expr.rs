use super::{
    ExprAnd, ExprBetween, ExprBinaryOp, ExprColumn, ExprInList, ExprIsNull, ExprOr, Value,
};

/// A scalar or predicate expression in a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of predicates
    And(ExprAnd),

    /// `lhs BETWEEN low AND high`
    Between(ExprBetween),

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// Reference to a column
    Column(ExprColumn),

    /// `expr IN (...)`
    InList(ExprInList),

    /// `expr IS NULL`
    IsNull(ExprIsNull),

    /// OR a set of predicates
    Or(ExprOr),

    /// A literal value, bound as a parameter or inlined by the serializer
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}
