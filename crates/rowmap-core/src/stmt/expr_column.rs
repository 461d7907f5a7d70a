use super::Expr;

/// A reference to a column, optionally qualified by a table alias.
///
/// Unqualified references render bare (`id`), qualified ones render quoted
/// (`"m0_"."id"`).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ExprColumn {
    /// Alias of the table the column belongs to
    pub alias: Option<String>,

    /// Column name
    pub name: String,
}

impl Expr {
    pub fn column(column: impl Into<ExprColumn>) -> Self {
        column.into().into()
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

impl ExprColumn {
    pub fn new(name: impl Into<String>) -> Self {
        ExprColumn {
            alias: None,
            name: name.into(),
        }
    }

    pub fn aliased(alias: impl Into<String>, name: impl Into<String>) -> Self {
        ExprColumn {
            alias: Some(alias.into()),
            name: name.into(),
        }
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}

impl From<&str> for ExprColumn {
    fn from(value: &str) -> Self {
        ExprColumn::new(value)
    }
}
