use super::Expr;

use indexmap::IndexMap;

/// Ordered `column = expr` pairs for INSERT and UPDATE.
///
/// Setting a column twice replaces the earlier expression in place, so a
/// relation foreign key declared with the same name as a column wins while
/// keeping the column's position.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Assignments {
    assignments: IndexMap<String, Expr>,
}

impl Assignments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, column: impl Into<String>, expr: impl Into<Expr>) {
        self.assignments.insert(column.into(), expr.into());
    }

    pub fn get(&self, column: &str) -> Option<&Expr> {
        self.assignments.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.assignments.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.assignments.keys().map(String::as_str)
    }

    pub fn exprs(&self) -> impl ExactSizeIterator<Item = &Expr> + '_ {
        self.assignments.values()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Expr)> + '_ {
        self.assignments.iter().map(|(k, v)| (k.as_str(), v))
    }
}
