use super::Join;

/// The FROM clause of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub table: String,

    /// Alias for `table`. When `None`, columns are referenced unqualified.
    pub alias: Option<String>,

    /// Inner joins, in the order they are rendered
    pub joins: Vec<Join>,
}

impl Source {
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            alias: None,
            joins: vec![],
        }
    }

    pub fn aliased(table: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            alias: Some(alias.into()),
            joins: vec![],
        }
    }

    pub fn has_join(&self, alias: &str) -> bool {
        self.joins.iter().any(|join| join.alias == alias)
    }
}
