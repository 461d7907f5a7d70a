use super::Operation;

use crate::stmt;

#[derive(Debug, Clone)]
pub struct QuerySql {
    /// The SQL statement to execute
    pub stmt: stmt::Statement,

    /// Scan types for each returned column.
    ///
    /// `None` executes the statement and reports the affected row count.
    /// `Some` decodes every returned row positionally, each column into a
    /// nullable value of the given type.
    pub ret: Option<Vec<stmt::Type>>,
}

impl QuerySql {
    pub fn execute(stmt: impl Into<stmt::Statement>) -> Self {
        Self {
            stmt: stmt.into(),
            ret: None,
        }
    }

    pub fn query(stmt: impl Into<stmt::Statement>, ret: Vec<stmt::Type>) -> Self {
        Self {
            stmt: stmt.into(),
            ret: Some(ret),
        }
    }
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
