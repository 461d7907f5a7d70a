use super::Assignments;

/// `INSERT INTO "table" (...) VALUES (...) RETURNING "pk"`
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: String,

    /// Column values, in column-list order
    pub values: Assignments,

    /// Column returned after the insert, normally the primary key
    pub returning: Option<String>,
}
