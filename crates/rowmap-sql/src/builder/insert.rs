use super::Builder;

use rowmap_core::{stmt, Model, Result};

impl Builder<'_> {
    /// `INSERT INTO "table" (...) VALUES (...) RETURNING <pk>`
    ///
    /// The primary key is never written; it is assigned by the database and
    /// returned. Owning relations write their foreign key, as UPDATE does.
    pub fn insert<M: Model>(&self, record: &M) -> Result<stmt::Insert> {
        Ok(stmt::Insert {
            table: self.table.name.clone(),
            values: self.assignments(record)?,
            returning: Some(self.table.primary_key().to_string()),
        })
    }
}
