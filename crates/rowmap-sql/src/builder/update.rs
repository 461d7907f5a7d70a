use super::Builder;

use rowmap_core::{bail, stmt, Model, Result};

impl Builder<'_> {
    /// `UPDATE "table" SET ... WHERE <pk> = <id>`
    ///
    /// The record must already hold a nonzero primary key.
    pub fn update<M: Model>(&self, record: &M) -> Result<stmt::Update> {
        let id = self.primary_key_value(record)?;

        if id.is_zero() {
            bail!(
                "cannot update a `{}` row without a primary key",
                self.table.name
            );
        }

        let assignments = self.assignments(record)?;

        if assignments.is_empty() {
            bail!("no columns to update on `{}`", self.table.name);
        }

        Ok(stmt::Update {
            table: self.table.name.clone(),
            assignments,
            filter: self.primary_key_filter(id)?,
        })
    }
}
