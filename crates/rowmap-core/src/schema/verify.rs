use super::Table;
use crate::{Error, Result};

impl Table {
    pub(super) fn verify(&self) -> Result<()> {
        self.verify_primary_key_is_a_column()?;
        self.verify_zero_to_null_columns_are_nullable()?;
        Ok(())
    }

    fn verify_primary_key_is_a_column(&self) -> Result<()> {
        if self.columns.contains_key(&self.primary_key) {
            return Ok(());
        }

        Err(Error::configuration_conflict(format!(
            "primary key `{}` is not a column of `{}`",
            self.primary_key, self.name
        )))
    }

    fn verify_zero_to_null_columns_are_nullable(&self) -> Result<()> {
        for column in self.columns.values() {
            if column.zero_to_null && !column.nullable {
                return Err(Error::configuration_conflict(format!(
                    "column `{}.{}` is zero_to_null but not nullable",
                    self.name, column.name
                )));
            }
        }

        Ok(())
    }
}
