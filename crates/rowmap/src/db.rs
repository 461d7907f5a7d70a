mod builder;
pub use builder::Builder;

mod connect;
pub use connect::connect;

use crate::Repository;

use rowmap_core::{driver::Driver, schema::FieldMapping, Error, Model, Result, Schema};

use std::sync::Arc;

/// A database handle: the table registry plus the driver every repository
/// executes through. Cloning is cheap.
#[derive(Clone)]
pub struct Db {
    driver: Arc<dyn Driver>,
    schema: Arc<Schema>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns a repository mapping `M` onto `table`.
    ///
    /// The field mapping is resolved here, once. Columns and relations with
    /// no matching field are left out of every statement the repository
    /// builds. A resolved column whose type cannot hold the field's type is
    /// a configuration conflict.
    pub fn repository<M: Model>(&self, table: &str) -> Result<Repository<M>> {
        let table = self.schema.expect_table(table)?;
        let mapping = FieldMapping::resolve::<M>(table);

        for (name, field) in mapping.columns() {
            let (Some(column), Some(ty)) = (table.column(name), field.primitive_ty()) else {
                continue;
            };

            if !column.ty.accepts(ty) {
                return Err(Error::configuration_conflict(format!(
                    "column `{}.{name}` is {} but field `{}` of `{}` is {ty}",
                    table.name,
                    column.ty,
                    field.name,
                    M::type_name(),
                )));
            }
        }

        if !mapping.unresolved_columns().is_empty() {
            tracing::debug!(
                table = %table.name,
                model = M::type_name(),
                columns = ?mapping.unresolved_columns(),
                "columns without a field are skipped"
            );
        }

        Ok(Repository::new(
            self.driver.clone(),
            self.schema.clone(),
            table.clone(),
            mapping,
        ))
    }

    pub fn driver(&self) -> &dyn Driver {
        &*self.driver
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("driver", &self.driver)
            .field("tables", &self.schema.len())
            .finish()
    }
}
