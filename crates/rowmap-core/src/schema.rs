mod column;
pub use column::Column;

mod load;

mod mapping;
pub use mapping::{
    column_field_name, relation_field_name, resolve_columns, resolve_relations, FieldMapping,
    PRIMARY_KEY_FIELDS,
};

mod relation;
pub use relation::{Relation, RelationKind};

mod table;
pub use table::{Table, TableBuilder};

mod ty;
pub use ty::ColumnType;

mod verify;

use crate::{Error, Result};

use indexmap::IndexMap;
use std::path::Path;

/// Registry of table schemas, keyed by table name.
///
/// A relation's `target` names another table in the same registry; joins
/// look the target up here for its primary key and column list.
#[derive(Debug, Default, Clone)]
pub struct Schema {
    tables: IndexMap<String, Table>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a table. Registering two tables with the same name is a
    /// configuration conflict.
    pub fn register(&mut self, table: Table) -> Result<()> {
        if self.tables.contains_key(&table.name) {
            return Err(Error::configuration_conflict(format!(
                "table `{}` is declared twice",
                table.name
            )));
        }

        self.tables.insert(table.name.clone(), table);
        Ok(())
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Like [`Schema::table`], but a missing table is an error.
    pub fn expect_table(&self, name: &str) -> Result<&Table> {
        self.table(name)
            .ok_or_else(|| crate::err!("table `{name}` is not registered"))
    }

    pub fn tables(&self) -> impl ExactSizeIterator<Item = &Table> + '_ {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Loads every `*.yaml` / `*.yml` file in `dir` as a table declaration.
    ///
    /// Files are read in name order so that the registry order does not
    /// depend on directory iteration order.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Schema> {
        let mut schema = Schema::new();
        schema.extend_from_dir(dir)?;
        Ok(schema)
    }

    /// Loads every table declaration in `dir` into this registry.
    pub fn extend_from_dir(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        for path in load::yaml_files(dir.as_ref())? {
            let table = Table::from_yaml_file(&path)?;
            self.register(table)?;
        }

        Ok(())
    }
}
