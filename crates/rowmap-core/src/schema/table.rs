use super::{Column, Relation};
use crate::Result;

use indexmap::IndexMap;

/// A table schema.
///
/// Immutable once built. Column order is the declaration order and is the
/// order of every projection and of every decoded row.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    pub(super) primary_key: String,

    pub(super) columns: IndexMap<String, Column>,

    pub(super) relations: IndexMap<String, Relation>,
}

/// Collects column and relation declarations, then verifies them.
#[derive(Debug)]
pub struct TableBuilder {
    table: Table,
}

impl Table {
    pub fn builder(name: impl Into<String>, primary_key: impl Into<String>) -> TableBuilder {
        TableBuilder {
            table: Table {
                name: name.into(),
                primary_key: primary_key.into(),
                columns: IndexMap::new(),
                relations: IndexMap::new(),
            },
        }
    }

    /// Name of the primary key column
    pub fn primary_key(&self) -> &str {
        &self.primary_key
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.columns.values()
    }

    pub fn primary_key_column(&self) -> &Column {
        // Presence is checked when the table is built
        &self.columns[self.primary_key.as_str()]
    }

    pub fn is_primary_key(&self, column: &Column) -> bool {
        column.name == self.primary_key
    }

    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    pub fn relations(&self) -> impl ExactSizeIterator<Item = &Relation> + '_ {
        self.relations.values()
    }
}

impl TableBuilder {
    /// Appends a column. Redeclaring a column replaces it in place.
    pub fn column(mut self, column: Column) -> Self {
        self.table.columns.insert(column.name.clone(), column);
        self
    }

    pub fn relation(mut self, relation: Relation) -> Self {
        self.table.relations.insert(relation.name.clone(), relation);
        self
    }

    pub fn build(self) -> Result<Table> {
        self.table.verify()?;
        Ok(self.table)
    }
}
