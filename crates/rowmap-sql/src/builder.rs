mod insert;
mod select;
mod update;

mod value;
pub use value::lower_value;

use rowmap_core::{
    schema::{FieldMapping, Table},
    stmt::{self, Assignments, Expr},
    Error, Model, Result, Schema,
};

/// Alias of the main table in filtered selects.
pub const MAIN_TABLE_ALIAS: &str = "m0_";

/// Limit used by filtered selects when the caller passes `0`.
pub const DEFAULT_LIMIT: u64 = 999_999;

/// Builds statements for one table and one record type.
///
/// Building is pure: no I/O, and the same inputs always produce the same
/// statement. Columns the [`FieldMapping`] could not resolve are left out.
#[derive(Debug, Clone, Copy)]
pub struct Builder<'a> {
    schema: &'a Schema,
    table: &'a Table,
    mapping: &'a FieldMapping,
}

impl<'a> Builder<'a> {
    pub fn new(schema: &'a Schema, table: &'a Table, mapping: &'a FieldMapping) -> Self {
        Self {
            schema,
            table,
            mapping,
        }
    }

    pub fn table(&self) -> &'a Table {
        self.table
    }

    pub fn mapping(&self) -> &'a FieldMapping {
        self.mapping
    }

    /// Scan types for the projection of [`Builder::select_by_id`] and
    /// [`Builder::select_by`]: the type of the field each column lands in.
    pub fn projection_types(&self) -> Vec<stmt::Type> {
        self.mapping
            .columns()
            .filter_map(|(_, field)| field.primitive_ty())
            .collect()
    }

    /// Reads the primary key field of `record`. `Null` means unset.
    pub fn primary_key_value<M: Model>(&self, record: &M) -> Result<stmt::Value> {
        let pk = self.table.primary_key();
        let field = self.mapping.column_field(pk).ok_or_else(|| {
            Error::unresolved_field("primary key", pk, self.mapping.model_name())
        })?;

        record
            .get(field.name)
            .ok_or_else(|| Error::unresolved_field("field", field.name, M::type_name()))
    }

    /// Column values shared by INSERT and UPDATE: every resolved non-key
    /// column, then the foreign key of every owning relation.
    fn assignments<M: Model>(&self, record: &M) -> Result<Assignments> {
        let mut assignments = Assignments::new();

        for (name, field) in self.mapping.columns() {
            let Some(column) = self.table.column(name) else {
                continue;
            };

            if self.table.is_primary_key(column) {
                continue;
            }

            let value = record
                .get(field.name)
                .ok_or_else(|| Error::unresolved_field("field", field.name, M::type_name()))?;

            assignments.set(name, lower_value(column, value)?);
        }

        for relation in self.table.relations() {
            let Some(foreign_key) = relation.owned_foreign_key() else {
                continue;
            };

            let Some(field) = self.mapping.relation_field(&relation.name) else {
                continue;
            };

            let value = record.get(field.name).unwrap_or_default();

            // An empty relation does not clobber a mapped foreign key column
            if value.is_null() && assignments.contains(foreign_key) {
                continue;
            }

            let value = match self.table.column(foreign_key) {
                Some(column) => lower_value(column, value)?,
                None => value,
            };

            assignments.set(foreign_key, value);
        }

        Ok(assignments)
    }

    fn primary_key_filter(&self, id: stmt::Value) -> Result<Expr> {
        let pk = self.table.primary_key_column();
        Ok(Expr::eq(
            stmt::ExprColumn::new(&pk.name),
            lower_value(pk, id)?,
        ))
    }
}
