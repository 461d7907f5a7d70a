use super::{Column, Relation, Table};
use crate::{
    model::{Field, FieldTy},
    Model,
};

use heck::ToUpperCamelCase;
use indexmap::IndexMap;

/// Field names tried, in order, for the primary key column.
pub const PRIMARY_KEY_FIELDS: [&str; 2] = ["Id", "ID"];

/// Correspondence between a table's columns and relations and the fields of
/// a record type.
///
/// Resolution is a pure function of the table and the record's field list.
/// Columns and relations without a matching field are collected as
/// unresolved and left out of generated statements.
#[derive(Debug, Clone)]
pub struct FieldMapping {
    model: &'static str,
    columns: IndexMap<String, &'static Field>,
    relations: IndexMap<String, &'static Field>,
    unresolved_columns: Vec<String>,
    unresolved_relations: Vec<String>,
}

impl FieldMapping {
    pub fn resolve<M: Model>(table: &Table) -> FieldMapping {
        FieldMapping::resolve_fields(table, M::fields(), M::type_name())
    }

    pub fn resolve_fields(
        table: &Table,
        fields: &'static [Field],
        model: &'static str,
    ) -> FieldMapping {
        let (columns, unresolved_columns) = resolve_columns(table, fields);
        let (relations, unresolved_relations) = resolve_relations(table, fields);

        FieldMapping {
            model,
            columns,
            relations,
            unresolved_columns,
            unresolved_relations,
        }
    }

    /// Name of the record type, for error messages.
    pub fn model_name(&self) -> &'static str {
        self.model
    }

    pub fn column_field(&self, column: &str) -> Option<&'static Field> {
        self.columns.get(column).copied()
    }

    pub fn relation_field(&self, relation: &str) -> Option<&'static Field> {
        self.relations.get(relation).copied()
    }

    /// Resolved columns in schema order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &'static Field)> + '_ {
        self.columns.iter().map(|(name, field)| (name.as_str(), *field))
    }

    pub fn relations(&self) -> impl Iterator<Item = (&str, &'static Field)> + '_ {
        self.relations.iter().map(|(name, field)| (name.as_str(), *field))
    }

    pub fn is_resolved(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn unresolved_columns(&self) -> &[String] {
        &self.unresolved_columns
    }

    pub fn unresolved_relations(&self) -> &[String] {
        &self.unresolved_relations
    }
}

/// Maps each column, in schema order, to a primitive field of `fields`.
pub fn resolve_columns(
    table: &Table,
    fields: &'static [Field],
) -> (IndexMap<String, &'static Field>, Vec<String>) {
    let mut resolved = IndexMap::new();
    let mut unresolved = vec![];

    for column in table.columns() {
        let found = column_candidates(table, column)
            .into_iter()
            .find_map(|name| primitive_field(fields, &name));

        match found {
            Some(field) => {
                resolved.insert(column.name.clone(), field);
            }
            None => unresolved.push(column.name.clone()),
        }
    }

    (resolved, unresolved)
}

/// Maps each relation to a relation field named after it. Relations have no
/// override.
pub fn resolve_relations(
    table: &Table,
    fields: &'static [Field],
) -> (IndexMap<String, &'static Field>, Vec<String>) {
    let mut resolved = IndexMap::new();
    let mut unresolved = vec![];

    for relation in table.relations() {
        let name = relation_field_name(relation);
        let found = fields
            .iter()
            .find(|field| field.is_relation() && field.name == name);

        match found {
            Some(field) => {
                resolved.insert(relation.name.clone(), field);
            }
            None => unresolved.push(relation.name.clone()),
        }
    }

    (resolved, unresolved)
}

/// Conventional field name for a column: `owner_id` becomes `OwnerId`.
pub fn column_field_name(column: &str) -> String {
    column.to_upper_camel_case()
}

pub fn relation_field_name(relation: &Relation) -> String {
    relation.name.to_upper_camel_case()
}

fn column_candidates(table: &Table, column: &Column) -> Vec<String> {
    if table.is_primary_key(column) {
        PRIMARY_KEY_FIELDS.iter().map(|s| s.to_string()).collect()
    } else if let Some(name) = &column.field_name {
        vec![name.clone()]
    } else {
        vec![column_field_name(&column.name)]
    }
}

fn primitive_field(fields: &'static [Field], name: &str) -> Option<&'static Field> {
    fields
        .iter()
        .find(|field| field.name == name && matches!(field.ty, FieldTy::Primitive { .. }))
}
