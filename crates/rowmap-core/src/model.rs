mod belongs_to;
pub use belongs_to::BelongsTo;

mod primitive;
pub use primitive::Primitive;

use crate::{schema::PRIMARY_KEY_FIELDS, stmt, Result};

/// A record type that can be mapped onto table rows.
///
/// Fields are addressed by their logical name (`"ID"`, `"FullName"`), which
/// is what the field resolver matches schema columns against. Implement it
/// with [`impl_model!`](crate::impl_model).
pub trait Model: Default + Send + Sync + 'static {
    /// The record's declared fields.
    fn fields() -> &'static [Field];

    /// Reads a field. Returns `None` if the record has no such field.
    ///
    /// Relation fields read as the related record's primary key, or `Null`
    /// when nothing is attached.
    fn get(&self, field: &str) -> Option<stmt::Value>;

    /// Writes a primitive field, converting `value` to the field's type.
    fn set(&mut self, field: &str, value: stmt::Value) -> Result<()>;

    fn field(name: &str) -> Option<&'static Field> {
        Self::fields().iter().find(|field| field.name == name)
    }

    /// Name used in error messages.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Reads the primary key through the conventional field names.
    fn primary_key_value(&self) -> Option<stmt::Value> {
        PRIMARY_KEY_FIELDS.iter().find_map(|name| self.get(name))
    }
}

/// A field declared by a [`Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Logical field name
    pub name: &'static str,

    pub ty: FieldTy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTy {
    /// A scalar field, decoded from exactly one column
    Primitive { ty: stmt::Type, nullable: bool },

    /// A [`BelongsTo`] pointer to another record
    Relation,
}

impl Field {
    pub const fn primitive(name: &'static str, ty: stmt::Type, nullable: bool) -> Self {
        Self {
            name,
            ty: FieldTy::Primitive { ty, nullable },
        }
    }

    pub const fn relation(name: &'static str) -> Self {
        Self {
            name,
            ty: FieldTy::Relation,
        }
    }

    pub fn is_relation(&self) -> bool {
        matches!(self.ty, FieldTy::Relation)
    }

    /// Value type of a primitive field. `None` for relations.
    pub fn primitive_ty(&self) -> Option<stmt::Type> {
        match self.ty {
            FieldTy::Primitive { ty, .. } => Some(ty),
            FieldTy::Relation => None,
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self.ty {
            FieldTy::Primitive { nullable, .. } => nullable,
            FieldTy::Relation => true,
        }
    }
}
