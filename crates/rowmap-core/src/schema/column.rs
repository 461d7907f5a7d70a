use super::ColumnType;

/// A column declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    pub ty: ColumnType,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// Write a zero integer as NULL. Requires `nullable`.
    pub zero_to_null: bool,

    /// Record field this column maps to, overriding the naming convention
    pub field_name: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable: false,
            zero_to_null: false,
            field_name: None,
        }
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn zero_to_null(mut self, zero_to_null: bool) -> Self {
        self.zero_to_null = zero_to_null;
        self
    }

    pub fn field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = Some(field_name.into());
        self
    }
}
