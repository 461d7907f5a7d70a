use crate::{stmt, Error, Result};

use std::{fmt, str::FromStr};

/// Declared SQL type of a column.
///
/// The type decides how a field value is coerced before it is bound (see
/// [`ColumnType::value_ty`]) and which field types a column can be decoded
/// into (see [`ColumnType::accepts`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    String,
    Int,
    Int2,
    Int4,
    Int8,
    Bool,
    Float64,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Int2 => "int2",
            Self::Int4 => "int4",
            Self::Int8 => "int8",
            Self::Bool => "bool",
            Self::Float64 => "float64",
        }
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Self::Int | Self::Int2 | Self::Int4 | Self::Int8)
    }

    /// The value type written for this column.
    ///
    /// `int` is a 4-byte `integer` column on the PostgreSQL side.
    pub fn value_ty(self) -> stmt::Type {
        match self {
            Self::String => stmt::Type::String,
            Self::Int | Self::Int4 => stmt::Type::I32,
            Self::Int2 => stmt::Type::I16,
            Self::Int8 => stmt::Type::I64,
            Self::Bool => stmt::Type::Bool,
            Self::Float64 => stmt::Type::F64,
        }
    }

    /// Returns `true` if a value of this column can be decoded into a field
    /// of type `field`.
    ///
    /// Integer columns decode into any integer width; the value itself is
    /// range-checked when the row is read.
    pub fn accepts(self, field: stmt::Type) -> bool {
        match self {
            Self::String => field.is_string(),
            Self::Bool => field.is_bool(),
            Self::Float64 => field.is_f64(),
            Self::Int | Self::Int2 | Self::Int4 | Self::Int8 => field.is_integer(),
        }
    }
}

impl FromStr for ColumnType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "string" => Self::String,
            "int" => Self::Int,
            "int2" => Self::Int2,
            "int4" => Self::Int4,
            "int8" => Self::Int8,
            "bool" => Self::Bool,
            "float64" => Self::Float64,
            _ => {
                return Err(Error::configuration_conflict(format!(
                    "unknown column type `{s}`"
                )))
            }
        })
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
