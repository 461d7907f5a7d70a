use rowmap_core::{
    schema::{Column, ColumnType},
    stmt::Value,
    Error, Result,
};

/// Coerces a field value for writing to `column`.
///
/// - `string`: an empty string in a nullable column becomes `Null`.
/// - integers: converted to the column width (strings are parsed); with
///   `zero_to_null`, zero becomes `Null`.
/// - `bool` / `float64`: converted to the column type.
///
/// A `zero_to_null` column that is not nullable is a configuration
/// conflict. Tables are checked for this when they are built.
pub fn lower_value(column: &Column, value: Value) -> Result<Value> {
    if column.zero_to_null && !column.nullable {
        return Err(Error::configuration_conflict(format!(
            "column `{}` is zero_to_null but not nullable",
            column.name
        )));
    }

    if value.is_null() {
        return Ok(value);
    }

    match column.ty {
        ColumnType::String => match value {
            Value::String(s) if s.is_empty() && column.nullable => Ok(Value::Null),
            value => column.ty.value_ty().cast(value),
        },
        ColumnType::Int | ColumnType::Int2 | ColumnType::Int4 | ColumnType::Int8 => {
            let value = column.ty.value_ty().cast(value)?;

            if column.zero_to_null && value.is_zero() {
                Ok(Value::Null)
            } else {
                Ok(value)
            }
        }
        ColumnType::Bool | ColumnType::Float64 => column.ty.value_ty().cast(value),
    }
}
