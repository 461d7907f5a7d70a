use super::Value;

/// The in-memory type of a record field.
///
/// This is also the scan type handed to a driver: each projected column is
/// decoded into the type of the field it lands in, so an `int2` column read
/// into a `u16` field is requested as `U16`, not `I16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// 64-bit float
    F64,

    /// String type
    String,
}

impl Type {
    pub fn is_bool(self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_f64(self) -> bool {
        matches!(self, Self::F64)
    }

    pub fn is_integer(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::U8 | Self::U16 | Self::U32
        )
    }

    pub fn is_unsigned(self) -> bool {
        matches!(self, Self::U8 | Self::U16 | Self::U32)
    }

    /// Rust name of the type, used in conversion errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::F64 => "f64",
            Self::String => "String",
        }
    }

    /// Converts `value` to this type, checking integer bounds.
    ///
    /// `Null` passes through unchanged; nullability is the caller's concern.
    pub fn cast(self, value: Value) -> crate::Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        Ok(match self {
            Self::Bool => Value::Bool(bool::try_from(value)?),
            Self::I8 => Value::I8(i8::try_from(value)?),
            Self::I16 => Value::I16(i16::try_from(value)?),
            Self::I32 => Value::I32(i32::try_from(value)?),
            Self::I64 => Value::I64(i64::try_from(value)?),
            Self::U8 => Value::U8(u8::try_from(value)?),
            Self::U16 => Value::U16(u16::try_from(value)?),
            Self::U32 => Value::U32(u32::try_from(value)?),
            Self::F64 => Value::F64(f64::try_from(value)?),
            Self::String => Value::String(String::try_from(value)?),
        })
    }
}

impl core::fmt::Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
