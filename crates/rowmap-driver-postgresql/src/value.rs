use postgres_types::{accepts, private::BytesMut, to_sql_checked, IsNull, ToSql, Type};
use rowmap_core::stmt;

type BoxError = Box<dyn std::error::Error + Sync + Send>;

/// Binds a [`stmt::Value`] as a statement parameter.
///
/// Parameter types come from the server when the statement is prepared;
/// integers are converted to that width with a range check.
#[derive(Debug)]
pub struct Value(stmt::Value);

impl From<stmt::Value> for Value {
    fn from(value: stmt::Value) -> Self {
        Self(value)
    }
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError>
    where
        Self: Sized,
    {
        match &self.0 {
            stmt::Value::Null => Ok(IsNull::Yes),
            stmt::Value::Bool(value) => value.to_sql(ty, out),
            stmt::Value::F64(value) => match *ty {
                Type::FLOAT4 => (*value as f32).to_sql(ty, out),
                _ => value.to_sql(ty, out),
            },
            stmt::Value::String(value) => value.to_sql(ty, out),
            value => match value.to_i64() {
                Some(value) => int_to_sql(value, ty, out),
                None => Err(format!("cannot bind {value:?} as `{ty}`").into()),
            },
        }
    }

    accepts!(BOOL, INT2, INT4, INT8, FLOAT4, FLOAT8, TEXT, VARCHAR, BPCHAR);
    to_sql_checked!();
}

fn int_to_sql(value: i64, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
    match *ty {
        Type::INT2 => i16::try_from(value)?.to_sql(ty, out),
        Type::INT4 => i32::try_from(value)?.to_sql(ty, out),
        Type::INT8 => value.to_sql(ty, out),
        Type::FLOAT8 => (value as f64).to_sql(ty, out),
        _ => Err(format!("cannot bind integer {value} as `{ty}`").into()),
    }
}
