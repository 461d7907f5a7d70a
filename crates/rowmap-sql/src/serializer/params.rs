use super::{Formatter, ToSql};

use rowmap_core::stmt;

/// Receives the values of a statement as it is serialized.
pub trait Params {
    fn push(&mut self, value: &stmt::Value) -> Placeholder;
}

/// What the serializer writes in place of a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Placeholder {
    /// A 1-based positional parameter, written as `$n`
    Position(usize),

    /// Literal SQL text
    Literal(String),
}

/// Collects values as bound parameters.
impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder::Position(self.len())
    }
}

/// Writes every value as an escaped SQL literal.
///
/// Strings are single quoted with embedded quotes doubled; `Null` is written
/// as `null`. The output is for display and logs. It is not a defense
/// against untrusted input; bind parameters for that.
#[derive(Debug, Default, Clone, Copy)]
pub struct Inline;

impl Params for Inline {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        let mut dst = String::new();
        write_literal(&mut dst, value);
        Placeholder::Literal(dst)
    }
}

fn write_literal(dst: &mut String, value: &stmt::Value) {
    use std::fmt::Write;
    use stmt::Value::*;

    // Writing to a `String` never fails
    let _ = match value {
        Null => write!(dst, "null"),
        Bool(v) => write!(dst, "{v}"),
        I8(v) => write!(dst, "{v}"),
        I16(v) => write!(dst, "{v}"),
        I32(v) => write!(dst, "{v}"),
        I64(v) => write!(dst, "{v}"),
        U8(v) => write!(dst, "{v}"),
        U16(v) => write!(dst, "{v}"),
        U32(v) => write!(dst, "{v}"),
        F64(v) => write!(dst, "{v}"),
        String(v) => {
            dst.push('\'');
            dst.push_str(&v.replace('\'', "''"));
            dst.push('\'');
            Ok(())
        }
        List(items) => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    dst.push_str(", ");
                }
                write_literal(dst, item);
            }
            Ok(())
        }
    };
}

impl ToSql for Placeholder {
    fn to_sql<P: super::Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        match self {
            // Writing to a `String` never fails
            Placeholder::Position(n) => {
                let _ = write!(f.dst, "${n}");
            }
            Placeholder::Literal(text) => f.dst.push_str(&text),
        }
    }
}
