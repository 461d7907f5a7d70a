#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod expr;

mod ident;
use ident::Ident;

mod params;
pub use params::{Inline, Params, Placeholder};

mod statement;
mod value;

use rowmap_core::stmt::Statement;

/// Serialize a statement to PostgreSQL text.
///
/// Identifiers in projections, FROM/JOIN clauses and INSERT column lists are
/// double quoted. Column references without a table alias are written bare
/// (`WHERE id = 7`, `SET name = $1`), aliased ones as `"alias"."column"`.
#[derive(Debug, Default)]
pub struct Serializer {
    _p: (),
}

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn postgresql() -> Self {
        Self::default()
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        stmt.to_sql(&mut fmt);

        ret
    }
}
