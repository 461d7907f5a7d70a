pub mod builder;
pub use builder::Builder;

pub mod serializer;
pub use serializer::{Inline, Params, Placeholder, Serializer};

use rowmap_core::stmt::Statement;

/// Renders `stmt` with every value inlined as an escaped literal.
///
/// This is the text form used in logs and assertions. Drivers execute the
/// parameterized form produced by serializing into a `Vec<Value>`.
pub fn inline(stmt: &Statement) -> String {
    Serializer::postgresql().serialize(stmt, &mut Inline)
}
