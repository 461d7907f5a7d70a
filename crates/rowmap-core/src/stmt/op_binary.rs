/// Comparison operator of an [`ExprBinaryOp`](super::ExprBinaryOp).
///
/// Filters only ever compare for equality; ranges, lists and nulls have
/// their own expression nodes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
}
