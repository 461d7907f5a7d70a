mod response;
pub use response::{Response, Rows};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::fmt::Debug;

/// The execution transport.
///
/// A driver runs one operation per call and fully drains any result cursor
/// before returning, on success and on error. Retries, timeouts, pooling and
/// transactions are the driver's business; the repository never retries.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute a database operation
    async fn exec(&self, op: Operation) -> crate::Result<Response>;
}

#[async_trait]
impl<T: Driver + ?Sized> Driver for std::sync::Arc<T> {
    async fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op).await
    }
}

#[async_trait]
impl<T: Driver + ?Sized> Driver for Box<T> {
    async fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op).await
    }
}
