use crate::ExecLog;

use rowmap_core::{
    async_trait,
    driver::{Driver, Operation, Response},
    err,
    stmt::{Value, ValueRecord},
    Error, Result,
};

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// An in-memory driver that answers each operation with the next scripted
/// response and logs what it executed.
///
/// Clones share the script and the log, so a test keeps one clone and hands
/// the other to `Db::builder().build(..)`.
#[derive(Debug, Clone, Default)]
pub struct MockDriver {
    /// Responses handed out in order
    script: Arc<Mutex<VecDeque<Result<Response>>>>,

    /// Log of all operations executed through this driver
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

#[derive(Debug)]
pub struct DriverOp {
    pub operation: Operation,
    pub response: Result<Response>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: Result<Response>) -> &Self {
        self.script.lock().unwrap().push_back(response);
        self
    }

    /// Scripts a result set.
    pub fn push_rows<R>(&self, rows: impl IntoIterator<Item = R>) -> &Self
    where
        R: IntoIterator<Item = Value>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().collect::<ValueRecord>())
            .collect::<Vec<_>>();
        self.push(Ok(Response::values(rows)))
    }

    /// Scripts an affected-row count.
    pub fn push_count(&self, count: u64) -> &Self {
        self.push(Ok(Response::count(count)))
    }

    pub fn push_error(&self, err: Error) -> &Self {
        self.push(Err(err))
    }

    /// Number of scripted responses not yet consumed.
    pub fn pending(&self) -> usize {
        self.script.lock().unwrap().len()
    }

    /// Get a handle to access the operations log
    pub fn log(&self) -> ExecLog {
        ExecLog::new(self.ops_log.clone())
    }
}

#[async_trait]
impl Driver for MockDriver {
    async fn exec(&self, operation: Operation) -> Result<Response> {
        let response = self.script.lock().unwrap().pop_front().unwrap_or_else(|| {
            let sql = operation
                .as_query_sql()
                .map(|op| rowmap_sql::inline(&op.stmt))
                .unwrap_or_default();
            Err(err!("no scripted response for `{sql}`"))
        });

        self.ops_log.lock().unwrap().push(DriverOp {
            operation,
            response: response.clone(),
        });

        response
    }
}
