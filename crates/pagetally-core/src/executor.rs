//! Module: executor
//! Responsibility: the query-execution collaborator seam.
//! Does not own: statement construction, rendering, or count derivation.
//! Boundary: everything below this trait is driver territory (network I/O,
//! dialect wire protocol, result decoding into [`Row`] records).

use crate::response::Row;
use thiserror::Error as ThisError;

///
/// ExecuteQuery
///
/// Synchronous, possibly-failing query execution.
/// Implementations submit the rendered statement text to a database and
/// materialize the full result as ordered rows. The pagination core issues
/// exactly one `execute` per fetch or count computation and never retries.
///

pub trait ExecuteQuery {
    fn execute(&self, sql: &str) -> Result<Vec<Row>, ExecutionError>;
}

impl<T: ExecuteQuery + ?Sized> ExecuteQuery for &T {
    fn execute(&self, sql: &str) -> Result<Vec<Row>, ExecutionError> {
        (**self).execute(sql)
    }
}

///
/// ExecutionError
///
/// Opaque execution failure passed through from the driver.
/// The core does not interpret it: network faults, SQL syntax errors, and
/// constraint violations all surface here unchanged.
///

#[derive(Debug, ThisError)]
#[error("query execution failed: {message}")]
pub struct ExecutionError {
    pub message: String,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
