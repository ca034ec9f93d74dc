//! Shared test helpers: a scripted query executor with an executed-SQL log.

use crate::{
    executor::{ExecuteQuery, ExecutionError},
    page::ROW_COUNT_COLUMN,
    response::Row,
    value::Value,
};
use std::{cell::RefCell, collections::VecDeque};

///
/// MockExecutor
///
/// Scripted execution collaborator. Responses are consumed in FIFO order;
/// with nothing scripted, execution yields an empty result set. Every
/// statement text is logged for execution-count assertions.
///

#[derive(Default)]
pub(crate) struct MockExecutor {
    responses: RefCell<VecDeque<Result<Vec<Row>, ExecutionError>>>,
    executed: RefCell<Vec<String>>,
}

impl MockExecutor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_rows(&self, rows: Vec<Row>) {
        self.responses.borrow_mut().push_back(Ok(rows));
    }

    /// Script a one-row count result, the shape a conforming database
    /// returns for a derived count select.
    pub(crate) fn push_count(&self, count: u64) {
        self.push_rows(vec![Row::new().with_column(ROW_COUNT_COLUMN, count)]);
    }

    /// Script a one-row result under an arbitrary column name.
    pub(crate) fn push_scalar(&self, column: &str, value: Value) {
        self.push_rows(vec![Row::new().with_column(column, value)]);
    }

    pub(crate) fn push_error(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ExecutionError::new(message)));
    }

    pub(crate) fn executed(&self) -> Vec<String> {
        self.executed.borrow().clone()
    }

    pub(crate) fn execution_count(&self) -> usize {
        self.executed.borrow().len()
    }
}

impl ExecuteQuery for MockExecutor {
    fn execute(&self, sql: &str) -> Result<Vec<Row>, ExecutionError> {
        self.executed.borrow_mut().push(sql.to_string());
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
