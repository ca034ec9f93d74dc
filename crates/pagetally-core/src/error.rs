use crate::{
    executor::ExecutionError,
    page::{count::QueryShapeError, pager::InvalidInputError},
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Top-level error surface of the pagination core.
/// Every failure is one of the three kinds below and surfaces synchronously
/// to the immediate caller; there is no local recovery or retry.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    QueryShape(#[from] QueryShapeError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),
}
