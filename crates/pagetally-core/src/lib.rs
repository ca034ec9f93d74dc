//! Core runtime for PageTally: the select-statement model, the count-query
//! deriver, and the pagination adapter exported via the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod executor;
pub mod page;
pub mod response;
pub mod sql;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or internal helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        executor::ExecuteQuery,
        page::{ROW_COUNT_COLUMN, RowCount, SelectPager},
        response::{Row, RowSet},
        sql::{AnsiQuoting, GroupTerm, Ident, Platform, Projection, RawSql, Select, Source},
        value::Value,
    };
}
