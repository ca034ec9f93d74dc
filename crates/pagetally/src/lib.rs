//! PageTally — a count-deriving pagination adapter for SQL select queries.
//!
//! ## Crate layout
//! - `core`: the select-statement model, count-query derivation, and the
//!   pagination adapter.
//!
//! The `prelude` module mirrors the surface a paginating application uses:
//! build a [`core::sql::Select`], hand it to a
//! [`core::page::SelectPager`] together with an executor, then ask for
//! `count()` and pages.

pub use pagetally_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use core::Error;

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        executor::ExecuteQuery,
        page::{ROW_COUNT_COLUMN, RowCount, SelectPager},
        response::{Row, RowSet},
        sql::{AnsiQuoting, GroupTerm, Ident, Platform, Projection, RawSql, Select, Source},
        value::Value,
    };
}
