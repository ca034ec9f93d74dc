//! Pagination core: count-query derivation and the select pager.

pub mod count;
pub mod pager;

pub use count::{QueryShapeError, ROW_COUNT_COLUMN, derive_count_select};
pub use pager::{InvalidInputError, RowCount, SelectPager};
