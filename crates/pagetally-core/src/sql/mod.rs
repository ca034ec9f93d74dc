//! Select-statement model and rendering.
//!
//! The model is deliberately small: one table or derived-table source,
//! typed projections, raw-fragment predicates, grouping, ordering, and page
//! bounds. Everything the count deriver needs to inspect is a structural
//! variant, never rendered text.

mod fragment;
mod render;
mod select;

pub use fragment::{Ident, RawSql};
pub use render::{AnsiQuoting, Platform};
pub use select::{GroupTerm, OrderDirection, Projection, Select, Source};
