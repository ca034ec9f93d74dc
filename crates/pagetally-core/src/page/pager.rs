use crate::{
    error::Error,
    executor::ExecuteQuery,
    page::count::{ROW_COUNT_COLUMN, derive_count_select},
    response::RowSet,
    sql::{AnsiQuoting, Platform, Select},
    value::Value,
};
use std::cell::OnceCell;
use thiserror::Error as ThisError;

///
/// RowCount
///
/// Caller-supplied row-count override: a fixed total, or a count-shaped
/// query executed in place of the derived one. Without an override the
/// pager derives and executes its own count query on first use, which is
/// always correct but can be slow for queries a caller knows a cheaper
/// count for.
///

#[derive(Clone, Debug)]
pub enum RowCount {
    Fixed(i64),
    Query(Select),
}

///
/// InvalidInputError
///
/// Rejected row-count inputs. Every variant fails fast at the point of
/// assignment and leaves the cached count untouched.
///

#[derive(Debug, ThisError)]
pub enum InvalidInputError {
    #[error("invalid row count: {value}")]
    NegativeRowCount { value: i64 },

    #[error("row count column not found")]
    RowCountColumnMissing,

    #[error("row count column holds a non-numeric value: {value:?}")]
    RowCountNotNumeric { value: Value },

    #[error("row count is already set for this pager")]
    RowCountAlreadySet,
}

///
/// SelectPager
///
/// Pagination adapter for one select query.
///
/// The pager owns its select exclusively: page bounds are applied to a
/// per-fetch copy and count derivation never mutates the original. Both
/// cache slots (the derived count select and the resolved row count) are
/// set at most once for the pager's lifetime.
///

pub struct SelectPager<X, P = AnsiQuoting>
where
    X: ExecuteQuery,
    P: Platform,
{
    select: Select,
    executor: X,
    platform: P,
    debug: bool,
    count_select: OnceCell<Select>,
    row_count: OnceCell<u64>,
}

impl<X: ExecuteQuery> SelectPager<X, AnsiQuoting> {
    #[must_use]
    pub const fn new(select: Select, executor: X) -> Self {
        Self::with_platform(select, executor, AnsiQuoting)
    }
}

impl<X, P> SelectPager<X, P>
where
    X: ExecuteQuery,
    P: Platform,
{
    #[must_use]
    pub const fn with_platform(select: Select, executor: X, platform: P) -> Self {
        Self {
            select,
            executor,
            platform,
            debug: false,
            count_select: OnceCell::new(),
            row_count: OnceCell::new(),
        }
    }

    /// Enable debug logging for subsequent queries issued by this pager.
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    fn debug_log(&self, s: impl AsRef<str>) {
        if self.debug {
            println!("[debug] {}", s.as_ref());
        }
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn select(&self) -> &Select {
        &self.select
    }

    /// The cached row count, if one has been resolved or set.
    #[must_use]
    pub fn row_count(&self) -> Option<u64> {
        self.row_count.get().copied()
    }

    /// The derived count select, deriving and caching it on first access.
    /// Never executes anything.
    pub fn count_select(&self) -> Result<&Select, Error> {
        if let Some(select) = self.count_select.get() {
            return Ok(select);
        }

        let derived = derive_count_select(&self.select)?;
        Ok(self.count_select.get_or_init(|| derived))
    }

    // ------------------------------------------------------------------
    // Row count
    // ------------------------------------------------------------------

    /// Set the total row count, either directly or through a supplied
    /// count query. Without this, [`SelectPager::count`] derives and runs
    /// a count query itself; the override exists because the derived
    /// subquery form, while always accurate, can be slow on some engines.
    pub fn set_row_count(&mut self, row_count: RowCount) -> Result<(), Error> {
        if self.row_count.get().is_some() {
            return Err(InvalidInputError::RowCountAlreadySet.into());
        }

        let value = match row_count {
            RowCount::Fixed(value) => {
                u64::try_from(value).map_err(|_| InvalidInputError::NegativeRowCount { value })?
            }
            RowCount::Query(select) => {
                // Checked on the query's structure, before anything runs.
                if !select.projects_column_named(ROW_COUNT_COLUMN) {
                    return Err(InvalidInputError::RowCountColumnMissing.into());
                }

                self.execute_count_query(&select)?
            }
        };

        // Cell verified empty above; the pager is single-owner.
        let _ = self.row_count.set(value);

        Ok(())
    }

    /// Total number of rows the select would produce.
    ///
    /// Resolved once: the first call derives the count select and executes
    /// it; later calls return the cached value without touching the
    /// executor. A failed resolution caches nothing and may be retried.
    pub fn count(&self) -> Result<u64, Error> {
        if let Some(count) = self.row_count.get() {
            return Ok(*count);
        }

        let count_select = self.count_select()?;
        let value = self.execute_count_query(count_select)?;
        let _ = self.row_count.set(value);

        self.debug_log(format!("Row count resolved: {value}"));

        Ok(value)
    }

    fn execute_count_query(&self, count_select: &Select) -> Result<u64, Error> {
        let sql = count_select.sql_string(&self.platform);
        self.debug_log(format!("Executing count query: {sql}"));

        let rows = self.executor.execute(&sql)?;
        let Some(row) = rows.first() else {
            return Ok(0);
        };

        let value = row
            .get(ROW_COUNT_COLUMN)
            .ok_or(InvalidInputError::RowCountColumnMissing)?;

        value.as_u64().ok_or_else(|| {
            InvalidInputError::RowCountNotNumeric {
                value: value.clone(),
            }
            .into()
        })
    }

    // ------------------------------------------------------------------
    // Page fetch
    // ------------------------------------------------------------------

    /// Fetch one page of results.
    ///
    /// Applies `offset` and `item_count` to a copy of the select (the
    /// stored select stays unbounded) and issues exactly one execution.
    /// An `item_count` of zero executes `LIMIT 0` and yields an empty set.
    pub fn fetch_page(&self, offset: u64, item_count: u64) -> Result<RowSet, Error> {
        let bounded = self.select.with_page(offset, item_count);
        let sql = bounded.sql_string(&self.platform);
        self.debug_log(format!("Executing page query: {sql}"));

        let rows = self.executor.execute(&sql)?;

        Ok(RowSet(rows))
    }
}
