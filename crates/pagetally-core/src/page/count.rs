//! Module: page::count
//! Responsibility: deriving a count select from an arbitrary select.
//! Does not own: execution, caching, or rendering.
//! Boundary: pure with respect to its input; the pager caches the result.

use crate::sql::{GroupTerm, Ident, Projection, Select};
use thiserror::Error as ThisError;

/// Reserved result column carrying the scalar count.
///
/// Override count queries must project a column with exactly this name.
pub const ROW_COUNT_COLUMN: &str = "pagetally_row_count";

/// Alias for the derived-table wrap of the original query.
const SUBQUERY_ALIAS: &str = "t";

///
/// QueryShapeError
///
/// Structural shapes the deriver refuses to count rather than mis-count.
///

#[derive(Debug, ThisError)]
pub enum QueryShapeError {
    #[error("count derivation supports at most one DISTINCT column, found {found}")]
    MultipleDistinctColumns { found: usize },
}

/// Derive the count select for an arbitrary select.
///
/// Decision order:
/// 1. More than one GROUP BY term, or a HAVING clause: grouping changes the
///    result row shape in ways a flat COUNT cannot replicate, so the
///    original query is wrapped verbatim as a derived table aliased `t` and
///    counted with `COUNT(1)`.
/// 2. Exactly one `DISTINCT` column projection: `COUNT(DISTINCT col)` over
///    the original source, WHERE kept, grouping/having/ordering/page bounds
///    stripped.
/// 3. Exactly one GROUP BY term that is a bare column: same
///    `COUNT(DISTINCT col)` shortcut.
/// 4. Anything else (including a lone wildcard or computed group term):
///    plain `COUNT(1)` over the original source, WHERE kept, the remaining
///    clauses stripped.
///
/// The shortcut rows exist purely as an optimization over the wrap, valid
/// only when exactly one grouping/distinct dimension exists.
pub fn derive_count_select(select: &Select) -> Result<Select, QueryShapeError> {
    let distinct_column = scan_distinct(select)?;

    if select.group_terms().len() > 1 || select.having_clause().is_some() {
        let wrapped = Select::from_derived(SUBQUERY_ALIAS, select.clone());
        return Ok(wrapped.columns(vec![count_rows()]));
    }

    let count_column = match distinct_column {
        Some(column) => Some(column),
        None => match select.group_terms() {
            [GroupTerm::Column(column)] => Some(column.clone()),
            _ => None,
        },
    };

    let projection = count_column.map_or_else(count_rows, |column| Projection::CountDistinct {
        column,
        alias: Ident::new(ROW_COUNT_COLUMN),
    });

    Ok(select
        .clone()
        .columns(vec![projection])
        .clear_group_by()
        .clear_having()
        .clear_order_by()
        .clear_page())
}

// Scan projections for DISTINCT columns. One is countable; more than one
// has no single-expression count equivalent.
fn scan_distinct(select: &Select) -> Result<Option<Ident>, QueryShapeError> {
    let mut columns = select.projections().iter().filter_map(|projection| {
        if let Projection::DistinctColumn(column) = projection {
            Some(column.clone())
        } else {
            None
        }
    });

    let first = columns.next();
    let extra = columns.count();
    if extra > 0 {
        return Err(QueryShapeError::MultipleDistinctColumns { found: extra + 1 });
    }

    Ok(first)
}

fn count_rows() -> Projection {
    Projection::CountRows {
        alias: Ident::new(ROW_COUNT_COLUMN),
    }
}
