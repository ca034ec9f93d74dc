use crate::sql::fragment::{Ident, RawSql};

///
/// Source
///
/// The statement's FROM target: a named table, or a nested select rendered
/// as a derived table (`(SELECT …) AS alias`).
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Source {
    Table(Ident),
    Derived { alias: Ident, select: Box<Select> },
}

///
/// Projection
///
/// One projected column. DISTINCT and the count shapes are structural
/// variants so derivation can match on them instead of scanning rendered
/// text.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Projection {
    /// `<source>.*`
    Wildcard,

    /// A bare column reference, qualified or not.
    Column(Ident),

    /// `DISTINCT <column>` — at most one per statement is countable.
    DistinctColumn(Ident),

    /// `COUNT(1) AS <alias>`
    CountRows { alias: Ident },

    /// `COUNT(DISTINCT <column>) AS <alias>`
    CountDistinct { column: Ident, alias: Ident },

    /// An opaque computed expression, optionally aliased.
    Expression { sql: RawSql, alias: Option<Ident> },
}

impl Projection {
    pub fn column(ident: impl Into<Ident>) -> Self {
        Self::Column(ident.into())
    }

    pub fn distinct_column(ident: impl Into<Ident>) -> Self {
        Self::DistinctColumn(ident.into())
    }

    pub fn expression(sql: impl Into<RawSql>) -> Self {
        Self::Expression {
            sql: sql.into(),
            alias: None,
        }
    }

    pub fn expression_as(sql: impl Into<RawSql>, alias: impl Into<Ident>) -> Self {
        Self::Expression {
            sql: sql.into(),
            alias: Some(alias.into()),
        }
    }

    /// Whether this projection yields a result column with the given name.
    ///
    /// Aliases match exactly; bare column references match on their
    /// unqualified name. Wildcards and unaliased expressions never match.
    #[must_use]
    pub fn projects_column_named(&self, name: &str) -> bool {
        match self {
            Self::Column(ident) | Self::DistinctColumn(ident) => ident.name() == name,
            Self::CountRows { alias } | Self::CountDistinct { alias, .. } => alias.as_str() == name,
            Self::Expression {
                alias: Some(alias), ..
            } => alias.as_str() == name,
            Self::Wildcard | Self::Expression { alias: None, .. } => false,
        }
    }
}

///
/// GroupTerm
///
/// One GROUP BY term. Only a bare `Column` is eligible for the
/// `COUNT(DISTINCT …)` shortcut; wildcard and computed terms are carried
/// for rendering but never shortcut a count.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GroupTerm {
    Column(Ident),
    Wildcard,
    Expression(RawSql),
}

impl From<&str> for GroupTerm {
    fn from(value: &str) -> Self {
        Self::Column(Ident::new(value))
    }
}

impl From<Ident> for GroupTerm {
    fn from(value: Ident) -> Self {
        Self::Column(value)
    }
}

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

///
/// Select
///
/// Structural description of a select query prior to execution.
///
/// This value is:
/// - immutable in use: builder methods consume and return
/// - exclusively owned by one pager once adapted
/// - bounded per fetch via [`Select::with_page`], never in place
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Select {
    source: Source,
    projections: Vec<Projection>,
    wheres: Vec<RawSql>,
    group_by: Vec<GroupTerm>,
    having: Option<RawSql>,
    order_by: Vec<(Ident, OrderDirection)>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Select {
    /// Start a select over a named table, projecting the wildcard.
    pub fn from_table(table: impl Into<Ident>) -> Self {
        Self::from_source(Source::Table(table.into()))
    }

    /// Start a select over a nested select as a derived table.
    pub fn from_derived(alias: impl Into<Ident>, select: Self) -> Self {
        Self::from_source(Source::Derived {
            alias: alias.into(),
            select: Box::new(select),
        })
    }

    fn from_source(source: Source) -> Self {
        Self {
            source,
            projections: vec![Projection::Wildcard],
            wheres: Vec::new(),
            group_by: Vec::new(),
            having: None,
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    // ------------------------------------------------------------------
    // Builders (consuming, pure)
    // ------------------------------------------------------------------

    /// Replace the projection list. An empty list renders as the wildcard.
    #[must_use]
    pub fn columns(mut self, projections: Vec<Projection>) -> Self {
        self.projections = projections;
        self
    }

    /// Append a WHERE clause, AND-joined with any existing clauses.
    #[must_use]
    pub fn and_where(mut self, clause: impl Into<RawSql>) -> Self {
        self.wheres.push(clause.into());
        self
    }

    /// Append a GROUP BY term.
    #[must_use]
    pub fn group_by(mut self, term: impl Into<GroupTerm>) -> Self {
        self.group_by.push(term.into());
        self
    }

    /// Set the HAVING predicate.
    #[must_use]
    pub fn having(mut self, clause: impl Into<RawSql>) -> Self {
        self.having = Some(clause.into());
        self
    }

    /// Append an ascending sort key.
    #[must_use]
    pub fn order_by(mut self, column: impl Into<Ident>) -> Self {
        self.order_by.push((column.into(), OrderDirection::Asc));
        self
    }

    /// Append a descending sort key.
    #[must_use]
    pub fn order_by_desc(mut self, column: impl Into<Ident>) -> Self {
        self.order_by.push((column.into(), OrderDirection::Desc));
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// A bounded copy of this select for one page fetch.
    /// The original is left untouched.
    #[must_use]
    pub fn with_page(&self, offset: u64, limit: u64) -> Self {
        self.clone().offset(offset).limit(limit)
    }

    // ------------------------------------------------------------------
    // Clause resets (used when re-shaping into a count select)
    // ------------------------------------------------------------------

    #[must_use]
    pub fn clear_group_by(mut self) -> Self {
        self.group_by.clear();
        self
    }

    #[must_use]
    pub fn clear_having(mut self) -> Self {
        self.having = None;
        self
    }

    #[must_use]
    pub fn clear_order_by(mut self) -> Self {
        self.order_by.clear();
        self
    }

    #[must_use]
    pub const fn clear_page(mut self) -> Self {
        self.limit = None;
        self.offset = None;
        self
    }

    // ------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------

    #[must_use]
    pub const fn source(&self) -> &Source {
        &self.source
    }

    #[must_use]
    pub fn projections(&self) -> &[Projection] {
        &self.projections
    }

    #[must_use]
    pub fn where_clauses(&self) -> &[RawSql] {
        &self.wheres
    }

    #[must_use]
    pub fn group_terms(&self) -> &[GroupTerm] {
        &self.group_by
    }

    #[must_use]
    pub const fn having_clause(&self) -> Option<&RawSql> {
        self.having.as_ref()
    }

    #[must_use]
    pub fn order_terms(&self) -> &[(Ident, OrderDirection)] {
        &self.order_by
    }

    #[must_use]
    pub const fn page_limit(&self) -> Option<u64> {
        self.limit
    }

    #[must_use]
    pub const fn page_offset(&self) -> Option<u64> {
        self.offset
    }

    /// Whether any projection yields a result column with the given name.
    #[must_use]
    pub fn projects_column_named(&self, name: &str) -> bool {
        self.projections
            .iter()
            .any(|projection| projection.projects_column_named(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_page_leaves_the_original_unbounded() {
        let select = Select::from_table("test").order_by("number");
        let bounded = select.with_page(10, 10);

        assert_eq!(select.page_limit(), None);
        assert_eq!(select.page_offset(), None);
        assert_eq!(bounded.page_limit(), Some(10));
        assert_eq!(bounded.page_offset(), Some(10));
    }

    #[test]
    fn projects_column_named_matches_aliases_and_bare_columns() {
        let select = Select::from_table("test").columns(vec![
            Projection::column("test.number"),
            Projection::expression_as("COUNT(*)", "total"),
        ]);

        assert!(select.projects_column_named("number"));
        assert!(select.projects_column_named("total"));
        assert!(!select.projects_column_named("testgroup"));
    }

    #[test]
    fn wildcard_and_unaliased_expressions_never_match_structurally() {
        let select = Select::from_table("test");
        assert!(!select.projects_column_named("number"));

        let select = select.columns(vec![Projection::expression("COUNT(*)")]);
        assert!(!select.projects_column_named("COUNT(*)"));
    }
}
