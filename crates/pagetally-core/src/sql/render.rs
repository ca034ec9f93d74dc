//! Module: sql::render
//! Responsibility: turning a [`Select`] into dialect-quoted statement text.
//! Does not own: statement structure or count semantics.
//! Boundary: identifier quoting is delegated to [`Platform`]; the core
//! never escapes identifiers itself.

use crate::sql::{
    fragment::Ident,
    select::{GroupTerm, OrderDirection, Projection, Select, Source},
};

///
/// Platform
///
/// Identifier-quoting seam for the target SQL dialect.
///

pub trait Platform {
    /// Quote a single identifier segment.
    fn quote_identifier(&self, ident: &str) -> String;

    /// Quote a dotted identifier chain segment by segment, passing `*`
    /// through unquoted (`test.*` stays a wildcard).
    fn quote_identifier_chain(&self, chain: &str) -> String {
        chain
            .split('.')
            .map(|segment| {
                if segment == "*" {
                    "*".to_string()
                } else {
                    self.quote_identifier(segment)
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

///
/// AnsiQuoting
///
/// ANSI double-quote identifier quoting, embedded quotes doubled.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiQuoting;

impl Platform for AnsiQuoting {
    fn quote_identifier(&self, ident: &str) -> String {
        format!("\"{}\"", ident.replace('"', "\"\""))
    }
}

impl Select {
    /// Render this select as statement text for the given platform.
    #[must_use]
    pub fn sql_string(&self, platform: &dyn Platform) -> String {
        let prefix = source_prefix(self.source(), platform);

        let mut sql = String::from("SELECT ");
        sql.push_str(&render_projections(self.projections(), platform, &prefix));

        sql.push_str(" FROM ");
        match self.source() {
            Source::Table(table) => {
                sql.push_str(&platform.quote_identifier_chain(table.as_str()));
            }
            Source::Derived { alias, select } => {
                sql.push_str(&format!(
                    "({}) AS {}",
                    select.sql_string(platform),
                    platform.quote_identifier(alias.as_str())
                ));
            }
        }

        if !self.where_clauses().is_empty() {
            let clauses = self
                .where_clauses()
                .iter()
                .map(|clause| format!("({clause})"))
                .collect::<Vec<_>>()
                .join(" AND ");
            sql.push_str(&format!(" WHERE {clauses}"));
        }

        if !self.group_terms().is_empty() {
            let terms = self
                .group_terms()
                .iter()
                .map(|term| render_group_term(term, platform))
                .collect::<Vec<_>>()
                .join(", ");
            sql.push_str(&format!(" GROUP BY {terms}"));
        }

        if let Some(having) = self.having_clause() {
            sql.push_str(&format!(" HAVING ({having})"));
        }

        if !self.order_terms().is_empty() {
            let terms = self
                .order_terms()
                .iter()
                .map(|(column, direction)| {
                    let direction = match direction {
                        OrderDirection::Asc => "ASC",
                        OrderDirection::Desc => "DESC",
                    };
                    format!(
                        "{} {direction}",
                        platform.quote_identifier_chain(column.as_str())
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            sql.push_str(&format!(" ORDER BY {terms}"));
        }

        if let Some(limit) = self.page_limit() {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = self.page_offset() {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        sql
    }
}

// The name a projection qualifies unprefixed columns with: the table chain,
// or the derived-table alias.
fn source_prefix(source: &Source, platform: &dyn Platform) -> String {
    match source {
        Source::Table(table) => platform.quote_identifier_chain(table.as_str()),
        Source::Derived { alias, .. } => platform.quote_identifier(alias.as_str()),
    }
}

fn render_projections(projections: &[Projection], platform: &dyn Platform, prefix: &str) -> String {
    if projections.is_empty() {
        return format!("{prefix}.*");
    }

    projections
        .iter()
        .map(|projection| render_projection(projection, platform, prefix))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_projection(projection: &Projection, platform: &dyn Platform, prefix: &str) -> String {
    match projection {
        Projection::Wildcard => format!("{prefix}.*"),
        Projection::Column(column) => qualified(column, platform, prefix),
        Projection::DistinctColumn(column) => {
            format!("DISTINCT {}", qualified(column, platform, prefix))
        }
        Projection::CountRows { alias } => {
            format!("COUNT(1) AS {}", platform.quote_identifier(alias.as_str()))
        }
        Projection::CountDistinct { column, alias } => format!(
            "COUNT(DISTINCT {}) AS {}",
            qualified(column, platform, prefix),
            platform.quote_identifier(alias.as_str())
        ),
        Projection::Expression { sql, alias } => match alias {
            Some(alias) => format!("{sql} AS {}", platform.quote_identifier(alias.as_str())),
            None => sql.as_str().to_string(),
        },
    }
}

// Group and order terms render without a source prefix: a bare `number`
// stays `"number"`, a qualified `test.testgroup` becomes
// `"test"."testgroup"`.
fn render_group_term(term: &GroupTerm, platform: &dyn Platform) -> String {
    match term {
        GroupTerm::Column(column) => platform.quote_identifier_chain(column.as_str()),
        GroupTerm::Wildcard => "*".to_string(),
        GroupTerm::Expression(sql) => sql.as_str().to_string(),
    }
}

// Projection position: unqualified columns pick up the source prefix.
fn qualified(column: &Ident, platform: &dyn Platform, prefix: &str) -> String {
    if column.is_qualified() {
        platform.quote_identifier_chain(column.as_str())
    } else {
        format!("{prefix}.{}", platform.quote_identifier(column.as_str()))
    }
}
