use crate::value::Value;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};

///
/// Row
///
/// One materialized result record: an ordered mapping from column name to
/// cell value, in the order the driver produced the columns.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Row(Vec<(String, Value)>);

impl Row {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a column, keeping insertion order.
    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.push((name.into(), value.into()));
        self
    }

    /// Look up a cell by column name (first match wins).
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn columns(&self) -> &[(String, Value)] {
        &self.0
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Value)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

///
/// RowSet
///
/// Materialized page result: ordered rows, per-fetch lifecycle.
/// Never retained by the pager that produced it.
///

#[derive(Debug, Default, Deref, IntoIterator)]
pub struct RowSet(pub Vec<Row>);

impl RowSet {
    #[must_use]
    pub const fn count(&self) -> u64 {
        self.0.len() as u64
    }

    #[must_use]
    pub fn rows(self) -> Vec<Row> {
        self.0
    }
}
