use std::fmt;

///
/// Ident
///
/// A possibly dot-qualified SQL identifier (`number`, `test.testgroup`).
/// Stored verbatim; quoting is the platform's job at render time.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Ident(String);

impl Ident {
    pub fn new(ident: impl Into<String>) -> Self {
        Self(ident.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the identifier carries a qualifier segment (`a.b`).
    #[must_use]
    pub fn is_qualified(&self) -> bool {
        self.0.contains('.')
    }

    /// The unqualified column name (last dot segment).
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Ident {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

///
/// RawSql
///
/// An opaque SQL expression fragment rendered verbatim (predicates, computed
/// projections). The core never inspects its text; anything that must be
/// structurally visible to derivation has a typed variant instead.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct RawSql(String);

impl RawSql {
    pub fn new(sql: impl Into<String>) -> Self {
        Self(sql.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RawSql {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RawSql {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for RawSql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
