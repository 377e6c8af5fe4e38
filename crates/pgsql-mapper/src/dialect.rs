//! SQL dialect identity, trusted function tokens and identifier quoting.
//!
//! A dialect is a stateless value shared by every mapper of that dialect.
//! Adding a dialect means adding a type that implements [`Dialect`]; the
//! mapper code does not change.

use crate::error::{MapperError, MapperResult};
use std::fmt;
use std::str::FromStr;

/// Logical built-in functions a mapper may embed in SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrustedFunction {
    /// Current timestamp as a function call (`NOW()`).
    Now,
    /// Row-count aggregate (`COUNT(*)`).
    Count,
    /// Current timestamp as an SQL keyword.
    CurrentTimestamp,
}

impl TrustedFunction {
    pub const ALL: [TrustedFunction; 3] = [Self::Now, Self::Count, Self::CurrentTimestamp];

    /// The logical name used by callers (e.g. in `gmt_modified@NOW()` columns).
    pub fn name(self) -> &'static str {
        match self {
            Self::Now => "NOW()",
            Self::Count => "COUNT(*)",
            Self::CurrentTimestamp => "CURRENT_TIMESTAMP",
        }
    }
}

impl fmt::Display for TrustedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrustedFunction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

/// Dialect-specific behavior used by the mappers.
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Dialect identity, e.g. `"postgresql"`.
    fn id(&self) -> &'static str;

    /// Concrete SQL token for a logical function.
    fn function_token(&self, function: TrustedFunction) -> &'static str;

    /// Whether `name` must be quoted to be used as a column identifier.
    fn is_reserved(&self, name: &str) -> bool;

    /// The identifier quote character.
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Resolve a logical function name to this dialect's token.
    ///
    /// Names outside the trusted set fail with [`MapperError::UnknownFunction`].
    fn resolve_function(&self, name: &str) -> MapperResult<&'static str> {
        name.parse::<TrustedFunction>()
            .map(|f| self.function_token(f))
            .map_err(|()| MapperError::UnknownFunction {
                dialect: self.id(),
                name: name.to_string(),
            })
    }

    /// Validate a column/table identifier and quote it when reserved.
    ///
    /// Reserved names are quoted in lower case.
    ///
    /// Accepts `[A-Za-z_][A-Za-z0-9_]*` only; anything else is rejected
    /// rather than escaped.
    fn quote_ident(&self, name: &str) -> MapperResult<String> {
        let mut chars = name.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c == '_' || c.is_ascii_alphabetic())
            && chars.all(|c| c == '_' || c.is_ascii_alphanumeric());
        if !valid {
            return Err(MapperError::InvalidIdentifier(name.to_string()));
        }

        if self.is_reserved(name) {
            // Unquoted names fold to lower case; quote the folded form so the
            // quoted column is the same one.
            let q = self.identifier_quote();
            Ok(format!("{q}{}{q}", name.to_ascii_lowercase()))
        } else {
            Ok(name.to_string())
        }
    }
}

/// Words that collide with PostgreSQL keywords when used as column names.
const PG_RESERVED: &[&str] = &[
    "all", "analyse", "analyze", "and", "any", "array", "as", "asc", "both", "case", "cast",
    "check", "collate", "column", "constraint", "create", "current_date", "current_time",
    "current_timestamp", "current_user", "default", "desc", "distinct", "do", "else", "end",
    "except", "false", "fetch", "for", "foreign", "from", "grant", "group", "having", "in",
    "intersect", "into", "leading", "limit", "not", "null", "offset", "on", "only", "or",
    "order", "primary", "references", "returning", "select", "session_user", "some", "table",
    "then", "to", "trailing", "true", "union", "unique", "usage", "user", "using", "when",
    "where", "window", "with",
];

/// PostgreSQL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PgSql;

impl PgSql {
    pub const ID: &'static str = "postgresql";
}

impl Dialect for PgSql {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn function_token(&self, function: TrustedFunction) -> &'static str {
        match function {
            TrustedFunction::Now => "NOW()",
            TrustedFunction::Count => "count(*)",
            TrustedFunction::CurrentTimestamp => "CURRENT_TIMESTAMP",
        }
    }

    fn is_reserved(&self, name: &str) -> bool {
        PG_RESERVED.iter().any(|w| w.eq_ignore_ascii_case(name))
    }
}
