//! Lock-step SQL builder.
//!
//! `Sql` stores text fragments and parameter markers in one ordered list and
//! the bound values in another. The only way to add a marker is to add its
//! value in the same call, so the rendered placeholders and the parameter
//! list cannot drift apart.
//!
//! # Example
//!
//! ```ignore
//! use pgsql_mapper::sql::{sql, PlaceholderStyle};
//!
//! let mut q = sql("SELECT id FROM config_info WHERE tenant_id = ");
//! q.push_bind("public");
//! if let Some(app) = app_name {
//!     q.push(" AND app_name = ").push_bind(app);
//! }
//! let result = q.finish(PlaceholderStyle::DollarNumbered);
//! ```

use crate::context::Page;
use crate::error::{MapperError, MapperResult};
use crate::value::Value;
use serde::Deserialize;
use std::fmt::Write;
use tokio_postgres::types::ToSql;

/// Positional placeholder syntax expected by the execution layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    /// `$1, $2, ...` (PostgreSQL wire protocol, tokio-postgres).
    #[default]
    DollarNumbered,
    /// `?` (JDBC-style drivers).
    QuestionMark,
}

impl PlaceholderStyle {
    fn write_placeholder(self, index_1_based: usize, out: &mut String) {
        match self {
            Self::DollarNumbered => {
                let _ = write!(out, "${index_1_based}");
            }
            Self::QuestionMark => out.push('?'),
        }
    }

    /// Count the placeholder markers in rendered SQL text.
    ///
    /// Assumes the text carries no string literals containing `?` or `$n`,
    /// which holds for every statement this crate emits.
    pub fn count_in(self, sql: &str) -> usize {
        match self {
            Self::QuestionMark => sql.matches('?').count(),
            Self::DollarNumbered => {
                let bytes = sql.as_bytes();
                bytes
                    .iter()
                    .enumerate()
                    .filter(|&(i, &b)| {
                        b == b'$' && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
                    })
                    .count()
            }
        }
    }
}

#[derive(Debug, Clone)]
enum SqlPart {
    Raw(String),
    Param,
}

/// A parameter-safe SQL builder.
#[derive(Debug, Clone)]
pub struct Sql {
    parts: Vec<SqlPart>,
    params: Vec<Value>,
}

/// Start building a SQL statement.
pub fn sql(initial_sql: impl Into<String>) -> Sql {
    Sql::new(initial_sql)
}

impl Sql {
    /// Create a new builder with an initial SQL fragment.
    pub fn new(initial_sql: impl Into<String>) -> Self {
        Self {
            parts: vec![SqlPart::Raw(initial_sql.into())],
            params: Vec::new(),
        }
    }

    /// Create an empty builder.
    pub fn empty() -> Self {
        Self {
            parts: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Append raw SQL (no parameters).
    pub fn push(&mut self, sql: &str) -> &mut Self {
        if sql.is_empty() {
            return self;
        }

        match self.parts.last_mut() {
            Some(SqlPart::Raw(last)) => last.push_str(sql),
            _ => self.parts.push(SqlPart::Raw(sql.to_string())),
        }
        self
    }

    /// Append a parameter placeholder and bind its value.
    pub fn push_bind(&mut self, value: impl Into<Value>) -> &mut Self {
        self.parts.push(SqlPart::Param);
        self.params.push(value.into());
        self
    }

    /// Append a comma-separated list of placeholders, one per element, in order.
    ///
    /// An empty list is rejected with [`MapperError::EmptyValueList`]; `name`
    /// identifies the offending parameter.
    pub fn push_bind_list<I, T>(&mut self, name: &str, values: I) -> MapperResult<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mut iter = values.into_iter();
        let Some(first) = iter.next() else {
            return Err(MapperError::EmptyValueList(name.to_string()));
        };

        self.push_bind(first);
        for v in iter {
            self.push(", ");
            self.push_bind(v);
        }
        Ok(self)
    }

    /// Append another `Sql` fragment, consuming it.
    pub fn push_sql(&mut self, mut other: Sql) -> &mut Self {
        self.parts.append(&mut other.parts);
        self.params.append(&mut other.params);
        self
    }

    /// Append ` OFFSET <offset> LIMIT <limit>` as integer literals.
    pub fn push_page(&mut self, page: Page) -> &mut Self {
        let clause = format!(" OFFSET {} LIMIT {}", page.offset, page.limit);
        self.push(&clause)
    }

    /// Number of parameters bound so far.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Render SQL with the given placeholder style.
    pub fn to_sql(&self, style: PlaceholderStyle) -> String {
        let mut out = String::new();
        let mut idx: usize = 0;

        for part in &self.parts {
            match part {
                SqlPart::Raw(s) => out.push_str(s),
                SqlPart::Param => {
                    idx += 1;
                    style.write_placeholder(idx, &mut out);
                }
            }
        }
        out
    }

    /// Render and freeze into a [`QueryResult`].
    pub fn finish(self, style: PlaceholderStyle) -> QueryResult {
        QueryResult {
            sql: self.to_sql(style),
            params: self.params,
            style,
        }
    }
}

/// A finished statement: SQL template plus its ordered parameters.
///
/// `params()[i]` binds to the `i`-th placeholder of `sql()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResult {
    sql: String,
    params: Vec<Value>,
    style: PlaceholderStyle,
}

impl QueryResult {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn placeholder_style(&self) -> PlaceholderStyle {
        self.style
    }

    /// Placeholder markers found in the rendered text.
    pub fn placeholder_count(&self) -> usize {
        self.style.count_in(&self.sql)
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }

    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| p as &(dyn ToSql + Sync))
            .collect()
    }
}
