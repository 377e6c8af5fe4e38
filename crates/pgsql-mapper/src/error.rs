//! Error types for statement construction.
//!
//! Every failure here is raised while the statement is being assembled, before
//! any SQL text leaves the crate. Driver errors (connectivity, constraint
//! violations, timeouts) never pass through this type.

use std::fmt;
use thiserror::Error;

/// Result type alias for mapper operations
pub type MapperResult<T> = Result<T, MapperError>;

/// Which placeholder map of a [`MapperContext`](crate::MapperContext) a value was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamScope {
    /// Predicate values (`WHERE ...`).
    Where,
    /// Column values written by INSERT / UPDATE.
    Update,
}

impl fmt::Display for ParamScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Where => f.write_str("where"),
            Self::Update => f.write_str("update"),
        }
    }
}

/// Construction-time failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapperError {
    /// A value the operation requires is absent from the request context
    #[error("Missing required {scope} parameter '{name}'")]
    MissingRequiredParameter { scope: ParamScope, name: String },

    /// A value is present but has the wrong shape
    #[error("Parameter '{name}' has an invalid type: expected {expected}")]
    InvalidParameterType { name: String, expected: &'static str },

    /// Negative offset or non-positive page size
    #[error("Invalid pagination: start_row={start_row}, page_size={page_size}")]
    InvalidPagination { start_row: i64, page_size: i64 },

    /// A multi-valued predicate received no elements
    #[error("Empty value list for '{0}'")]
    EmptyValueList(String),

    /// The dialect has no mapping for a logical function name
    #[error("Unknown function '{name}' for dialect '{dialect}'")]
    UnknownFunction { dialect: &'static str, name: String },

    /// A caller-supplied column name is not a safe SQL identifier
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),
}

impl MapperError {
    /// Create a missing-parameter error for a where-parameter
    pub fn missing_where(name: impl Into<String>) -> Self {
        Self::MissingRequiredParameter {
            scope: ParamScope::Where,
            name: name.into(),
        }
    }

    /// Create a missing-parameter error for an update-parameter
    pub fn missing_update(name: impl Into<String>) -> Self {
        Self::MissingRequiredParameter {
            scope: ParamScope::Update,
            name: name.into(),
        }
    }

    /// Create a type-mismatch error
    pub fn invalid_type(name: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidParameterType {
            name: name.into(),
            expected,
        }
    }

    /// Check if this is a missing-parameter error
    pub fn is_missing_parameter(&self) -> bool {
        matches!(self, Self::MissingRequiredParameter { .. })
    }

    /// Check if this is a pagination error
    pub fn is_invalid_pagination(&self) -> bool {
        matches!(self, Self::InvalidPagination { .. })
    }

    /// Check if this is an empty value list error
    pub fn is_empty_value_list(&self) -> bool {
        matches!(self, Self::EmptyValueList(_))
    }

    /// Check if this is an unknown function error
    pub fn is_unknown_function(&self) -> bool {
        matches!(self, Self::UnknownFunction { .. })
    }
}
