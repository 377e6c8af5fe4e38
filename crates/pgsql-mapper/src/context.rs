//! Request context: the input of every mapper operation.
//!
//! A [`MapperContext`] is built by the caller for one logical operation and
//! only read afterwards. Mappers borrow it immutably.
//!
//! # Example
//! ```ignore
//! use pgsql_mapper::{fields, MapperContext};
//!
//! let ctx = MapperContext::new()
//!     .with_where(fields::TENANT_ID, "public")
//!     .with_where(fields::TAG_ARR, vec!["a", "b"])
//!     .with_page(20, 10);
//! ```

use crate::error::{MapperError, MapperResult};
use crate::value::Value;
use std::collections::HashMap;

/// Validated pagination bounds.
///
/// Both integers are rendered as SQL literals, never bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Zero-based row offset.
    pub offset: u64,
    /// Rows per page (always > 0).
    pub limit: u64,
}

impl Page {
    /// Validate raw bounds: `start_row >= 0` and `page_size > 0`.
    pub fn new(start_row: i64, page_size: i64) -> MapperResult<Self> {
        let invalid = || MapperError::InvalidPagination {
            start_row,
            page_size,
        };
        if page_size <= 0 {
            return Err(invalid());
        }
        let offset = u64::try_from(start_row).map_err(|_| invalid())?;
        let limit = u64::try_from(page_size).map_err(|_| invalid())?;
        Ok(Self { offset, limit })
    }
}

/// Named where/update values and pagination bounds for one operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapperContext {
    where_params: HashMap<String, Value>,
    update_params: HashMap<String, Value>,
    start_row: i64,
    page_size: i64,
}

impl MapperContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a where-parameter.
    pub fn with_where(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.where_params.insert(name.into(), value.into());
        self
    }

    /// Set an update-parameter.
    pub fn with_update(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.update_params.insert(name.into(), value.into());
        self
    }

    /// Set the page bounds. Validation happens when an operation reads them.
    pub fn with_page(mut self, start_row: i64, page_size: i64) -> Self {
        self.start_row = start_row;
        self.page_size = page_size;
        self
    }

    pub fn where_param(&self, name: &str) -> Option<&Value> {
        self.where_params.get(name)
    }

    pub fn update_param(&self, name: &str) -> Option<&Value> {
        self.update_params.get(name)
    }

    pub fn start_row(&self) -> i64 {
        self.start_row
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// Validated page bounds.
    pub fn page(&self) -> MapperResult<Page> {
        Page::new(self.start_row, self.page_size)
    }

    /// A where-parameter that must be present. NULL counts as absent.
    pub fn required_where(&self, name: &str) -> MapperResult<&Value> {
        match self.where_params.get(name) {
            Some(v) if !v.is_null() => Ok(v),
            _ => Err(MapperError::missing_where(name)),
        }
    }

    /// An update-parameter that must be present. NULL counts as absent.
    pub fn required_update(&self, name: &str) -> MapperResult<&Value> {
        match self.update_params.get(name) {
            Some(v) if !v.is_null() => Ok(v),
            _ => Err(MapperError::missing_update(name)),
        }
    }

    /// A text where-parameter that is present and not blank.
    ///
    /// Absent, NULL and whitespace-only values yield `None`; a non-text value
    /// is a type error.
    pub fn optional_where_text(&self, name: &str) -> MapperResult<Option<&str>> {
        match self.where_params.get(name) {
            None => Ok(None),
            Some(v) if v.is_blank() => Ok(None),
            Some(v) => v
                .as_text()
                .map(Some)
                .ok_or_else(|| MapperError::invalid_type(name, "text")),
        }
    }

    /// A required multi-valued where-parameter.
    pub fn where_text_list(&self, name: &str) -> MapperResult<&[String]> {
        let value = self.required_where(name)?;
        value
            .as_text_list()
            .ok_or_else(|| MapperError::invalid_type(name, "text list"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParamScope;

    #[test]
    fn page_rejects_negative_offset_and_empty_page() {
        assert!(Page::new(-1, 10).unwrap_err().is_invalid_pagination());
        assert!(Page::new(0, 0).unwrap_err().is_invalid_pagination());
        assert!(Page::new(0, -5).unwrap_err().is_invalid_pagination());
        assert_eq!(
            Page::new(20, 10).unwrap(),
            Page {
                offset: 20,
                limit: 10
            }
        );
    }

    #[test]
    fn default_context_has_no_valid_page() {
        assert!(MapperContext::new().page().is_err());
    }

    #[test]
    fn required_treats_null_as_missing() {
        let ctx = MapperContext::new()
            .with_where("a", Value::Null)
            .with_update("b", Value::Null);
        assert_eq!(
            ctx.required_where("a").unwrap_err(),
            MapperError::MissingRequiredParameter {
                scope: ParamScope::Where,
                name: "a".to_string()
            }
        );
        assert_eq!(
            ctx.required_update("b").unwrap_err(),
            MapperError::MissingRequiredParameter {
                scope: ParamScope::Update,
                name: "b".to_string()
            }
        );
    }

    #[test]
    fn optional_text_skips_blank() {
        let ctx = MapperContext::new()
            .with_where("blank", "   ")
            .with_where("set", "x")
            .with_where("num", 3_i64)
            .with_where("null", Value::Null);
        assert_eq!(ctx.optional_where_text("blank").unwrap(), None);
        assert_eq!(ctx.optional_where_text("null").unwrap(), None);
        assert_eq!(ctx.optional_where_text("absent").unwrap(), None);
        assert_eq!(ctx.optional_where_text("set").unwrap(), Some("x"));
        assert!(ctx.optional_where_text("num").is_err());
    }

    #[test]
    fn text_list_requires_list_shape() {
        let ctx = MapperContext::new()
            .with_where("tags", vec!["a", "b"])
            .with_where("scalar", "a");
        assert_eq!(ctx.where_text_list("tags").unwrap(), ["a", "b"]);
        assert!(matches!(
            ctx.where_text_list("scalar"),
            Err(MapperError::InvalidParameterType { .. })
        ));
        assert!(ctx.where_text_list("missing").unwrap_err().is_missing_parameter());
    }
}
