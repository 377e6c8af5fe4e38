//! Mapper configuration.
//!
//! Hosts embed [`MapperConfig`] in their own configuration file; any serde
//! format works since the struct only derives `Deserialize`.
//!
//! ```toml
//! placeholder_style = "question_mark"
//! default_namespace_id = "public"
//! max_logged_sql_length = 500
//! ```

use crate::sql::PlaceholderStyle;
use serde::Deserialize;

/// Configuration shared by every mapper of one [`DialectBase`](crate::DialectBase).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Placeholder syntax of the execution layer.
    pub placeholder_style: PlaceholderStyle,
    /// Default tenant id used when no namespace provider is installed.
    pub default_namespace_id: String,
    /// Emit a debug event per constructed statement.
    pub log_sql: bool,
    /// Truncate logged SQL (in bytes). `None` means no truncation.
    pub max_logged_sql_length: Option<usize>,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            placeholder_style: PlaceholderStyle::DollarNumbered,
            default_namespace_id: "public".to_string(),
            log_sql: true,
            max_logged_sql_length: Some(200),
        }
    }
}

impl MapperConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder syntax.
    pub fn placeholder_style(mut self, style: PlaceholderStyle) -> Self {
        self.placeholder_style = style;
        self
    }

    /// Set the fallback default tenant id.
    pub fn default_namespace_id(mut self, id: impl Into<String>) -> Self {
        self.default_namespace_id = id.into();
        self
    }

    /// Enable or disable statement logging.
    pub fn log_sql(mut self, enabled: bool) -> Self {
        self.log_sql = enabled;
        self
    }

    /// Set maximum logged SQL length.
    pub fn max_logged_sql_length(mut self, len: usize) -> Self {
        self.max_logged_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_logged_sql_length = None;
        self
    }
}
