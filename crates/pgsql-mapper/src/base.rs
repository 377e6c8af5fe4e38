//! Per-dialect state shared by every mapper.
//!
//! Mappers do not inherit dialect behavior; each one holds a [`DialectBase`]
//! and delegates identity, function resolution, quoting and finalization to
//! it.

use crate::config::MapperConfig;
use crate::dialect::{Dialect, PgSql, TrustedFunction};
use crate::error::MapperResult;
use crate::log::{log_rejected, log_statement};
use crate::namespace::NamespaceProvider;
use crate::sql::{QueryResult, Sql};
use std::sync::Arc;

/// Dialect identity, function table and configuration for one dialect.
#[derive(Debug, Clone)]
pub struct DialectBase {
    dialect: &'static dyn Dialect,
    config: Arc<MapperConfig>,
    namespace: Option<Arc<dyn NamespaceProvider>>,
}

impl DialectBase {
    pub fn new(dialect: &'static dyn Dialect) -> Self {
        Self {
            dialect,
            config: Arc::new(MapperConfig::default()),
            namespace: None,
        }
    }

    /// Base for PostgreSQL with default configuration.
    pub fn pgsql() -> Self {
        Self::new(&PgSql)
    }

    pub fn with_config(mut self, config: MapperConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    /// Install the default-tenant provider. Without one,
    /// [`MapperConfig::default_namespace_id`] is used.
    pub fn with_namespace_provider(mut self, provider: impl NamespaceProvider + 'static) -> Self {
        self.namespace = Some(Arc::new(provider));
        self
    }

    pub fn dialect(&self) -> &'static dyn Dialect {
        self.dialect
    }

    pub fn dialect_id(&self) -> &'static str {
        self.dialect.id()
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Resolve a logical function name (e.g. `"NOW()"`).
    pub fn resolve_function(&self, name: &str) -> MapperResult<&'static str> {
        self.dialect.resolve_function(name)
    }

    pub fn function(&self, function: TrustedFunction) -> &'static str {
        self.dialect.function_token(function)
    }

    pub fn quote_ident(&self, name: &str) -> MapperResult<String> {
        self.dialect.quote_ident(name)
    }

    pub fn default_namespace_id(&self) -> String {
        match &self.namespace {
            Some(p) => p.default_namespace_id(),
            None => self.config.default_namespace_id.clone(),
        }
    }

    /// Run one statement construction and freeze its output.
    ///
    /// `build` assembles the statement; nothing is visible to the caller until
    /// it returns successfully.
    pub(crate) fn build<F>(
        &self,
        table: &'static str,
        operation: &'static str,
        build: F,
    ) -> MapperResult<QueryResult>
    where
        F: FnOnce() -> MapperResult<Sql>,
    {
        match build() {
            Ok(sql) => {
                let result = sql.finish(self.config.placeholder_style);
                log_statement(&self.config, self.dialect_id(), table, operation, &result);
                Ok(result)
            }
            Err(err) => {
                log_rejected(&self.config, self.dialect_id(), table, operation, &err);
                Err(err)
            }
        }
    }
}

impl Default for DialectBase {
    fn default() -> Self {
        Self::pgsql()
    }
}
