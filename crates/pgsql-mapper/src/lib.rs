//! # pgsql-mapper
//!
//! PostgreSQL statement construction for a config-store datasource.
//!
//! Each mapper turns a [`MapperContext`] (named where/update values plus page
//! bounds) into a [`QueryResult`]: a SQL template with positional placeholders
//! and the ordered parameter list that binds to it. Nothing here executes SQL;
//! the result is handed to the driver unchanged.
//!
//! - **Lock-step building**: placeholders and parameters are appended together
//!   by [`Sql`], so their order cannot drift
//! - **Optional predicates**: blank or absent filters drop both clause and value
//! - **Literal pagination**: `OFFSET`/`LIMIT` are validated integers, never bound
//! - **Dialect quoting**: reserved column names such as `usage` are quoted
//! - **Fail early**: missing values, bad pages and empty IN-lists are rejected
//!   before any SQL leaves the crate
//!
//! ```ignore
//! use pgsql_mapper::prelude::*;
//!
//! let registry = MapperRegistry::for_dialect(DialectBase::pgsql());
//! let tags = registry
//!     .get_as::<ConfigTagsRelationMapper>(tables::CONFIG_TAGS_RELATION)
//!     .unwrap();
//!
//! let ctx = MapperContext::new()
//!     .with_where(fields::TENANT_ID, "public")
//!     .with_where(fields::TAG_ARR, vec!["blue", "canary"])
//!     .with_page(0, 20);
//! let query = tags.find_config_info_4_page_fetch_rows(&ctx)?;
//! let rows = client.query(query.sql(), &query.params_ref()).await?;
//! ```

pub mod base;
pub mod config;
pub mod context;
pub mod dialect;
pub mod error;
pub mod fields;
mod log;
pub mod mapper;
pub mod namespace;
pub mod prelude;
pub mod registry;
pub mod sql;
pub mod tables;
pub mod value;

pub use base::DialectBase;
pub use config::MapperConfig;
pub use context::{MapperContext, Page};
pub use dialect::{Dialect, PgSql, TrustedFunction};
pub use error::{MapperError, MapperResult, ParamScope};
pub use mapper::{
    ConfigInfoGrayMapper, ConfigTagsRelationMapper, GroupCapacityMapper, Mapper,
    TenantInfoMapper,
};
pub use namespace::{NamespaceProvider, StaticNamespace};
pub use registry::{MapperRegistration, MapperRegistry};
pub use sql::{PlaceholderStyle, QueryResult, Sql, sql};
pub use value::Value;

// Re-export inventory for out-of-crate mapper registrations
pub use inventory;
