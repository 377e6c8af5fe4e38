//! Convenient imports for typical `pgsql-mapper` usage.
//!
//! ```ignore
//! use pgsql_mapper::prelude::*;
//! ```

pub use crate::{
    ConfigInfoGrayMapper, ConfigTagsRelationMapper, DialectBase, GroupCapacityMapper, Mapper,
    MapperConfig, MapperContext, MapperError, MapperRegistry, MapperResult, QueryResult,
    TenantInfoMapper, Value,
};
pub use crate::{fields, tables};
