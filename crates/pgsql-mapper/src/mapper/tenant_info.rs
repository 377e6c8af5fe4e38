//! Namespace metadata (`tenant_info`).
//!
//! No dialect-specific statements; the generic [`Mapper`] operations cover it.

use crate::base::DialectBase;
use crate::dialect::PgSql;
use crate::mapper::Mapper;
use crate::registry::MapperRegistration;
use crate::tables;
use std::sync::Arc;

/// Mapper for `tenant_info`.
#[derive(Debug, Clone, Default)]
pub struct TenantInfoMapper {
    base: DialectBase,
}

impl TenantInfoMapper {
    pub fn new(base: DialectBase) -> Self {
        Self { base }
    }
}

impl Mapper for TenantInfoMapper {
    fn table_name(&self) -> &'static str {
        tables::TENANT_INFO
    }

    fn base(&self) -> &DialectBase {
        &self.base
    }
}

fn build(base: DialectBase) -> Arc<dyn Mapper> {
    Arc::new(TenantInfoMapper::new(base))
}

inventory::submit! {
    MapperRegistration {
        data_source: PgSql::ID,
        table_name: tables::TENANT_INFO,
        build,
    }
}
