//! Gray-release config rows (`config_info_gray`).

use crate::base::DialectBase;
use crate::context::MapperContext;
use crate::dialect::PgSql;
use crate::error::MapperResult;
use crate::mapper::Mapper;
use crate::registry::MapperRegistration;
use crate::sql::{QueryResult, sql};
use crate::tables;
use std::sync::Arc;

/// Mapper for `config_info_gray`.
#[derive(Debug, Clone, Default)]
pub struct ConfigInfoGrayMapper {
    base: DialectBase,
}

impl ConfigInfoGrayMapper {
    pub fn new(base: DialectBase) -> Self {
        Self { base }
    }

    /// One page of all gray configs ordered by id, for a full dump.
    pub fn find_all_config_info_gray_for_dump_all_fetch_rows(
        &self,
        ctx: &MapperContext,
    ) -> MapperResult<QueryResult> {
        self.base.build(
            tables::CONFIG_INFO_GRAY,
            "find_all_config_info_gray_for_dump_all_fetch_rows",
            || {
                let page = ctx.page()?;
                let mut q = sql(
                    "SELECT id,data_id,group_id,tenant_id,gray_name,gray_rule,app_name,content,md5,\
                     gmt_modified FROM config_info_gray ORDER BY id",
                );
                q.push_page(page);
                Ok(q)
            },
        )
    }
}

impl Mapper for ConfigInfoGrayMapper {
    fn table_name(&self) -> &'static str {
        tables::CONFIG_INFO_GRAY
    }

    fn base(&self) -> &DialectBase {
        &self.base
    }
}

fn build(base: DialectBase) -> Arc<dyn Mapper> {
    Arc::new(ConfigInfoGrayMapper::new(base))
}

inventory::submit! {
    MapperRegistration {
        data_source: PgSql::ID,
        table_name: tables::CONFIG_INFO_GRAY,
        build,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_page_is_ordered_and_literal() {
        let m = ConfigInfoGrayMapper::new(DialectBase::pgsql());
        let r = m
            .find_all_config_info_gray_for_dump_all_fetch_rows(&MapperContext::new().with_page(100, 50))
            .unwrap();
        assert_eq!(
            r.sql(),
            "SELECT id,data_id,group_id,tenant_id,gray_name,gray_rule,app_name,content,md5,\
             gmt_modified FROM config_info_gray ORDER BY id OFFSET 100 LIMIT 50"
        );
        assert!(r.params().is_empty());
    }

    #[test]
    fn dump_page_rejects_zero_page_size() {
        let m = ConfigInfoGrayMapper::new(DialectBase::pgsql());
        let err = m
            .find_all_config_info_gray_for_dump_all_fetch_rows(&MapperContext::new().with_page(0, 0))
            .unwrap_err();
        assert!(err.is_invalid_pagination());
    }
}
