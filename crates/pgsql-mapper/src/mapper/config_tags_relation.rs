//! Tag-filtered config lookups over `config_info` joined with `config_tags_relation`.

use crate::base::DialectBase;
use crate::context::MapperContext;
use crate::dialect::{PgSql, TrustedFunction};
use crate::error::MapperResult;
use crate::fields;
use crate::mapper::Mapper;
use crate::registry::MapperRegistration;
use crate::sql::{QueryResult, Sql, sql};
use crate::tables;
use std::sync::Arc;

const FETCH_COLUMNS: &str = "a.id,a.data_id,a.group_id,a.tenant_id,a.app_name,a.content";
const FROM_JOIN: &str = " FROM config_info a LEFT JOIN config_tags_relation b ON a.id=b.id";

/// How the tenant, data-id and group predicates compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Matching {
    Exact,
    Like,
}

impl Matching {
    fn operator(self) -> &'static str {
        match self {
            Self::Exact => " = ",
            Self::Like => " LIKE ",
        }
    }
}

/// Mapper for `config_tags_relation`.
#[derive(Debug, Clone, Default)]
pub struct ConfigTagsRelationMapper {
    base: DialectBase,
}

impl ConfigTagsRelationMapper {
    pub fn new(base: DialectBase) -> Self {
        Self { base }
    }

    /// One page of configs carrying any of the given tags, exact-match filters.
    ///
    /// Where-parameters: `tenantId` (required), `dataId`, `groupId`,
    /// `appName`, `content` (each skipped when absent or blank), `tagARR`
    /// (required, non-empty).
    pub fn find_config_info_4_page_fetch_rows(
        &self,
        ctx: &MapperContext,
    ) -> MapperResult<QueryResult> {
        self.fetch_rows("find_config_info_4_page_fetch_rows", Matching::Exact, ctx)
    }

    /// Like [`find_config_info_4_page_fetch_rows`](Self::find_config_info_4_page_fetch_rows),
    /// but tenant, data id and group compare with `LIKE`.
    pub fn find_config_info_like_4_page_fetch_rows(
        &self,
        ctx: &MapperContext,
    ) -> MapperResult<QueryResult> {
        self.fetch_rows("find_config_info_like_4_page_fetch_rows", Matching::Like, ctx)
    }

    /// Total row count for [`find_config_info_4_page_fetch_rows`](Self::find_config_info_4_page_fetch_rows).
    pub fn find_config_info_4_page_count_rows(
        &self,
        ctx: &MapperContext,
    ) -> MapperResult<QueryResult> {
        self.count_rows("find_config_info_4_page_count_rows", Matching::Exact, ctx)
    }

    /// Total row count for the `LIKE` variant.
    pub fn find_config_info_like_4_page_count_rows(
        &self,
        ctx: &MapperContext,
    ) -> MapperResult<QueryResult> {
        self.count_rows("find_config_info_like_4_page_count_rows", Matching::Like, ctx)
    }

    fn fetch_rows(
        &self,
        operation: &'static str,
        matching: Matching,
        ctx: &MapperContext,
    ) -> MapperResult<QueryResult> {
        self.base.build(tables::CONFIG_TAGS_RELATION, operation, || {
            let page = ctx.page()?;
            let mut q = sql("SELECT ");
            q.push(FETCH_COLUMNS).push(FROM_JOIN);
            push_filters(&mut q, matching, ctx)?;
            q.push_page(page);
            Ok(q)
        })
    }

    fn count_rows(
        &self,
        operation: &'static str,
        matching: Matching,
        ctx: &MapperContext,
    ) -> MapperResult<QueryResult> {
        self.base.build(tables::CONFIG_TAGS_RELATION, operation, || {
            let mut q = sql("SELECT ");
            q.push(self.base.function(TrustedFunction::Count))
                .push(FROM_JOIN);
            push_filters(&mut q, matching, ctx)?;
            Ok(q)
        })
    }
}

/// Tenant first, then the optional filters in fixed order, then the tag IN-list.
fn push_filters(q: &mut Sql, matching: Matching, ctx: &MapperContext) -> MapperResult<()> {
    let op = matching.operator();

    let tenant = ctx.required_where(fields::TENANT_ID)?;
    q.push(" WHERE a.tenant_id").push(op).push_bind(tenant.clone());

    if let Some(data_id) = ctx.optional_where_text(fields::DATA_ID)? {
        q.push(" AND a.data_id").push(op).push_bind(data_id);
    }
    if let Some(group) = ctx.optional_where_text(fields::GROUP_ID)? {
        q.push(" AND a.group_id").push(op).push_bind(group);
    }
    if let Some(app_name) = ctx.optional_where_text(fields::APP_NAME)? {
        q.push(" AND a.app_name = ").push_bind(app_name);
    }
    if let Some(content) = ctx.optional_where_text(fields::CONTENT)? {
        q.push(" AND a.content LIKE ").push_bind(content);
    }

    let tags = ctx.where_text_list(fields::TAG_ARR)?;
    q.push(" AND b.tag_name IN (");
    q.push_bind_list(fields::TAG_ARR, tags.iter().cloned())?;
    q.push(")");
    Ok(())
}

impl Mapper for ConfigTagsRelationMapper {
    fn table_name(&self) -> &'static str {
        tables::CONFIG_TAGS_RELATION
    }

    fn base(&self) -> &DialectBase {
        &self.base
    }
}

fn build(base: DialectBase) -> Arc<dyn Mapper> {
    Arc::new(ConfigTagsRelationMapper::new(base))
}

inventory::submit! {
    MapperRegistration {
        data_source: PgSql::ID,
        table_name: tables::CONFIG_TAGS_RELATION,
        build,
    }
}
