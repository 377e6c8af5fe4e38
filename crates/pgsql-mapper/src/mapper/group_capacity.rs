//! Capacity counters per config group (`group_capacity`).
//!
//! The `usage` column collides with a keyword and is always rendered through
//! the dialect's identifier quoting.

use crate::base::DialectBase;
use crate::context::{MapperContext, Page};
use crate::dialect::{PgSql, TrustedFunction};
use crate::error::MapperResult;
use crate::fields;
use crate::mapper::Mapper;
use crate::registry::MapperRegistration;
use crate::sql::{QueryResult, Sql, sql};
use crate::tables;
use std::sync::Arc;

/// Update-parameters written by the insert-from-select statements, in column order.
const SEED_FIELDS: [&str; 7] = [
    fields::GROUP_ID,
    fields::QUOTA,
    fields::MAX_SIZE,
    fields::MAX_AGGR_COUNT,
    fields::MAX_AGGR_SIZE,
    fields::GMT_CREATE,
    fields::GMT_MODIFIED,
];

/// Mapper for `group_capacity`.
#[derive(Debug, Clone, Default)]
pub struct GroupCapacityMapper {
    base: DialectBase,
}

impl GroupCapacityMapper {
    pub fn new(base: DialectBase) -> Self {
        Self { base }
    }

    fn usage(&self) -> MapperResult<String> {
        self.base.quote_ident("usage")
    }

    /// Capacity row of one group.
    pub fn select(&self, ctx: &MapperContext) -> MapperResult<QueryResult> {
        self.base.build(tables::GROUP_CAPACITY, "select", || {
            let group_id = ctx.required_where(fields::GROUP_ID)?;
            let mut q = sql(format!(
                "SELECT id, quota, {}, max_size, max_aggr_count, max_aggr_size, group_id \
                 FROM group_capacity WHERE group_id = ",
                self.usage()?
            ));
            q.push_bind(group_id.clone());
            Ok(q)
        })
    }

    /// Seed a capacity row whose usage is the total number of configs.
    pub fn insert_into_select(&self, ctx: &MapperContext) -> MapperResult<QueryResult> {
        self.base.build(tables::GROUP_CAPACITY, "insert_into_select", || {
            let mut q = self.seed_from_config_info(ctx)?;
            q.push(" FROM config_info");
            Ok(q)
        })
    }

    /// Seed a capacity row whose usage counts the group's configs in the
    /// default tenant.
    pub fn insert_into_select_by_where(&self, ctx: &MapperContext) -> MapperResult<QueryResult> {
        self.base
            .build(tables::GROUP_CAPACITY, "insert_into_select_by_where", || {
                let mut q = self.seed_from_config_info(ctx)?;
                let group_id = ctx.required_where(fields::GROUP_ID)?;
                q.push(" FROM config_info WHERE group_id = ")
                    .push_bind(group_id.clone());
                q.push(" AND tenant_id = ")
                    .push_bind(self.base.default_namespace_id());
                Ok(q)
            })
    }

    /// Unconditional `usage + 1`.
    pub fn increment_usage_by_where(&self, ctx: &MapperContext) -> MapperResult<QueryResult> {
        self.base
            .build(tables::GROUP_CAPACITY, "increment_usage_by_where", || {
                self.step_usage(ctx, '+')
            })
    }

    /// `usage + 1` for groups without an explicit quota, bounded by the
    /// caller-supplied default quota (`usage` where-parameter).
    pub fn increment_usage_by_where_quota_equal_zero(
        &self,
        ctx: &MapperContext,
    ) -> MapperResult<QueryResult> {
        self.base.build(
            tables::GROUP_CAPACITY,
            "increment_usage_by_where_quota_equal_zero",
            || {
                let usage = self.usage()?;
                let bound = ctx.required_where(fields::USAGE)?;
                let mut q = self.step_usage(ctx, '+')?;
                q.push(&format!(" AND {usage} < "))
                    .push_bind(bound.clone())
                    .push(" AND quota = 0");
                Ok(q)
            },
        )
    }

    /// `usage + 1` for groups with an explicit quota, bounded by that quota.
    pub fn increment_usage_by_where_quota_not_equal_zero(
        &self,
        ctx: &MapperContext,
    ) -> MapperResult<QueryResult> {
        self.base.build(
            tables::GROUP_CAPACITY,
            "increment_usage_by_where_quota_not_equal_zero",
            || {
                let usage = self.usage()?;
                let mut q = self.step_usage(ctx, '+')?;
                q.push(&format!(" AND {usage} < quota AND quota != 0"));
                Ok(q)
            },
        )
    }

    /// `usage - 1`, never below zero.
    pub fn decrement_usage_by_where(&self, ctx: &MapperContext) -> MapperResult<QueryResult> {
        self.base
            .build(tables::GROUP_CAPACITY, "decrement_usage_by_where", || {
                let usage = self.usage()?;
                let mut q = self.step_usage(ctx, '-')?;
                q.push(&format!(" AND {usage} > 0"));
                Ok(q)
            })
    }

    /// Recompute usage as the total number of configs.
    pub fn update_usage(&self, ctx: &MapperContext) -> MapperResult<QueryResult> {
        self.base.build(tables::GROUP_CAPACITY, "update_usage", || {
            let gmt_modified = ctx.required_update(fields::GMT_MODIFIED)?;
            let group_id = ctx.required_where(fields::GROUP_ID)?;
            let mut q = sql(format!(
                "UPDATE group_capacity SET {} = (SELECT {} FROM config_info), gmt_modified = ",
                self.usage()?,
                self.base.function(TrustedFunction::Count)
            ));
            q.push_bind(gmt_modified.clone())
                .push(" WHERE group_id = ")
                .push_bind(group_id.clone());
            Ok(q)
        })
    }

    /// Recompute usage as the group's config count in the default tenant.
    pub fn update_usage_by_where(&self, ctx: &MapperContext) -> MapperResult<QueryResult> {
        self.base
            .build(tables::GROUP_CAPACITY, "update_usage_by_where", || {
                let group_id = ctx.required_where(fields::GROUP_ID)?;
                let gmt_modified = ctx.required_update(fields::GMT_MODIFIED)?;
                let mut q = sql(format!(
                    "UPDATE group_capacity SET {} = (SELECT {} FROM config_info WHERE group_id = ",
                    self.usage()?,
                    self.base.function(TrustedFunction::Count)
                ));
                q.push_bind(group_id.clone())
                    .push(" AND tenant_id = ")
                    .push_bind(self.base.default_namespace_id())
                    .push("), gmt_modified = ")
                    .push_bind(gmt_modified.clone())
                    .push(" WHERE group_id = ")
                    .push_bind(group_id.clone());
                Ok(q)
            })
    }

    /// Groups with `id` greater than the `id` where-parameter, one page of
    /// `page_size` rows.
    pub fn select_group_info_by_size(&self, ctx: &MapperContext) -> MapperResult<QueryResult> {
        self.base
            .build(tables::GROUP_CAPACITY, "select_group_info_by_size", || {
                let page = Page::new(0, ctx.page_size())?;
                let id = ctx.required_where(fields::ID)?;
                let mut q = sql("SELECT id, group_id FROM group_capacity WHERE id > ");
                q.push_bind(id.clone()).push_page(page);
                Ok(q)
            })
    }

    /// `INSERT INTO group_capacity (...) SELECT ?, ?, count(*), ?, ?, ?, ?, ?`
    fn seed_from_config_info(&self, ctx: &MapperContext) -> MapperResult<Sql> {
        let values = SEED_FIELDS
            .iter()
            .map(|name| ctx.required_update(name).cloned())
            .collect::<MapperResult<Vec<_>>>()?;
        let mut values = values.into_iter();

        let mut q = sql(format!(
            "INSERT INTO group_capacity (group_id, quota, {}, max_size, max_aggr_count, \
             max_aggr_size, gmt_create, gmt_modified) SELECT ",
            self.usage()?
        ));
        // group_id, quota
        for v in values.by_ref().take(2) {
            q.push_bind(v).push(", ");
        }
        q.push(self.base.function(TrustedFunction::Count));
        for v in values {
            q.push(", ").push_bind(v);
        }
        Ok(q)
    }

    /// `UPDATE group_capacity SET usage = usage <op> 1, gmt_modified = ? WHERE group_id = ?`
    fn step_usage(&self, ctx: &MapperContext, op: char) -> MapperResult<Sql> {
        let gmt_modified = ctx.required_update(fields::GMT_MODIFIED)?;
        let group_id = ctx.required_where(fields::GROUP_ID)?;
        let usage = self.usage()?;
        let mut q = sql(format!(
            "UPDATE group_capacity SET {usage} = {usage} {op} 1, gmt_modified = "
        ));
        q.push_bind(gmt_modified.clone())
            .push(" WHERE group_id = ")
            .push_bind(group_id.clone());
        Ok(q)
    }
}

impl Mapper for GroupCapacityMapper {
    fn table_name(&self) -> &'static str {
        tables::GROUP_CAPACITY
    }

    fn base(&self) -> &DialectBase {
        &self.base
    }
}

fn build(base: DialectBase) -> Arc<dyn Mapper> {
    Arc::new(GroupCapacityMapper::new(base))
}

inventory::submit! {
    MapperRegistration {
        data_source: PgSql::ID,
        table_name: tables::GROUP_CAPACITY,
        build,
    }
}
