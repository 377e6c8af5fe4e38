//! Shared fixtures: one valid request per operation.

#![allow(dead_code)]

use chrono::NaiveDate;
use pgsql_mapper::prelude::*;

pub fn timestamp() -> Value {
    NaiveDate::from_ymd_opt(2024, 1, 2)
        .and_then(|d| d.and_hms_opt(3, 4, 5))
        .map(Value::from)
        .unwrap()
}

pub fn tag_page_ctx() -> MapperContext {
    MapperContext::new()
        .with_where(fields::TENANT_ID, "public")
        .with_where(fields::DATA_ID, "app.yaml")
        .with_where(fields::GROUP_ID, "DEFAULT_GROUP")
        .with_where(fields::APP_NAME, "shop")
        .with_where(fields::CONTENT, "%timeout%")
        .with_where(fields::TAG_ARR, vec!["blue", "canary"])
        .with_page(20, 10)
}

pub fn capacity_ctx() -> MapperContext {
    MapperContext::new()
        .with_update(fields::GROUP_ID, "DEFAULT_GROUP")
        .with_update(fields::QUOTA, 200_i32)
        .with_update(fields::MAX_SIZE, 102_400_i32)
        .with_update(fields::MAX_AGGR_COUNT, 10_000_i32)
        .with_update(fields::MAX_AGGR_SIZE, 2_097_152_i32)
        .with_update(fields::GMT_CREATE, timestamp())
        .with_update(fields::GMT_MODIFIED, timestamp())
        .with_where(fields::GROUP_ID, "DEFAULT_GROUP")
        .with_where(fields::USAGE, 200_i32)
        .with_where(fields::ID, 0_i64)
        .with_page(0, 100)
}

pub fn tenant_ctx() -> MapperContext {
    MapperContext::new()
        .with_where("kp", "1")
        .with_where("tenant_id", "dev")
        .with_update("kp", "1")
        .with_update("tenant_id", "dev")
        .with_update("tenant_name", "Development")
        .with_update("tenant_desc", "dev namespace")
}

/// Every operation with a valid request, labelled by operation name.
pub fn all_statements(registry: &MapperRegistry) -> Vec<(&'static str, MapperResult<QueryResult>)> {
    let tags = registry
        .get_as::<ConfigTagsRelationMapper>(tables::CONFIG_TAGS_RELATION)
        .unwrap();
    let capacity = registry
        .get_as::<GroupCapacityMapper>(tables::GROUP_CAPACITY)
        .unwrap();
    let gray = registry
        .get_as::<ConfigInfoGrayMapper>(tables::CONFIG_INFO_GRAY)
        .unwrap();
    let tenants = registry
        .get_as::<TenantInfoMapper>(tables::TENANT_INFO)
        .unwrap();

    let tag_ctx = tag_page_ctx();
    let cap_ctx = capacity_ctx();
    let ten_ctx = tenant_ctx();

    vec![
        ("tags.fetch", tags.find_config_info_4_page_fetch_rows(&tag_ctx)),
        ("tags.fetch_like", tags.find_config_info_like_4_page_fetch_rows(&tag_ctx)),
        ("tags.count", tags.find_config_info_4_page_count_rows(&tag_ctx)),
        ("tags.count_like", tags.find_config_info_like_4_page_count_rows(&tag_ctx)),
        ("capacity.select", capacity.select(&cap_ctx)),
        ("capacity.insert_into_select", capacity.insert_into_select(&cap_ctx)),
        (
            "capacity.insert_into_select_by_where",
            capacity.insert_into_select_by_where(&cap_ctx),
        ),
        ("capacity.increment", capacity.increment_usage_by_where(&cap_ctx)),
        (
            "capacity.increment_quota_zero",
            capacity.increment_usage_by_where_quota_equal_zero(&cap_ctx),
        ),
        (
            "capacity.increment_quota_non_zero",
            capacity.increment_usage_by_where_quota_not_equal_zero(&cap_ctx),
        ),
        ("capacity.decrement", capacity.decrement_usage_by_where(&cap_ctx)),
        ("capacity.update_usage", capacity.update_usage(&cap_ctx)),
        ("capacity.update_usage_by_where", capacity.update_usage_by_where(&cap_ctx)),
        ("capacity.select_group_info_by_size", capacity.select_group_info_by_size(&cap_ctx)),
        (
            "gray.dump",
            gray.find_all_config_info_gray_for_dump_all_fetch_rows(&cap_ctx),
        ),
        (
            "tenant.select",
            tenants.select(&["tenant_id", "tenant_name"], &["kp", "tenant_id"], &ten_ctx),
        ),
        (
            "tenant.insert",
            tenants.insert(
                &[
                    "kp",
                    "tenant_id",
                    "tenant_name",
                    "tenant_desc",
                    "gmt_create@NOW()",
                    "gmt_modified@NOW()",
                ],
                &ten_ctx,
            ),
        ),
        (
            "tenant.update",
            tenants.update(
                &["tenant_name", "tenant_desc", "gmt_modified@NOW()"],
                &["kp", "tenant_id"],
                &ten_ctx,
            ),
        ),
        ("tenant.delete", tenants.delete(&["kp", "tenant_id"], &ten_ctx)),
        ("tenant.count", tenants.count(&["kp"], &ten_ctx)),
    ]
}
