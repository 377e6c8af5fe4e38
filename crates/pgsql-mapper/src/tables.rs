//! Table names of the persisted schema.

pub const CONFIG_INFO: &str = "config_info";
pub const CONFIG_INFO_GRAY: &str = "config_info_gray";
pub const CONFIG_TAGS_RELATION: &str = "config_tags_relation";
pub const GROUP_CAPACITY: &str = "group_capacity";
pub const TENANT_INFO: &str = "tenant_info";
