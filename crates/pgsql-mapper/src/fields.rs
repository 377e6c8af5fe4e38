//! Request-context parameter names shared with the storage-access layer.

pub const ID: &str = "id";
pub const TENANT_ID: &str = "tenantId";
pub const DATA_ID: &str = "dataId";
pub const GROUP_ID: &str = "groupId";
pub const APP_NAME: &str = "appName";
pub const CONTENT: &str = "content";
/// Tag names for the IN-list predicate.
pub const TAG_ARR: &str = "tagARR";

pub const QUOTA: &str = "quota";
pub const USAGE: &str = "usage";
pub const MAX_SIZE: &str = "maxSize";
pub const MAX_AGGR_COUNT: &str = "maxAggrCount";
pub const MAX_AGGR_SIZE: &str = "maxAggrSize";
pub const GMT_CREATE: &str = "gmtCreate";
pub const GMT_MODIFIED: &str = "gmtModified";
