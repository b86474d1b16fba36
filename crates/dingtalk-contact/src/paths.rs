//! Remote API paths, relative to the transport's base URL.

/// User detail (`userid`, `language`).
pub const USER_GET: &str = "topapi/v2/user/get";
/// User ids of a department.
pub const USER_LIST_IDS: &str = "topapi/user/listid";
/// Paged department members, basic fields.
pub const USER_LIST_SIMPLE: &str = "topapi/user/listsimple";
/// Paged department members, full detail.
pub const USER_LIST_DETAILED: &str = "topapi/v2/user/list";
/// Administrator list.
pub const ADMIN_LIST: &str = "user/get_admin";
/// Contact scope of an administrator.
pub const ADMIN_SCOPE: &str = "topapi/user/get_admin_scope";
/// Resolve a unionid to a userid.
pub const USERID_BY_UNIONID: &str = "user/getUseridByUnionid";
/// Create a user.
pub const USER_CREATE: &str = "user/create";
/// Update a user.
pub const USER_UPDATE: &str = "user/update";
/// Delete a user.
pub const USER_DELETE: &str = "user/delete";
/// Resolve a login-free `code` to a user.
pub const USER_BY_CODE: &str = "user/getuserinfo";
/// Grant roles to users in bulk.
pub const ROLES_ADD: &str = "topapi/role/addrolesforemps";
/// Revoke roles from users in bulk.
pub const ROLES_REMOVE: &str = "topapi/role/removerolesforemps";
/// Organisation head count.
pub const ORG_USER_COUNT: &str = "user/get_org_user_count";
/// Resolve a mobile number to a userid.
pub const USERID_BY_MOBILE: &str = "topapi/v2/user/getbymobile";
/// Users who have not logged in on a given date.
pub const INACTIVE_USERS: &str = "topapi/inactive/user/get";
