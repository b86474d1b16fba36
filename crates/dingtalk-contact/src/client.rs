//! Contact directory client implementation.

use crate::models::{
    DeptRequest, DeptUserQuery, GetUserRequest, InactiveUsersRequest, Language, MobileRequest,
    RoleAssignmentRequest,
};
use crate::params::{merge_params, IdList, UserAttributes};
use crate::{paths, Result};
use dingtalk_core::query::QueryParams;
use dingtalk_core::Transport;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Stateless client for the DingTalk contact directory.
///
/// Every method issues exactly one call through the shared [`Transport`] and returns the
/// decoded response as-is. Transport failures propagate unchanged.
#[derive(Clone)]
pub struct ContactClient {
    transport: Arc<dyn Transport>,
}

impl ContactClient {
    /// Create a client over a transport owned by the application.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch a user's details. An omitted language is sent as `null`.
    pub async fn get(&self, userid: &str, language: Option<Language>) -> Result<Value> {
        self.post(paths::USER_GET, &GetUserRequest { userid, language }).await
    }

    /// List the user ids of a department.
    pub async fn get_user_ids(&self, dept_id: i64) -> Result<Value> {
        self.post(paths::USER_LIST_IDS, &DeptRequest { dept_id }).await
    }

    /// List one page of department members with basic fields.
    pub async fn get_users(&self, dept_id: i64, query: &DeptUserQuery) -> Result<Value> {
        self.post(paths::USER_LIST_SIMPLE, &query.into_request(dept_id)).await
    }

    /// List one page of department members with full details.
    pub async fn get_detailed_users(&self, dept_id: i64, query: &DeptUserQuery) -> Result<Value> {
        self.post(paths::USER_LIST_DETAILED, &query.into_request(dept_id)).await
    }

    /// List the organisation's administrators.
    pub async fn administrators(&self) -> Result<Value> {
        self.get_with(paths::ADMIN_LIST, QueryParams::new()).await
    }

    /// Fetch the departments an administrator may manage.
    pub async fn administrator_scope(&self, userid: &str) -> Result<Value> {
        self.get_with(paths::ADMIN_SCOPE, QueryParams::new().push("userid", userid)).await
    }

    /// Resolve a unionid to the organisation-local userid.
    pub async fn get_userid_by_unionid(&self, unionid: &str) -> Result<Value> {
        self.get_with(
            paths::USERID_BY_UNIONID,
            QueryParams::new().push("unionid", unionid),
        )
        .await
    }

    /// Create a user from fully prepared attributes, sent verbatim.
    pub async fn create(&self, attributes: &UserAttributes) -> Result<Value> {
        self.post(paths::USER_CREATE, attributes).await
    }

    /// Update a user. `userid` leads the body, followed by `attributes`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParameterConflict`](crate::Error::ParameterConflict) without
    /// issuing a call when `attributes` carries a different `userid`.
    pub async fn update(&self, userid: &str, attributes: &UserAttributes) -> Result<Value> {
        let mut explicit = UserAttributes::new();
        explicit.insert("userid".to_string(), Value::from(userid));

        let body = match merge_params(&explicit, attributes) {
            Ok(body) => body,
            Err(err) => {
                warn!(userid, error = %err, "rejecting user update");
                return Err(err);
            }
        };
        self.post(paths::USER_UPDATE, &body).await
    }

    /// Delete a user.
    pub async fn delete(&self, userid: &str) -> Result<Value> {
        self.get_with(paths::USER_DELETE, QueryParams::new().push("userid", userid)).await
    }

    /// Resolve a login-free authorization `code` to the signed-in user.
    pub async fn get_user_by_code(&self, code: &str) -> Result<Value> {
        self.get_with(paths::USER_BY_CODE, QueryParams::new().push("code", code)).await
    }

    /// Grant roles to users. Both sides accept one id or many.
    pub async fn add_roles(
        &self,
        user_ids: impl Into<IdList>,
        role_ids: impl Into<IdList>,
    ) -> Result<Value> {
        self.post(paths::ROLES_ADD, &role_assignment(user_ids, role_ids)).await
    }

    /// Revoke roles from users. Both sides accept one id or many.
    pub async fn remove_roles(
        &self,
        user_ids: impl Into<IdList>,
        role_ids: impl Into<IdList>,
    ) -> Result<Value> {
        self.post(paths::ROLES_REMOVE, &role_assignment(user_ids, role_ids)).await
    }

    /// Organisation head count, optionally restricted to activated users.
    pub async fn get_count(&self, only_active: bool) -> Result<Value> {
        self.get_with(
            paths::ORG_USER_COUNT,
            QueryParams::new().push_flag("onlyActive", only_active),
        )
        .await
    }

    /// Head count of activated users.
    pub async fn get_activated_count(&self) -> Result<Value> {
        self.get_count(true).await
    }

    /// Resolve a mobile number to a userid.
    pub async fn get_userid_by_phone(&self, mobile: &str) -> Result<Value> {
        self.post(paths::USERID_BY_MOBILE, &MobileRequest { mobile }).await
    }

    /// Users who had not logged in on `query_date` (`yyyyMMdd`, see
    /// [`format_query_date`](crate::format_query_date)).
    pub async fn get_inactive_users(
        &self,
        query_date: &str,
        offset: u64,
        size: u32,
    ) -> Result<Value> {
        self.post(
            paths::INACTIVE_USERS,
            &InactiveUsersRequest {
                query_date,
                offset,
                size,
            },
        )
        .await
    }

    async fn get_with(&self, path: &str, params: QueryParams) -> Result<Value> {
        debug!(path, "contact GET");
        self.transport.get(path, params.as_pairs()).await
    }

    async fn post<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        debug!(path, "contact POST");
        self.transport.post_json(path, &body).await
    }
}

fn role_assignment(
    user_ids: impl Into<IdList>,
    role_ids: impl Into<IdList>,
) -> RoleAssignmentRequest {
    RoleAssignmentRequest {
        user_ids: user_ids.into().to_wire(),
        role_ids: role_ids.into().to_wire(),
    }
}
