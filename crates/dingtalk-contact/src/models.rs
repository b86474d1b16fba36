//! Request models for the contact directory calls.
//!
//! The request bodies are plain serde structs so that every documented wire key is always
//! emitted, including keys whose value is `null`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Page size used by department listings when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Response language for user fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// Simplified Chinese.
    #[default]
    #[serde(rename = "zh_CN")]
    ZhCn,
    /// English.
    #[serde(rename = "en_US")]
    EnUs,
}

/// Ordering of department members.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderField {
    /// Ascending by department entry time.
    EntryAsc,
    /// Descending by department entry time.
    EntryDesc,
    /// Ascending by last modification time.
    ModifyAsc,
    /// Descending by last modification time.
    ModifyDesc,
    /// Custom ordering configured in the admin console.
    #[default]
    Custom,
}

/// Paging and presentation options for department member listings.
///
/// Paging is offset based: `cursor` is the starting position and `size` the page length.
/// Callers advance with [`DeptUserQuery::next_page`] until a short page comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeptUserQuery {
    /// Starting offset.
    pub cursor: u64,
    /// Page length.
    pub size: u32,
    /// Member ordering.
    pub order_field: OrderField,
    /// Response language.
    pub language: Language,
}

impl DeptUserQuery {
    /// Query for the first page with default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cursor: 0,
            size: DEFAULT_PAGE_SIZE,
            order_field: OrderField::Custom,
            language: Language::ZhCn,
        }
    }

    /// Set the starting offset.
    #[must_use]
    pub const fn with_cursor(mut self, cursor: u64) -> Self {
        self.cursor = cursor;
        self
    }

    /// Set the page length.
    #[must_use]
    pub const fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the member ordering.
    #[must_use]
    pub const fn with_order(mut self, order_field: OrderField) -> Self {
        self.order_field = order_field;
        self
    }

    /// Set the response language.
    #[must_use]
    pub const fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// The same query advanced by one page.
    #[must_use]
    pub const fn next_page(self) -> Self {
        self.with_cursor(self.cursor.saturating_add(self.size as u64))
    }

    pub(crate) const fn into_request(self, dept_id: i64) -> DeptUserListRequest {
        DeptUserListRequest {
            dept_id,
            cursor: self.cursor,
            size: self.size,
            order_field: self.order_field,
            language: self.language,
            contain_access_limit: false,
        }
    }
}

impl Default for DeptUserQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a date in the `yyyyMMdd` form expected by the inactive-user query.
#[must_use]
pub fn format_query_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

#[derive(Debug, Serialize)]
pub(crate) struct GetUserRequest<'a> {
    pub userid: &'a str,
    pub language: Option<Language>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeptRequest {
    pub dept_id: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeptUserListRequest {
    pub dept_id: i64,
    pub cursor: u64,
    pub size: u32,
    pub order_field: OrderField,
    pub language: Language,
    pub contain_access_limit: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct RoleAssignmentRequest {
    #[serde(rename = "userIds")]
    pub user_ids: String,
    #[serde(rename = "roleIds")]
    pub role_ids: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct MobileRequest<'a> {
    pub mobile: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct InactiveUsersRequest<'a> {
    pub query_date: &'a str,
    pub offset: u64,
    pub size: u32,
}
