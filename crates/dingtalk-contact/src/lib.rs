//! DingTalk contact directory client.
//!
//! [`ContactClient`] exposes one method per directory call (user lookup, department
//! listings, administrators, role assignment, head counts). Each method translates its
//! arguments into the call's wire parameters, dispatches exactly once through an injected
//! [`Transport`], and returns the decoded response untouched.
//!
//! ```no_run
//! use std::sync::Arc;
//! use dingtalk_contact::{ContactClient, DeptUserQuery};
//! use dingtalk_core::HttpTransportBuilder;
//!
//! # async fn run() -> dingtalk_core::Result<()> {
//! let transport = HttpTransportBuilder::new("https://oapi.dingtalk.com")?
//!     .with_access_token("token")
//!     .build()?;
//! let client = ContactClient::new(Arc::new(transport));
//!
//! let page = client.get_users(1, &DeptUserQuery::default()).await?;
//! println!("{page}");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod client;
pub mod models;
mod params;
pub mod paths;

pub use client::ContactClient;
pub use dingtalk_core::{Error, Transport};
pub use models::{format_query_date, DeptUserQuery, Language, OrderField, DEFAULT_PAGE_SIZE};
pub use params::{merge_params, IdList, UserAttributes};

/// Convenient result alias that reuses the core error type.
pub type Result<T> = dingtalk_core::Result<T>;
