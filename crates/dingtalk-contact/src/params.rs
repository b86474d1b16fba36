//! Parameter shaping helpers: identifier lists and attribute merging.

use crate::Result;
use dingtalk_core::Error;
use serde_json::{Map, Value};
use std::fmt;

/// Caller-prepared user attributes forwarded as a JSON object body.
pub type UserAttributes = Map<String, Value>;

/// One identifier or several, sent on the wire as a single comma-joined string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdList {
    /// A single identifier, or a list the caller already joined.
    Single(String),
    /// Separate identifiers to be joined with `,`.
    Many(Vec<String>),
}

impl IdList {
    /// Render the wire form. `Single` is passed through untouched, so an already
    /// comma-joined string normalizes to itself.
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::Single(id) => id.clone(),
            Self::Many(ids) => ids.join(","),
        }
    }
}

impl fmt::Display for IdList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl From<&str> for IdList {
    fn from(id: &str) -> Self {
        Self::Single(id.to_string())
    }
}

impl From<String> for IdList {
    fn from(id: String) -> Self {
        Self::Single(id)
    }
}

impl From<Vec<String>> for IdList {
    fn from(ids: Vec<String>) -> Self {
        Self::Many(ids)
    }
}

impl From<Vec<&str>> for IdList {
    fn from(ids: Vec<&str>) -> Self {
        Self::Many(ids.into_iter().map(str::to_string).collect())
    }
}

impl From<&[String]> for IdList {
    fn from(ids: &[String]) -> Self {
        Self::Many(ids.to_vec())
    }
}

impl From<&[&str]> for IdList {
    fn from(ids: &[&str]) -> Self {
        Self::Many(ids.iter().map(|id| (*id).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for IdList {
    fn from(ids: [&str; N]) -> Self {
        Self::Many(ids.iter().map(|id| (*id).to_string()).collect())
    }
}

/// Merge caller-supplied attributes underneath the explicit parameters the client
/// injects, returning a new map.
///
/// Explicit keys come first, followed by the supplied keys in their original order.
/// A supplied key that repeats an explicit key with the same value is accepted.
///
/// # Errors
///
/// Returns [`Error::ParameterConflict`] when a supplied key repeats an explicit key with
/// a different value.
pub fn merge_params(explicit: &UserAttributes, supplied: &UserAttributes) -> Result<UserAttributes> {
    let mut merged = explicit.clone();
    for (key, value) in supplied {
        match explicit.get(key) {
            Some(existing) if existing != value => {
                return Err(Error::ParameterConflict { key: key.clone() });
            }
            Some(_) => {}
            None => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(merged)
}
