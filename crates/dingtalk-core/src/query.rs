//! Convenience builder for keyed GET parameters.

use std::fmt::Display;

/// Builder for assembling query parameter pairs in insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a required key/value pair.
    #[must_use]
    pub fn push<T>(mut self, key: &'static str, value: T) -> Self
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Append a boolean as the numeric flag (`1` / `0`) the platform expects.
    #[must_use]
    pub fn push_flag(self, key: &'static str, value: bool) -> Self {
        self.push(key, u8::from(value))
    }

    /// Borrow the collected pairs.
    #[must_use]
    pub fn as_pairs(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}
