//! # dingtalk-core
//!
//! Core types and utilities for working with the DingTalk open platform.
//!
//! This crate provides the shared error type, configuration, and the transport seam
//! that higher-level API clients dispatch through.
//!
//! ## Modules
//!
//! - [`error`] - Error types and HTTP status code mapping
//! - [`config`] - Configuration structures for the HTTP transport
//! - [`client`] - HTTP client tuning (timeouts, connection pooling)
//! - [`query`] - Query parameter builder for keyed GET calls
//! - [`transport`] - The `Transport` trait and its reqwest-backed implementation

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod transport;

// Re-export commonly used types
pub use error::{Error, Result};
pub use transport::{HttpTransport, HttpTransportBuilder, Transport};
