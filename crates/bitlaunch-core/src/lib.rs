//! # bitlaunch-core
//!
//! Shared plumbing for the BitLaunch API bindings.
//!
//! This crate provides the error type, the retrying HTTP transport and the
//! connection configuration used by the typed resource services in the
//! `bitlaunch` crate.
//!
//! ## Modules
//!
//! - [`error`] - Error type and HTTP status mapping
//! - [`client`] - Retry policy, HTTP client settings and the authenticated transport
//! - [`config`] - Deserializable, validated connection settings
//! - [`query`] - Query parameter builder

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod query;

// Re-export commonly used types
pub use client::{AuthScheme, ClientConfig, RetryPolicy, ServiceClient, ServiceClientBuilder};
pub use config::BitLaunchConfig;
pub use error::{Error, Result};
