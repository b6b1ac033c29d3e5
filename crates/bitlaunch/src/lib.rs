//! Typed client for the BitLaunch hosting API.
//!
//! [`BitLaunchClient`] owns the authenticated transport; each resource
//! service borrows it for a single round trip per call.
//!
//! ```no_run
//! # async fn run() -> bitlaunch::Result<()> {
//! use bitlaunch::{BitLaunchClient, CreateServerOptions};
//!
//! let client = BitLaunchClient::new("api-token")?;
//! let account = client.account().show().await?;
//! println!("balance: {}", account.balance);
//!
//! let server = client
//!     .servers()
//!     .create(&CreateServerOptions::new("web-1", 4, "s-1", "r-1"))
//!     .await?;
//! println!("created {}", server.id);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod client;
pub mod models;
pub mod services;

pub use bitlaunch_core::{AuthScheme, BitLaunchConfig, ClientConfig, Error, RetryPolicy};
pub use client::{BitLaunchClient, BitLaunchClientBuilder};
pub use models::{
    Account, AccountHistory, AccountUsage, CreateServerOptions, CreateSshKeyOptions,
    CreateTransactionOptions, HistoryEntry, HostDisk, HostImage, HostImageVersion, HostOptions,
    HostPlanType, HostRegion, HostSize, HostSubRegion, Port, Protection, ProtectionProxy,
    RebuildOptions, Server, ServerCreateOptions, SshKey, Transaction, UsageEntry,
};
pub use services::{
    AccountService, CreateOptionsService, ServerService, SshKeyService, TransactionService,
};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = bitlaunch_core::Result<T>;
