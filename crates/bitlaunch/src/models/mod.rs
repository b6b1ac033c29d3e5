//! Records mirroring the JSON resources of the BitLaunch API.
//!
//! Every record tolerates missing and `null` fields (they take their
//! default) and ignores fields it does not know, so additions on the provider
//! side do not break decoding. [`Server`] is the exception for its `id`,
//! which must be present.

pub mod account;
pub mod create_options;
pub mod server;
pub mod ssh_key;
pub mod transaction;

pub use account::{Account, AccountHistory, AccountUsage, HistoryEntry, UsageEntry};
pub use create_options::{
    HostDisk, HostImage, HostImageVersion, HostOptions, HostPlanType, HostRegion, HostSize,
    HostSubRegion, ServerCreateOptions,
};
pub use server::{CreateServerOptions, Port, Protection, ProtectionProxy, RebuildOptions, Server};
pub use ssh_key::{CreateSshKeyOptions, SshKey};
pub use transaction::{CreateTransactionOptions, Transaction};

use serde::{Deserialize, Deserializer};

/// Decode `null` as the field's default value.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
