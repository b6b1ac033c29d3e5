//! Resource services.
//!
//! Each service borrows the client's transport and performs exactly one
//! round trip per call.

mod account;
mod create_options;
mod server;
mod ssh_key;
mod transaction;

pub use account::AccountService;
pub use create_options::CreateOptionsService;
pub use server::ServerService;
pub use ssh_key::SshKeyService;
pub use transaction::TransactionService;
