//! External service boundaries: injected wallet provider, contract
//! JSON-RPC, and the indexer REST API. Every failure is mapped to
//! [`error::ServiceError`] and handled at the call site; nothing here
//! retries on its own.

pub mod error;
pub mod ethereum;
pub mod indexer;
pub mod launchpad;
pub mod rpc;

pub use error::ServiceError;
