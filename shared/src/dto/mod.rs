//! View models and wire records.

pub mod indexer;
pub mod token;

pub use indexer::{OwnerRecord, TransferRecord};
pub use token::{NewTokenRequest, TokenSummary};
