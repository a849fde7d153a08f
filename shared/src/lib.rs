//! # Shared Launchpad Library
//!
//! This library defines the app-side contract with the two external data
//! sources of the launchpad front end - the deployed factory contract and
//! the blockchain indexer - plus every piece of view-model logic that does
//! not need a browser to run.
//!
//! ## Structure
//!
//! - **[`abi`]**: `sol!` bindings for the launchpad factory and the token
//!   ERC-20 surface the app reads
//! - **[`dto`]**: view models and wire records
//!   - **[`dto::token`]**: token summaries, search filtering, create-form validation
//!   - **[`dto::indexer`]**: holder and transfer records from the indexer REST API
//! - **[`curve`]**: display-only bonding-curve arithmetic
//! - **[`purchase`]**: the two-phase quote/confirm purchase state machine
//! - **[`utils`]**: address and amount formatting helpers
//!
//! ## Wire Format
//!
//! Indexer records deserialize from JSON with `serde` using the field names
//! the indexer emits (snake_case). Contract data is ABI-encoded binary,
//! handled by [`abi`]; the transport lives in the web crate.
//!
//! ## Usage in the web app
//!
//! ```rust
//! use shared::dto::token::{TokenSummary, filter_tokens};
//! use shared::utils::format_address;
//!
//! let tokens: Vec<TokenSummary> = vec![];
//! let visible = filter_tokens(&tokens, "doge");
//! assert!(visible.is_empty());
//!
//! let addr = "0x1f9090aaE28b8a3dCeaDf281B0F12828e676c326";
//! assert_eq!(format_address(addr, 6, 4), "0x1f90...c326");
//! ```

pub mod abi;
pub mod curve;
pub mod dto;
pub mod purchase;
pub mod utils;

pub use dto::*;
pub use utils::*;
