//! Application constants
//!
//! Deployment-specific values (RPC endpoint, factory address, indexer key)
//! are overridable through the build environment; everything else is fixed.

/// JSON-RPC endpoint used for contract reads and receipt polling.
pub const RPC_URL: &str = match option_env!("LAUNCHPAD_RPC_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8545",
};

/// Deployed launchpad factory address.
pub const FACTORY_ADDRESS: &str = match option_env!("LAUNCHPAD_FACTORY_ADDRESS") {
    Some(addr) => addr,
    None => "0x0000000000000000000000000000000000000000",
};

/// API key for the indexer, supplied out of band.
pub const INDEXER_API_KEY: &str = match option_env!("LAUNCHPAD_INDEXER_API_KEY") {
    Some(key) => key,
    None => "",
};

// Indexer endpoints (Moralis-compatible ERC-20 API)
pub const INDEXER_API_BASE: &str = "https://deep-index.moralis.io/api/v2.2";
pub const INDEXER_CHAIN: &str = "sepolia";

// Block explorer used for address/transaction links
pub const EXPLORER_BASE: &str = "https://sepolia.etherscan.io";

// Receipt polling cadence after a transaction is submitted
pub const RECEIPT_POLL_MS: u32 = 2_000;
pub const RECEIPT_POLL_ATTEMPTS: u32 = 90;

// How long a toast stays on screen
pub const TOAST_DISMISS_MS: u32 = 6_000;
