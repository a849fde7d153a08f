//! # Shared Utility Functions
//!
//! Formatting helpers used across the launchpad screens.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - ellipsis an address (first N and last M characters)
//! - [`truncate_address`] - `format_address` with the default 6/4 split
//!
//! ## Amount Formatting
//!
//! - [`format_eth`] - wei to a decimal ETH display string

use alloy_primitives::utils::format_ether;
use alloy_primitives::U256;

/// Format an address or hash by showing the first `prefix_len` and last
/// `suffix_len` characters.
///
/// If the value is shorter than `prefix_len + suffix_len`, it is returned
/// as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x1f9090aaE28b8a3dCeaDf281B0F12828e676c326";
/// assert_eq!(format_address(addr, 6, 4), "0x1f90...c326");
/// assert_eq!(format_address(addr, 8, 6), "0x1f9090...76c326");
/// assert_eq!(format_address("short", 6, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Too short to truncate meaningfully; also guards the slicing below.
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    format!(
        "{}...{}",
        &address[..prefix_len],
        &address[address_len - suffix_len..]
    )
}

/// Ellipsis an address with the default 6/4 split used by the card grids
/// and tables.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Convert a wei amount to a decimal ETH string for display.
///
/// Trailing zeros are trimmed down to one decimal place, matching the
/// convention the rest of the UI copy assumes ("24.0 ETH", "0.0001 ETH").
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::U256;
/// use shared::utils::format_eth;
///
/// assert_eq!(format_eth(U256::ZERO), "0.0");
/// assert_eq!(format_eth(U256::from(100_000_000_000_000u64)), "0.0001");
/// ```
pub fn format_eth(wei: U256) -> String {
    let full = format_ether(wei);
    match full.split_once('.') {
        Some((whole, frac)) => {
            let trimmed = frac.trim_end_matches('0');
            if trimmed.is_empty() {
                format!("{}.0", whole)
            } else {
                format!("{}.{}", whole, trimmed)
            }
        }
        None => format!("{}.0", full),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::utils::parse_ether;

    #[test]
    fn test_format_address() {
        let addr = "0x1f9090aaE28b8a3dCeaDf281B0F12828e676c326";
        assert_eq!(format_address(addr, 6, 4), "0x1f90...c326");
        assert_eq!(truncate_address(addr), "0x1f90...c326");
        assert_eq!(format_address("0xabc", 6, 4), "0xabc");
    }

    #[test]
    fn test_format_eth_trims_to_one_place() {
        assert_eq!(format_eth(U256::ZERO), "0.0");
        assert_eq!(format_eth(parse_ether("24").unwrap()), "24.0");
        assert_eq!(format_eth(parse_ether("0.0001").unwrap()), "0.0001");
        assert_eq!(format_eth(parse_ether("1.5").unwrap()), "1.5");
    }

    #[test]
    fn test_format_eth_round_trips_exactly() {
        // The display string must reparse to the same wei amount: the
        // confirmation prompt shows this string while the transaction
        // attaches the raw value.
        for eth in ["0.000123", "3.25", "24", "0.0001"] {
            let wei = parse_ether(eth).unwrap();
            assert_eq!(parse_ether(&format_eth(wei)).unwrap(), wei);
        }
    }
}
