//! Contract bindings for the launchpad factory and its meme tokens.
//!
//! Only the interface is owned here; both contracts are deployed
//! externally. Calldata is produced with [`alloy_sol_types::SolCall`]
//! encoding and results are decoded from raw `eth_call` return bytes -
//! there is no provider stack behind these types.

use alloy_sol_types::sol;

sol! {
    /// Launchpad factory: token registry, bonding-curve pricing, and the
    /// two payable entry points the app drives.
    #[derive(Debug, PartialEq)]
    contract Launchpad {
        /// One registry row per launched token. `fundingRaised` is wei.
        struct TokenListing {
            string name;
            string symbol;
            string description;
            string tokenImageUrl;
            uint256 fundingRaised;
            address tokenAddress;
            address creatorAddress;
        }

        function getAllMemeTokens() external view returns (TokenListing[] memory);

        /// Bonding-curve price in wei for buying `tokensToBuy` whole tokens
        /// at the given circulating supply.
        function calculateCost(uint256 currentSupply, uint256 tokensToBuy) external pure returns (uint256);

        function createMemeToken(
            string memory name,
            string memory symbol,
            string memory imageUrl,
            string memory description
        ) external payable returns (address);

        function buyMemeToken(address memeTokenAddress, uint256 tokenQty) external payable returns (uint256);
    }
}

sol! {
    /// The slice of the ERC-20 surface the detail screen reads.
    #[derive(Debug, PartialEq)]
    contract MemeToken {
        function totalSupply() external view returns (uint256);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use alloy_sol_types::SolCall;

    #[test]
    fn calculate_cost_calldata_carries_selector_and_args() {
        let call = Launchpad::calculateCostCall {
            currentSupply: U256::from(150_000u64),
            tokensToBuy: U256::from(25u64),
        };
        let data = call.abi_encode();
        assert_eq!(&data[..4], Launchpad::calculateCostCall::SELECTOR);

        let decoded = Launchpad::calculateCostCall::abi_decode(&data).unwrap();
        assert_eq!(decoded.currentSupply, U256::from(150_000u64));
        assert_eq!(decoded.tokensToBuy, U256::from(25u64));
    }

    #[test]
    fn entry_points_have_distinct_selectors() {
        let selectors = [
            Launchpad::getAllMemeTokensCall::SELECTOR,
            Launchpad::calculateCostCall::SELECTOR,
            Launchpad::createMemeTokenCall::SELECTOR,
            Launchpad::buyMemeTokenCall::SELECTOR,
            MemeToken::totalSupplyCall::SELECTOR,
        ];
        for (i, a) in selectors.iter().enumerate() {
            for b in selectors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
