//! Display-only bonding-curve arithmetic.
//!
//! Everything here renders progress against the launch parameters baked
//! into the factory contract. None of it is settlement-authoritative: the
//! contract recomputes cost and supply on every transaction, and these
//! figures exist purely to drive progress bars and labels.

use alloy_primitives::U256;

/// Hard cap per token, in whole tokens.
pub const MAX_SUPPLY: u64 = 800_000;

/// Tokens minted to the creator at launch, in whole tokens.
pub const INITIAL_MINT: u64 = 200_000;

/// ETH raised at which the contract migrates liquidity to the DEX.
pub const FUNDING_GOAL_ETH: f64 = 24.0;

/// Fee attached to the token-creation transaction.
pub const CREATION_FEE_ETH: &str = "0.0001";

/// 0.0001 ETH in wei.
pub const CREATION_FEE_WEI: U256 = U256::from_limbs([100_000_000_000_000, 0, 0, 0]);

/// One whole token in the contract's 18-decimal base unit.
const WEI_PER_TOKEN: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Whole tokens sold through the curve since launch.
///
/// The contract reports total supply in its 18-decimal base unit and
/// includes the initial mint; the circulating figure truncates to whole
/// tokens and subtracts the mint. The result can sit below zero if the
/// reported supply is smaller than the mint; callers pass it through
/// unmodified.
pub fn circulating_supply(raw_total_supply: U256) -> i64 {
    let whole: u64 = (raw_total_supply / WEI_PER_TOKEN).saturating_to();
    whole as i64 - INITIAL_MINT as i64
}

/// Tokens still purchasable on the curve. Unclamped: a supply above the
/// cap yields a negative remainder, which is displayed as-is.
pub fn remaining_tokens(circulating: i64) -> i64 {
    MAX_SUPPLY as i64 - circulating
}

/// Funding progress toward the goal, in percent. Unclamped: funding can
/// overshoot the goal before the contract migrates liquidity.
pub fn funding_raised_percentage(funding_raised_eth: f64) -> f64 {
    funding_raised_eth / FUNDING_GOAL_ETH * 100.0
}

/// Width of the supply progress bar, in percent.
///
/// The denominator runs the 600 000-token curve span through the same
/// wei-to-ETH division applied to supply figures, so any sold supply puts
/// the result far past 100; the bar's clipping absorbs it.
pub fn supply_progress_percentage(circulating: i64) -> f64 {
    let span_as_eth = (MAX_SUPPLY - INITIAL_MINT) as f64 / 1e18;
    ((circulating as f64 - INITIAL_MINT as f64) / span_as_eth) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::utils::parse_ether;

    #[test]
    fn circulating_subtracts_initial_mint() {
        let raw = parse_ether("400000").unwrap();
        assert_eq!(circulating_supply(raw), 200_000);
        assert_eq!(circulating_supply(U256::ZERO), -(INITIAL_MINT as i64));
    }

    #[test]
    fn circulating_truncates_partial_tokens() {
        let raw = parse_ether("200000.999").unwrap();
        assert_eq!(circulating_supply(raw), 0);
    }

    #[test]
    fn remaining_tokens_pass_through_unclamped() {
        assert_eq!(remaining_tokens(0), 800_000);
        assert_eq!(remaining_tokens(800_000), 0);
        // Above-cap supply goes negative and is not clamped.
        assert_eq!(remaining_tokens(800_001), -1);
    }

    #[test]
    fn funding_percentage_unclamped() {
        assert_eq!(funding_raised_percentage(0.0), 0.0);
        assert_eq!(funding_raised_percentage(12.0), 50.0);
        assert_eq!(funding_raised_percentage(24.0), 100.0);
        // Overshoot before migration exceeds 100.
        assert_eq!(funding_raised_percentage(30.0), 125.0);
    }

    #[test]
    fn supply_progress_keeps_wei_converted_denominator() {
        // Pins the historical arithmetic: one token past the mint maps to
        // (1 / 6e-13) * 100 percent.
        let got = supply_progress_percentage(200_001);
        let want = (1.0 / 6e-13) * 100.0;
        assert!((got - want).abs() / want < 1e-9, "got {got}, want {want}");
    }

    #[test]
    fn creation_fee_constants_agree() {
        assert_eq!(parse_ether(CREATION_FEE_ETH).unwrap(), CREATION_FEE_WEI);
    }
}
