//! The five launchpad contract operations.
//!
//! Reads are `eth_call`s against the configured RPC endpoint; writes go
//! through the injected provider with the exact value the operation
//! requires attached. The contract is authoritative for every financial
//! outcome - nothing computed here survives past display.

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;

use shared::abi::{Launchpad, MemeToken};
use shared::curve::{self, CREATION_FEE_WEI};
use shared::dto::token::{NewTokenRequest, TokenSummary};
use shared::purchase::PurchaseQuote;

use super::error::ServiceError;
use super::ethereum::{self, TxRequest};
use super::rpc::{self, TxReceipt};
use crate::utils::constants::FACTORY_ADDRESS;

fn factory_address() -> Result<Address, ServiceError> {
    FACTORY_ADDRESS
        .parse()
        .map_err(|_| ServiceError::Config(format!("bad factory address {FACTORY_ADDRESS:?}")))
}

fn token_address(token: &str) -> Result<Address, ServiceError> {
    token
        .parse()
        .map_err(|_| ServiceError::Config(format!("bad token address {token:?}")))
}

/// Enumerate every token the factory knows about, normalized for display.
pub async fn fetch_all_tokens() -> Result<Vec<TokenSummary>, ServiceError> {
    let calldata = Launchpad::getAllMemeTokensCall {}.abi_encode();
    let raw = rpc::eth_call(factory_address()?, calldata).await?;
    let listings = Launchpad::getAllMemeTokensCall::abi_decode_returns(&raw)?;

    Ok(listings
        .iter()
        .enumerate()
        .map(|(index, listing)| TokenSummary::from_listing(index, listing))
        .collect())
}

/// Read a token's total supply and reduce it to the circulating
/// whole-token figure the progress displays use.
pub async fn fetch_circulating_supply(token: &str) -> Result<i64, ServiceError> {
    let calldata = MemeToken::totalSupplyCall {}.abi_encode();
    let raw = rpc::eth_call(token_address(token)?, calldata).await?;
    let total = MemeToken::totalSupplyCall::abi_decode_returns(&raw)?;
    Ok(curve::circulating_supply(total))
}

/// Price `amount` tokens at the current circulating supply. The result is
/// held verbatim in the returned quote; the buy transaction attaches it
/// unchanged.
pub async fn quote_purchase(circulating: i64, amount: u64) -> Result<PurchaseQuote, ServiceError> {
    let current_supply = u64::try_from(circulating)
        .map_err(|_| ServiceError::Abi(format!("cannot price against supply {circulating}")))?;

    let calldata = Launchpad::calculateCostCall {
        currentSupply: U256::from(current_supply),
        tokensToBuy: U256::from(amount),
    }
    .abi_encode();
    let raw = rpc::eth_call(factory_address()?, calldata).await?;
    let cost_wei = Launchpad::calculateCostCall::abi_decode_returns(&raw)?;

    Ok(PurchaseQuote::new(amount, cost_wei))
}

/// Submit the token-creation transaction with the fixed fee attached and
/// wait for it to confirm.
pub async fn create_token(form: &NewTokenRequest) -> Result<TxReceipt, ServiceError> {
    let from = ethereum::connect().await?;
    let calldata = Launchpad::createMemeTokenCall {
        name: form.name.trim().to_string(),
        symbol: form.symbol.trim().to_string(),
        imageUrl: form.image_url.trim().to_string(),
        description: form.description.trim().to_string(),
    }
    .abi_encode();

    let tx = TxRequest {
        from,
        to: factory_address()?.to_string(),
        value: format!("0x{:x}", CREATION_FEE_WEI),
        data: alloy_primitives::hex::encode_prefixed(&calldata),
    };

    let hash = ethereum::submit_transaction(&tx).await?;
    rpc::wait_for_receipt(&hash).await
}

/// Submit the buy transaction, attaching exactly the quoted cost, and
/// wait for it to confirm. A stale quote reverts on-chain; that revert is
/// the backstop, not a client-side re-check.
pub async fn buy_tokens(token: &str, quote: &PurchaseQuote) -> Result<TxReceipt, ServiceError> {
    let from = ethereum::connect().await?;
    let calldata = Launchpad::buyMemeTokenCall {
        memeTokenAddress: token_address(token)?,
        tokenQty: U256::from(quote.amount),
    }
    .abi_encode();

    let tx = TxRequest {
        from,
        to: factory_address()?.to_string(),
        value: format!("0x{:x}", quote.cost_wei),
        data: alloy_primitives::hex::encode_prefixed(&calldata),
    };

    let hash = ethereum::submit_transaction(&tx).await?;
    rpc::wait_for_receipt(&hash).await
}
