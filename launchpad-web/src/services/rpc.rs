//! JSON-RPC transport for contract reads and receipt polling.
//!
//! Read calls go straight to the configured RPC endpoint over HTTP; the
//! injected provider is only involved when something needs signing.

use std::sync::atomic::{AtomicU32, Ordering};

use alloy_primitives::{hex, Address};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::ServiceError;
use crate::utils::constants::{RECEIPT_POLL_ATTEMPTS, RECEIPT_POLL_MS, RPC_URL};

static REQUEST_ID: AtomicU32 = AtomicU32::new(1);

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u32,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

/// One JSON-RPC round trip against the configured endpoint.
async fn request(method: &str, params: Value) -> Result<Value, ServiceError> {
    let body = RpcRequest {
        jsonrpc: "2.0",
        id: REQUEST_ID.fetch_add(1, Ordering::Relaxed),
        method,
        params,
    };

    let response = Request::post(RPC_URL).json(&body)?.send().await?;
    if !response.ok() {
        return Err(ServiceError::Transport(format!(
            "RPC endpoint returned HTTP {}",
            response.status()
        )));
    }

    let parsed: RpcResponse = response.json().await?;
    if let Some(err) = parsed.error {
        return Err(ServiceError::Rpc {
            code: err.code,
            message: err.message,
        });
    }
    Ok(parsed.result.unwrap_or(Value::Null))
}

/// `eth_call` against `to` with pre-encoded calldata; returns the raw
/// return bytes.
pub async fn eth_call(to: Address, calldata: Vec<u8>) -> Result<Vec<u8>, ServiceError> {
    let params = json!([
        {
            "to": to.to_string(),
            "data": hex::encode_prefixed(&calldata),
        },
        "latest"
    ]);

    let result = request("eth_call", params).await?;
    let hex_str = result
        .as_str()
        .ok_or_else(|| ServiceError::Abi("eth_call returned a non-string result".to_string()))?;
    hex::decode(hex_str).map_err(|e| ServiceError::Abi(e.to_string()))
}

/// A mined transaction receipt, reduced to the fields the screens use.
#[derive(Clone, Debug, Deserialize)]
pub struct TxReceipt {
    #[serde(rename = "transactionHash")]
    pub transaction_hash: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl TxReceipt {
    /// Post-Byzantium receipts carry 0x1 on success, 0x0 on revert.
    pub fn succeeded(&self) -> bool {
        match self.status.as_deref() {
            Some(status) => status == "0x1",
            None => true,
        }
    }
}

/// Poll `eth_getTransactionReceipt` until the transaction is mined.
///
/// A reverted transaction is an error here: the screens treat "confirmed
/// but failed" the same as any other submission failure.
pub async fn wait_for_receipt(hash: &str) -> Result<TxReceipt, ServiceError> {
    for _ in 0..RECEIPT_POLL_ATTEMPTS {
        let result = request("eth_getTransactionReceipt", json!([hash])).await?;
        if !result.is_null() {
            let receipt: TxReceipt = serde_json::from_value(result)
                .map_err(|e| ServiceError::Abi(e.to_string()))?;
            if receipt.succeeded() {
                return Ok(receipt);
            }
            return Err(ServiceError::Reverted(receipt.transaction_hash));
        }
        TimeoutFuture::new(RECEIPT_POLL_MS).await;
    }
    Err(ServiceError::ReceiptTimeout(hash.to_string()))
}
