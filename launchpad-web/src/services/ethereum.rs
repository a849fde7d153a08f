//! Injected wallet provider integration via wasm-bindgen
//!
//! JavaScript interop for the EIP-1193 provider browser extensions inject
//! as `window.ethereum`. Three capabilities are used and nothing else:
//! requesting the account list, submitting a transaction for signing, and
//! subscribing to account-change notifications.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::error::ServiceError;

// ============================================================================
// PROVIDER DETECTION AND REQUESTS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasEthereumProvider() {
    return typeof window.ethereum !== 'undefined' && window.ethereum !== null;
}

export async function requestAccounts() {
    if (!window.ethereum) {
        throw new Error('No injected Ethereum provider found');
    }
    return await window.ethereum.request({ method: 'eth_requestAccounts' });
}

export async function sendTransaction(tx) {
    if (!window.ethereum) {
        throw new Error('No injected Ethereum provider found');
    }
    return await window.ethereum.request({ method: 'eth_sendTransaction', params: [tx] });
}

export function onAccountsChanged(callback) {
    if (window.ethereum && typeof window.ethereum.on === 'function') {
        window.ethereum.on('accountsChanged', callback);
    }
}

export function offAccountsChanged(callback) {
    if (window.ethereum && typeof window.ethereum.removeListener === 'function') {
        window.ethereum.removeListener('accountsChanged', callback);
    }
}
")]
extern "C" {
    /// Check whether a provider is injected at all
    pub fn hasEthereumProvider() -> bool;

    /// Prompt the user for their account list
    #[wasm_bindgen(catch)]
    pub async fn requestAccounts() -> Result<JsValue, JsValue>;

    /// Hand a transaction to the provider for signing and submission;
    /// resolves to the transaction hash
    #[wasm_bindgen(catch)]
    pub async fn sendTransaction(tx: &JsValue) -> Result<JsValue, JsValue>;

    /// Register an accountsChanged listener
    pub fn onAccountsChanged(callback: &js_sys::Function);

    /// Remove a previously registered accountsChanged listener
    pub fn offAccountsChanged(callback: &js_sys::Function);
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Wallet connection state
#[derive(Clone, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String },
    Error(String),
}

impl WalletState {
    pub fn is_connected(&self) -> bool {
        matches!(self, WalletState::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address } => Some(address),
            _ => None,
        }
    }
}

/// Whether an injected provider is present on this page.
pub fn provider_available() -> bool {
    hasEthereumProvider()
}

/// Request the provider's account list and return the first entry as the
/// active identity.
pub async fn connect() -> Result<String, ServiceError> {
    if !hasEthereumProvider() {
        return Err(ServiceError::MissingProvider);
    }

    let accounts = requestAccounts()
        .await
        .map_err(|e| ServiceError::Wallet(js_error_message(e)))?;
    let accounts: Vec<String> = serde_wasm_bindgen::from_value(accounts)
        .map_err(|e| ServiceError::Wallet(e.to_string()))?;

    accounts
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::Wallet("provider returned no accounts".to_string()))
}

/// An `eth_sendTransaction` payload. All numeric fields are 0x-hex, as the
/// provider expects.
#[derive(Debug, Serialize)]
pub struct TxRequest {
    pub from: String,
    pub to: String,
    pub value: String,
    pub data: String,
}

/// Submit a transaction through the injected provider. The provider owns
/// signing and account selection; this resolves to the transaction hash
/// once the user approves.
pub async fn submit_transaction(tx: &TxRequest) -> Result<String, ServiceError> {
    if !hasEthereumProvider() {
        return Err(ServiceError::MissingProvider);
    }

    let params =
        serde_wasm_bindgen::to_value(tx).map_err(|e| ServiceError::Wallet(e.to_string()))?;
    let hash = sendTransaction(&params)
        .await
        .map_err(|e| ServiceError::Wallet(js_error_message(e)))?;

    hash.as_string()
        .ok_or_else(|| ServiceError::Wallet("provider returned a non-string hash".to_string()))
}

/// A live accountsChanged subscription. Dropping the handle removes the
/// listener, so holding it in component scope ties the subscription to the
/// component's lifetime.
pub struct AccountsSubscription {
    callback: Closure<dyn FnMut(JsValue)>,
}

impl Drop for AccountsSubscription {
    fn drop(&mut self) {
        offAccountsChanged(self.callback.as_ref().unchecked_ref());
    }
}

/// Subscribe to account changes. The handler receives the new account
/// list; an empty list means the user disconnected the site.
pub fn watch_accounts(mut handler: impl FnMut(Vec<String>) + 'static) -> AccountsSubscription {
    let callback: Closure<dyn FnMut(JsValue)> = Closure::new(move |accounts: JsValue| {
        let accounts: Vec<String> =
            serde_wasm_bindgen::from_value(accounts).unwrap_or_default();
        handler(accounts);
    });
    onAccountsChanged(callback.as_ref().unchecked_ref());
    AccountsSubscription { callback }
}

/// Best-effort extraction of a readable message from a thrown JS value.
pub fn js_error_message(err: JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(message) = message.as_string() {
            return message;
        }
    }
    format!("{:?}", err)
}
