//! Wallet connect control.
//!
//! Owns the accountsChanged subscription: the handle lives in component
//! scope and is dropped on unmount, so remounting never stacks listeners.

use leptos::prelude::*;

use shared::utils::truncate_address;

use crate::services::ethereum::{self, AccountsSubscription};
use crate::state::notifications::use_notifications;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn WalletButton() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let notifications = use_notifications();

    let subscription = StoredValue::new_local(None::<AccountsSubscription>);
    on_cleanup(move || subscription.set_value(None));

    let connect_wallet = move |_| {
        if !ethereum::provider_available() {
            notifications
                .error("No injected Ethereum wallet found. Please install MetaMask to continue.");
            return;
        }

        wallet_ctx.set_connecting();
        leptos::task::spawn_local(async move {
            match ethereum::connect().await {
                Ok(address) => {
                    log::info!("wallet connected: {}", address);
                    wallet_ctx.set_connected(address);

                    // Track account switches for as long as this control is
                    // mounted; an empty list means the site was disconnected.
                    let handle = ethereum::watch_accounts(move |accounts| {
                        match accounts.into_iter().next() {
                            Some(account) => wallet_ctx.set_connected(account),
                            None => wallet_ctx.disconnect(),
                        }
                    });
                    subscription.set_value(Some(handle));
                }
                Err(e) => {
                    log::error!("wallet connection failed: {}", e);
                    wallet_ctx.disconnect();
                }
            }
        });
    };

    view! {
        <button class="btn btn-wallet" on:click=connect_wallet>
            {move || match wallet_ctx.address() {
                Some(address) => format!("Connected: {}", truncate_address(&address)),
                None => "Connect Wallet".to_string(),
            }}
        </button>
    }
}
