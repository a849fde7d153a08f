//! Token Create - launch a new token through the factory
//!
//! Validation happens before anything touches the wallet; a rejected form
//! never produces a transaction. On success the explorer re-reads the
//! registry, so no local bookkeeping is needed here.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use shared::curve::{CREATION_FEE_ETH, FUNDING_GOAL_ETH, INITIAL_MINT, MAX_SUPPLY};
use shared::dto::token::NewTokenRequest;

use crate::services::{ethereum, launchpad};
use crate::state::notifications::use_notifications;
use crate::utils::format::format_token_count;

#[component]
pub fn TokenCreatePage() -> impl IntoView {
    let notifications = use_notifications();
    let navigate = use_navigate();

    let (name, set_name) = signal(String::new());
    let (symbol, set_symbol) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (image_url, set_image_url) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let handle_create = move |_| {
        let form = NewTokenRequest {
            name: name.get_untracked(),
            symbol: symbol.get_untracked(),
            description: description.get_untracked(),
            image_url: image_url.get_untracked(),
        };

        // Client-side gate: no transaction is attempted for an invalid form.
        if let Err(message) = form.validate() {
            notifications.error(message);
            return;
        }
        if !ethereum::provider_available() {
            notifications
                .error("No injected Ethereum wallet found. Please install MetaMask to continue.");
            return;
        }

        set_submitting.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match launchpad::create_token(&form).await {
                Ok(receipt) => {
                    log::info!("token created in {}", receipt.transaction_hash);
                    notifications.success("Token created successfully!");
                    set_submitting.set(false);
                    navigate("/explorer", Default::default());
                }
                Err(e) => {
                    // The form stays populated for another attempt.
                    log::error!("token creation failed: {}", e);
                    notifications.error(format!("Error creating token: {}", e));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="page">
            <div class="page-toolbar">
                <A href="/explorer">
                    <span class="btn btn-secondary">"← Back"</span>
                </A>
            </div>

            <div class="page-heading">
                <h1>"Create Meme Token"</h1>
            </div>

            <div class="card form-card">
                <div class="info">
                    <p class="info-title">"Important information:"</p>
                    <ul class="fact-list">
                        <li>{format!("Creation fee: {} ETH", CREATION_FEE_ETH)}</li>
                        <li>{format!("Max supply: {} tokens", format_token_count(MAX_SUPPLY as i64))}</li>
                        <li>{format!("Initial mint: {} tokens", format_token_count(INITIAL_MINT as i64))}</li>
                        <li>{format!("Liquidity migrates to the DEX once {} ETH is raised", FUNDING_GOAL_ETH)}</li>
                    </ul>
                </div>

                <div class="form-field">
                    <label>"Token Name *"</label>
                    <input
                        type="text"
                        placeholder="e.g., DogeCoin"
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label>"Token Symbol *"</label>
                    <input
                        type="text"
                        placeholder="e.g., DOGE"
                        on:input=move |ev| set_symbol.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-field">
                    <label>"Description *"</label>
                    <textarea
                        placeholder="Describe your token"
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-field">
                    <label>"Image URL (Optional)"</label>
                    <input
                        type="text"
                        placeholder="https://example.com/image.png"
                        on:input=move |ev| set_image_url.set(event_target_value(&ev))
                    />
                </div>

                <button
                    class="btn btn-primary submit-button"
                    disabled=move || submitting.get()
                    on:click=handle_create
                >
                    {move || if submitting.get() { "Creating..." } else { "Create Token" }}
                </button>
            </div>
        </div>
    }
}
