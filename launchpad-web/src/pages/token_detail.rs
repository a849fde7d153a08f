//! Token Detail - per-token analytics and the buy flow
//!
//! Three independent fetches run concurrently on mount: holder list and
//! transfer list from the indexer, total supply from the token contract.
//! Each panel carries its own loading flag and its own failure isolation;
//! one source going down leaves the other panels populated.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use shared::curve;
use shared::dto::indexer::{OwnerRecord, TransferRecord};
use shared::dto::token::TokenSummary;
use shared::purchase::PurchaseFlow;

use crate::components::ownership_chart::pie_slices;
use crate::components::{HoldersPanel, OwnershipChart, ProgressBar, PurchaseModal, TransfersTable};
use crate::services::{indexer, launchpad};
use crate::state::notifications::use_notifications;
use crate::state::tokens::use_token_handoff;
use crate::utils::format::format_token_count;

#[component]
pub fn TokenDetailPage() -> impl IntoView {
    let params = use_params_map();
    let handoff = use_token_handoff();
    let notifications = use_notifications();

    let token_address = params
        .with_untracked(|p| p.get("address"))
        .unwrap_or_default();

    // The explorer parks the summary it already fetched; deep links fall
    // back to placeholders instead of re-reading the registry.
    let summary = handoff
        .summary_for(&token_address)
        .unwrap_or_else(|| TokenSummary::placeholder(&token_address));

    let (owners, set_owners) = signal(Vec::<OwnerRecord>::new());
    let (transfers, set_transfers) = signal(Vec::<TransferRecord>::new());
    let (circulating, set_circulating) = signal(0i64);

    let (owners_loading, set_owners_loading) = signal(true);
    let (transfers_loading, set_transfers_loading) = signal(true);
    let (supply_loading, set_supply_loading) = signal(true);

    // Holder list.
    {
        let token = token_address.clone();
        leptos::task::spawn_local(async move {
            match indexer::fetch_owners(&token).await {
                Ok(list) => set_owners.set(list),
                Err(e) => log::error!("failed to fetch owners: {}", e),
            }
            set_owners_loading.set(false);
        });
    }

    // Transfer history.
    {
        let token = token_address.clone();
        leptos::task::spawn_local(async move {
            match indexer::fetch_transfers(&token).await {
                Ok(list) => set_transfers.set(list),
                Err(e) => log::error!("failed to fetch transfers: {}", e),
            }
            set_transfers_loading.set(false);
        });
    }

    // Circulating supply from the token contract.
    {
        let token = token_address.clone();
        leptos::task::spawn_local(async move {
            match launchpad::fetch_circulating_supply(&token).await {
                Ok(supply) => set_circulating.set(supply),
                Err(e) => log::error!("failed to fetch total supply: {}", e),
            }
            set_supply_loading.set(false);
        });
    }

    // Purchase flow: quote, then confirm. The prompt opens only once the
    // cost read resolves, and a changed amount always re-quotes.
    let (amount_input, set_amount_input) = signal(String::new());
    let flow = RwSignal::new(PurchaseFlow::default());

    let request_quote = move |_| {
        let raw = amount_input.get_untracked();
        let amount = match raw.trim().parse::<u64>() {
            Ok(n) if n > 0 => n,
            _ => {
                notifications.error("Enter a whole number of tokens to buy");
                return;
            }
        };

        let supply = circulating.get_untracked();
        leptos::task::spawn_local(async move {
            match launchpad::quote_purchase(supply, amount).await {
                Ok(quote) => flow.update(|f| f.quoted(quote)),
                Err(e) => {
                    log::error!("cost quote failed: {}", e);
                    notifications.error(format!("Could not quote the purchase: {}", e));
                }
            }
        });
    };

    let on_confirm = Callback::new({
        let token = token_address.clone();
        move |_| {
            let mut confirmed = None;
            flow.update(|f| confirmed = f.confirm());
            let Some(quote) = confirmed else {
                return;
            };

            let token = token.clone();
            leptos::task::spawn_local(async move {
                match launchpad::buy_tokens(&token, &quote).await {
                    Ok(receipt) => {
                        notifications.success(format!(
                            "Transaction successful! Hash: {}",
                            receipt.transaction_hash
                        ));
                        flow.update(|f| f.completed());
                    }
                    Err(e) => {
                        // Prompt stays open; the user retries or cancels.
                        log::error!("purchase failed: {}", e);
                        notifications.error(format!("Error during purchase: {}", e));
                        flow.update(|f| f.submit_failed());
                    }
                }
            });
        }
    });

    // Progress figures. Funding comes from the parked summary; supply from
    // the contract read.
    let funding_raised = summary.funding_raised_eth();
    let funding_pct = curve::funding_raised_percentage(funding_raised);
    let funding_detail = format!("{} / {} ETH", summary.funding_raised, curve::FUNDING_GOAL_ETH);

    let summary_view = summary.clone();

    view! {
        <div class="page">
            <div class="page-toolbar">
                <A href="/explorer">
                    <span class="btn btn-secondary">"← Back"</span>
                </A>
            </div>

            <div class="page-heading">
                <h1>"Token Details"</h1>
            </div>

            <div class="detail-columns">
                <div class="card detail-info">
                    <h2>{summary_view.name.clone()}</h2>
                    {(!summary_view.image_url.is_empty()).then(|| view! {
                        <div class="detail-image">
                            <img src=summary_view.image_url.clone() alt=summary_view.name.clone()/>
                        </div>
                    })}
                    <div class="detail-field">
                        <p class="field-label">"Creator Address"</p>
                        <p class="mono">{summary_view.creator_address.clone()}</p>
                    </div>
                    <div class="detail-field">
                        <p class="field-label">"Token Address"</p>
                        <p class="mono">{token_address.clone()}</p>
                    </div>
                    <div class="detail-field-row">
                        <div class="detail-field">
                            <p class="field-label">"Funding Raised"</p>
                            <p class="field-value">{format!("{} ETH", summary_view.funding_raised)}</p>
                        </div>
                        <div class="detail-field">
                            <p class="field-label">"Token Symbol"</p>
                            <p class="field-value">{summary_view.symbol.clone()}</p>
                        </div>
                    </div>
                    <div class="detail-field">
                        <p class="field-label">"Description"</p>
                        <p>{summary_view.description.clone()}</p>
                    </div>
                </div>

                <div class="detail-side">
                    <div class="card">
                        {move || if supply_loading.get() {
                            view! {
                                <div class="spinner-row">
                                    <div class="spinner"></div>
                                </div>
                            }.into_any()
                        } else {
                            let supply = circulating.get();
                            let remaining = curve::remaining_tokens(supply);
                            view! {
                                <div>
                                    <ProgressBar
                                        label="Bonding Curve Progress"
                                        detail=funding_detail.clone()
                                        percentage=funding_pct
                                    />
                                    <p class="progress-note">
                                        {format!(
                                            "When the market cap reaches {} ETH, all the liquidity \
                                             from the bonding curve will be deposited into the DEX \
                                             and the LP tokens will be burned.",
                                            curve::FUNDING_GOAL_ETH
                                        )}
                                    </p>
                                    <ProgressBar
                                        label="Remaining Tokens"
                                        detail=format!(
                                            "{} / {}",
                                            format_token_count(remaining),
                                            format_token_count(curve::MAX_SUPPLY as i64)
                                        )
                                        percentage=curve::supply_progress_percentage(supply)
                                    />
                                </div>
                            }.into_any()
                        }}
                    </div>

                    <div class="card">
                        <h3>"Buy Tokens"</h3>
                        <input
                            type="number"
                            class="amount-input"
                            placeholder="Enter amount of tokens to buy"
                            on:input=move |ev| set_amount_input.set(event_target_value(&ev))
                        />
                        <button class="btn btn-primary" on:click=request_quote>
                            "Purchase"
                        </button>
                    </div>
                </div>
            </div>

            <div class="card section-card">
                <h3>"Ownership Distribution"</h3>
                {move || if owners_loading.get() {
                    view! {
                        <div class="spinner-row">
                            <div class="spinner"></div>
                        </div>
                    }.into_any()
                } else {
                    let list = owners.get();
                    let slices = pie_slices(&list);
                    view! {
                        <div class="holders-columns">
                            <OwnershipChart slices=slices/>
                            <HoldersPanel owners=list/>
                        </div>
                    }.into_any()
                }}
            </div>

            <div class="card section-card">
                <h3>"Token Transfers"</h3>
                {move || if transfers_loading.get() {
                    view! {
                        <div class="spinner-row">
                            <div class="spinner"></div>
                        </div>
                    }.into_any()
                } else {
                    view! { <TransfersTable transfers=transfers.get()/> }.into_any()
                }}
            </div>

            <PurchaseModal flow=flow on_confirm=on_confirm/>
        </div>
    }
}
