//! Token Explorer - browse every token the factory has launched
//!
//! One registry read on mount, then a purely in-memory filter over the
//! results. Selecting a card parks its summary for the detail screen so
//! the registry is not read twice.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use shared::dto::token::{filter_tokens, TokenSummary};

use crate::components::{TokenCard, WalletButton};
use crate::services::launchpad;
use crate::state::tokens::use_token_handoff;

#[component]
pub fn ExplorerPage() -> impl IntoView {
    let handoff = use_token_handoff();
    let navigate = use_navigate();

    let (tokens, set_tokens) = signal(Vec::<TokenSummary>::new());
    let (loading, set_loading) = signal(true);
    let (search, set_search) = signal(String::new());

    // One enumerate call per visit. A failure degrades to an empty grid;
    // the rest of the app stays usable.
    leptos::task::spawn_local(async move {
        match launchpad::fetch_all_tokens().await {
            Ok(list) => {
                log::info!("fetched {} tokens from the factory", list.len());
                set_tokens.set(list);
            }
            Err(e) => log::error!("failed to enumerate tokens: {}", e),
        }
        set_loading.set(false);
    });

    // Recomputed on every keystroke against the in-memory list.
    let visible = move || {
        let all = tokens.get();
        let query = search.get();
        filter_tokens(&all, &query).into_iter().cloned().collect::<Vec<_>>()
    };

    let select_token = {
        let navigate = navigate.clone();
        move |summary: TokenSummary| {
            let route = format!("/token/{}", summary.token_address);
            handoff.remember(summary);
            navigate(&route, Default::default());
        }
    };

    let to_create = move |_| navigate("/create", Default::default());

    view! {
        <div class="page">
            <div class="page-toolbar">
                <div class="toolbar-actions">
                    <button class="btn btn-primary" on:click=to_create>
                        "Create New Token"
                    </button>
                    <WalletButton/>
                </div>
            </div>

            <div class="page-heading">
                <h1>"Meme Token Explorer"</h1>
            </div>

            <div class="search-row">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search tokens by name or symbol..."
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </div>

            {move || if loading.get() {
                view! {
                    <div class="spinner-row">
                        <div class="spinner"></div>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="token-grid">
                        {visible()
                            .into_iter()
                            .map(|summary| view! {
                                <TokenCard summary=summary on_select=select_token.clone()/>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
