//! Landing Page - static marketing content

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use shared::curve::{CREATION_FEE_ETH, FUNDING_GOAL_ETH, INITIAL_MINT, MAX_SUPPLY};

use crate::utils::format::format_token_count;

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();
    let to_explorer = {
        let navigate = navigate.clone();
        move |_| navigate("/explorer", Default::default())
    };
    let to_create = move |_| navigate("/create", Default::default());

    view! {
        <div class="content-wrapper">
            <div class="left-section">
                <h1 class="main-header">
                    <span class="brand-accent">"Meme"</span>
                    <span class="brand-plain">"Forge"</span>
                </h1>
                <p class="main-subheader">"Launch a meme token in one transaction"</p>
                <p class="signup-text">
                    "Every token starts on a bonding curve. Price follows demand, and once the "
                    "funding goal is met the liquidity moves to the DEX on its own - no team "
                    "allocations, no manual listings."
                </p>
                <div class="landing-actions">
                    <button class="btn btn-primary" on:click=to_explorer>
                        "Explore Tokens"
                    </button>
                    <button class="btn btn-secondary" on:click=to_create>
                        "Launch a Token"
                    </button>
                </div>
            </div>
            <div class="right-section">
                <div class="card">
                    <h2 class="card-title">"How it works"</h2>
                    <ul class="fact-list">
                        <li>{format!("Creation fee: {} ETH", CREATION_FEE_ETH)}</li>
                        <li>{format!("Max supply: {} tokens per launch", format_token_count(MAX_SUPPLY as i64))}</li>
                        <li>{format!("Initial mint: {} tokens to the creator", format_token_count(INITIAL_MINT as i64))}</li>
                        <li>{format!("At {} ETH raised, the curve's liquidity migrates to the DEX and the LP tokens are burned", FUNDING_GOAL_ETH)}</li>
                    </ul>
                    <div class="disclaimer">
                        <p>
                            "Token prices on the bonding curve are set by the launchpad contract. "
                            "Nothing on this page is investment advice, and nothing here "
                            "constitutes a solicitation to purchase any cryptocurrency or asset."
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
