//! One explorer grid card.

use leptos::prelude::*;

use shared::dto::token::TokenSummary;
use shared::utils::truncate_address;

#[component]
pub fn TokenCard<F>(summary: TokenSummary, on_select: F) -> impl IntoView
where
    F: Fn(TokenSummary) + 'static,
{
    let selected = summary.clone();

    view! {
        <div class="card token-card" on:click=move |_| on_select(selected.clone())>
            {(!summary.image_url.is_empty()).then(|| view! {
                <div class="token-card-image">
                    <img src=summary.image_url.clone() alt=summary.name.clone()/>
                </div>
            })}
            <div class="token-card-header">
                <div>
                    <h2 class="token-card-name">{summary.name.clone()}</h2>
                    <p class="token-card-symbol">{summary.symbol.clone()}</p>
                </div>
                <div class="token-card-funding">
                    <p class="funding-amount">{format!("{} ETH", summary.funding_raised)}</p>
                    <p class="funding-label">"Raised"</p>
                </div>
            </div>
            <p class="token-card-description">{summary.description.clone()}</p>
            <div class="token-card-footer">
                <p class="creator-label">"Created by"</p>
                <p class="creator-address">{truncate_address(&summary.creator_address)}</p>
            </div>
        </div>
    }
}
