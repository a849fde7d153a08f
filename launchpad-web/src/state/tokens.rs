//! Explorer-to-detail summary handoff.
//!
//! The explorer already holds the summary for every card, so selecting
//! one parks it here instead of re-reading the registry on the detail
//! page. Deep links arrive with nothing parked and fall back to
//! placeholder values.

use leptos::prelude::*;

use shared::dto::token::TokenSummary;

#[derive(Clone, Copy)]
pub struct TokenHandoff {
    selected: RwSignal<Option<TokenSummary>>,
}

impl TokenHandoff {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(None),
        }
    }

    /// Park a summary before navigating to its detail route.
    pub fn remember(&self, summary: TokenSummary) {
        self.selected.set(Some(summary));
    }

    /// Retrieve the parked summary if it matches the routed address.
    pub fn summary_for(&self, token_address: &str) -> Option<TokenSummary> {
        self.selected.with(|parked| {
            parked
                .as_ref()
                .filter(|s| s.token_address.eq_ignore_ascii_case(token_address))
                .cloned()
        })
    }
}

pub fn provide_token_handoff() -> TokenHandoff {
    let context = TokenHandoff::new();
    provide_context(context);
    context
}

pub fn use_token_handoff() -> TokenHandoff {
    expect_context::<TokenHandoff>()
}
