//! Purchase confirmation prompt.
//!
//! Open exactly while the purchase flow holds a quote. The displayed cost
//! is the quote's display string - derived from the read-call result by
//! unit conversion alone, and identical to the value the transaction will
//! attach.

use leptos::prelude::*;

use shared::purchase::PurchaseFlow;

#[component]
pub fn PurchaseModal(flow: RwSignal<PurchaseFlow>, on_confirm: Callback<()>) -> impl IntoView {
    view! {
        {move || {
            flow.get().quote().cloned().map(|quote| {
                let submitting = flow.get().is_submitting();
                view! {
                    <div class="modal-overlay">
                        <div class="card modal-card">
                            <h4>"Confirm Purchase"</h4>
                            <p class="modal-cost">
                                {format!("Cost of {} tokens: ", quote.amount)}
                                <span class="cost-figure">{format!("{} ETH", quote.cost_eth)}</span>
                            </p>
                            <div class="modal-actions">
                                <button
                                    class="btn btn-primary"
                                    disabled=submitting
                                    on:click=move |_| on_confirm.run(())
                                >
                                    {if submitting { "Submitting..." } else { "Confirm" }}
                                </button>
                                <button
                                    class="btn btn-secondary"
                                    disabled=submitting
                                    on:click=move |_| flow.update(|f| f.cancel())
                                >
                                    "Cancel"
                                </button>
                            </div>
                            {submitting.then(|| view! {
                                <p class="modal-hint">"Please approve the transaction in your wallet..."</p>
                            })}
                        </div>
                    </div>
                }
            })
        }}
    }
}
