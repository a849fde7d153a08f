//! Progress bar for the detail screen.

use leptos::prelude::*;

/// Labelled progress bar. The percentage is applied as-is; values past
/// 100 are absorbed by the track's clipping rather than clamped here.
#[component]
pub fn ProgressBar(
    label: &'static str,
    detail: String,
    percentage: f64,
) -> impl IntoView {
    view! {
        <div class="progress-block">
            <div class="progress-heading">
                <span class="progress-label">{label}</span>
                <span class="progress-detail">{detail}</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style=format!("width: {}%;", percentage)></div>
            </div>
        </div>
    }
}
