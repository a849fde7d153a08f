//! Transfer history table.

use leptos::prelude::*;

use shared::dto::indexer::TransferRecord;
use shared::utils::format_address;

use crate::utils::constants::EXPLORER_BASE;
use crate::utils::format::short_hash;

#[component]
pub fn TransfersTable(transfers: Vec<TransferRecord>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"From Address"</th>
                    <th>"To Address"</th>
                    <th class="numeric">"Value (ETH)"</th>
                    <th class="numeric">"Time"</th>
                    <th class="numeric">"Transaction Hash"</th>
                </tr>
            </thead>
            <tbody>
                {transfers
                    .iter()
                    .map(|transfer| {
                        let tx_href = format!("{}/tx/{}", EXPLORER_BASE, transfer.transaction_hash);
                        let when = transfer
                            .block_timestamp
                            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                            .unwrap_or_else(|| "-".to_string());
                        view! {
                            <tr>
                                <td class="mono">{format_address(&transfer.from_address, 8, 6)}</td>
                                <td class="mono">{format_address(&transfer.to_address, 8, 6)}</td>
                                <td class="numeric">{transfer.value_eth()}</td>
                                <td class="numeric">{when}</td>
                                <td class="numeric">
                                    <a href=tx_href target="_blank" rel="noopener noreferrer" class="mono-link">
                                        {short_hash(&transfer.transaction_hash)}
                                    </a>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
