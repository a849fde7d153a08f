//! Holder summary: top-10 table plus aggregate figures.

use leptos::prelude::*;

use shared::dto::indexer::OwnerRecord;
use shared::utils::truncate_address;

use crate::utils::constants::EXPLORER_BASE;
use crate::utils::format::format_percentage;

/// Combined share of the first ten holders, as listed.
pub fn top_ten_control(owners: &[OwnerRecord]) -> f64 {
    owners
        .iter()
        .take(10)
        .map(|o| o.percentage_relative_to_total_supply)
        .sum()
}

#[component]
pub fn HoldersPanel(owners: Vec<OwnerRecord>) -> impl IntoView {
    let holder_count = owners.len();
    let control = top_ten_control(&owners);

    view! {
        <div class="holders-panel">
            <h4>"Top 10 Token Holders"</h4>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Rank"</th>
                        <th>"Address"</th>
                        <th class="numeric">"Percentage"</th>
                    </tr>
                </thead>
                <tbody>
                    {owners
                        .iter()
                        .take(10)
                        .enumerate()
                        .map(|(index, owner)| {
                            let href = format!("{}/address/{}", EXPLORER_BASE, owner.owner_address);
                            view! {
                                <tr>
                                    <td>{format!("#{}", index + 1)}</td>
                                    <td>
                                        <a href=href target="_blank" rel="noopener noreferrer" class="mono-link">
                                            {truncate_address(&owner.owner_address)}
                                        </a>
                                    </td>
                                    <td class="numeric">
                                        {format_percentage(owner.percentage_relative_to_total_supply)}
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
            <div class="holders-summary">
                <div class="summary-row">
                    <span>"Total Holders: "</span>
                    <span class="summary-value">{holder_count}</span>
                </div>
                <div class="summary-row">
                    <span>"Top 10 Holders Control: "</span>
                    <span class="summary-value">{format_percentage(control)}</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(pct: f64) -> OwnerRecord {
        OwnerRecord {
            owner_address: "0xaaa".to_string(),
            percentage_relative_to_total_supply: pct,
        }
    }

    #[test]
    fn control_sums_at_most_ten_holders() {
        let owners: Vec<_> = (0..12).map(|_| owner(5.0)).collect();
        assert_eq!(top_ten_control(&owners), 50.0);
        assert_eq!(top_ten_control(&owners[..3]), 15.0);
        assert_eq!(top_ten_control(&[]), 0.0);
    }
}
