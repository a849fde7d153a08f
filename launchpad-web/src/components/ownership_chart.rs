//! Ownership distribution pie chart.
//!
//! Slice data derives directly from the fetched owner list: one slice per
//! owner, value = that owner's percentage of supply, in the order the
//! indexer returned them. No re-ranking and no merging of small holders.
//! Rendered as inline SVG; the geometry lives here.

use std::f64::consts::PI;

use leptos::prelude::*;

use shared::dto::indexer::OwnerRecord;
use shared::utils::truncate_address;

const CENTER: f64 = 100.0;
const RADIUS: f64 = 90.0;

/// Slice palette, cycled in owner order.
pub const SLICE_COLORS: [&str; 5] = [
    "rgba(130, 94, 255, 0.8)",
    "rgba(255, 99, 132, 0.8)",
    "rgba(54, 162, 235, 0.8)",
    "rgba(255, 206, 86, 0.8)",
    "rgba(75, 192, 192, 0.8)",
];

#[derive(Clone, Debug, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
    pub path: String,
}

/// Build the slice geometry for an owner list. Zero owners (or an all-zero
/// distribution) produce an empty chart, never a failure.
pub fn pie_slices(owners: &[OwnerRecord]) -> Vec<PieSlice> {
    let total: f64 = owners
        .iter()
        .map(|o| o.percentage_relative_to_total_supply.max(0.0))
        .sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut slices = Vec::with_capacity(owners.len());
    let mut angle = -PI / 2.0;
    for (index, owner) in owners.iter().enumerate() {
        let value = owner.percentage_relative_to_total_supply.max(0.0);
        let sweep = value / total * 2.0 * PI;
        slices.push(PieSlice {
            label: truncate_address(&owner.owner_address),
            value: owner.percentage_relative_to_total_supply,
            color: SLICE_COLORS[index % SLICE_COLORS.len()],
            path: arc_path(angle, sweep),
        });
        angle += sweep;
    }
    slices
}

fn point(angle: f64) -> (f64, f64) {
    (CENTER + RADIUS * angle.cos(), CENTER + RADIUS * angle.sin())
}

fn arc_path(start: f64, sweep: f64) -> String {
    // A single owner covers the full circle; one arc command cannot draw
    // that, so split it in two.
    if sweep >= 2.0 * PI - 1e-9 {
        let (x0, y0) = point(start);
        let (x1, y1) = point(start + PI);
        return format!(
            "M {x0:.3} {y0:.3} A {RADIUS} {RADIUS} 0 1 1 {x1:.3} {y1:.3} A {RADIUS} {RADIUS} 0 1 1 {x0:.3} {y0:.3} Z"
        );
    }

    let (x0, y0) = point(start);
    let (x1, y1) = point(start + sweep);
    let large_arc = if sweep > PI { 1 } else { 0 };
    format!(
        "M {CENTER} {CENTER} L {x0:.3} {y0:.3} A {RADIUS} {RADIUS} 0 {large_arc} 1 {x1:.3} {y1:.3} Z"
    )
}

#[component]
pub fn OwnershipChart(slices: Vec<PieSlice>) -> impl IntoView {
    view! {
        <div class="ownership-chart">
            <svg viewBox="0 0 200 200" role="img">
                {slices
                    .iter()
                    .map(|slice| {
                        view! {
                            <path d=slice.path.clone() fill=slice.color stroke="#1a1a2e" stroke-width="1"/>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
            <ul class="chart-legend">
                {slices
                    .into_iter()
                    .map(|slice| {
                        view! {
                            <li>
                                <span class="legend-swatch" style=format!("background: {};", slice.color)></span>
                                <span class="legend-label">{slice.label}</span>
                                <span class="legend-value">{format!("{:.2}%", slice.value)}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(address: &str, pct: f64) -> OwnerRecord {
        OwnerRecord {
            owner_address: address.to_string(),
            percentage_relative_to_total_supply: pct,
        }
    }

    #[test]
    fn zero_owners_yield_an_empty_chart() {
        assert!(pie_slices(&[]).is_empty());
    }

    #[test]
    fn all_zero_distribution_yields_an_empty_chart() {
        let owners = vec![owner("0xaaa", 0.0), owner("0xbbb", 0.0)];
        assert!(pie_slices(&owners).is_empty());
    }

    #[test]
    fn slices_keep_fetched_order_and_values() {
        let owners = vec![
            owner("0x00000000000000000000000000000000000000aa", 12.5),
            owner("0x00000000000000000000000000000000000000bb", 62.5),
            owner("0x00000000000000000000000000000000000000cc", 25.0),
        ];
        let slices = pie_slices(&owners);
        assert_eq!(slices.len(), 3);
        // Smaller first slice stays first: the indexer's order wins.
        assert_eq!(slices[0].value, 12.5);
        assert_eq!(slices[1].value, 62.5);
        assert_eq!(slices[0].label, "0x0000...00aa");
        assert_eq!(slices[0].color, SLICE_COLORS[0]);
        assert_eq!(slices[2].color, SLICE_COLORS[2]);
    }

    #[test]
    fn single_owner_draws_a_full_circle() {
        let slices = pie_slices(&[owner("0xaaa", 100.0)]);
        assert_eq!(slices.len(), 1);
        // Two arc segments, no line back to center.
        assert_eq!(slices[0].path.matches('A').count(), 2);
        assert!(!slices[0].path.contains('L'));
    }

    #[test]
    fn palette_cycles_past_five_owners() {
        let owners: Vec<_> = (0..7).map(|i| owner(&format!("0x{i:040x}"), 10.0)).collect();
        let slices = pie_slices(&owners);
        assert_eq!(slices[5].color, SLICE_COLORS[0]);
        assert_eq!(slices[6].color, SLICE_COLORS[1]);
    }
}
