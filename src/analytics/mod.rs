//! Pure derivations over a store snapshot: period filtering, recipe costing,
//! revenue/demand aggregation and top-N ranking. Nothing here mutates state.

pub mod aggregate;
pub mod costing;
pub mod period;
pub mod ranking;

use rust_decimal::prelude::*;

pub use aggregate::{aggregate, aggregate_totals, average_ticket_price, period_stats, Totals};
pub use costing::{cost_item, market_movers, unit_cost, Costing};
pub use period::{filter_by_date, Dated};
pub use ranking::{item_stats, top_n};

const MONEY_DECIMAL_PLACES: u32 = 2;

/// Exact decimal form of an amount for accumulation. Non-finite input counts as 0.
pub(crate) fn money(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round to cents (half away from zero). Output boundaries only; internal
/// figures stay unrounded.
pub fn round_money(value: f64) -> f64 {
    Decimal::from_f64(value)
        .map(|d| {
            d.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
                .to_f64()
                .unwrap_or_default()
        })
        .unwrap_or(value)
}
